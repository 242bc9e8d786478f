//! Small practice widgets.
//!
//! Each widget is a self-contained state machine: it starts in a fixed initial state,
//! accepts a handful of named actions and renders itself as lines of text. Nothing is
//! persisted; the CLI builds a fresh widget, replays the requested actions and prints
//! the result.

use crate::error::{QuizError, Result};
use std::fmt;
use std::str::FromStr;

pub mod attempt;
pub mod change_type;
pub mod counter;
pub mod dice;
pub mod holiday;
pub mod reveal;

pub use attempt::StartAttempt;
pub use change_type::ChangeType;
pub use counter::Counter;
pub use dice::TwoDice;
pub use holiday::CycleHoliday;
pub use reveal::RevealAnswer;

pub trait Widget {
    fn kind(&self) -> WidgetKind;

    /// Action names accepted by [`Widget::apply`].
    fn actions(&self) -> &'static [&'static str];

    fn apply(&mut self, action: &str) -> Result<()>;

    fn render(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Counter,
    Reveal,
    ChangeType,
    Attempt,
    Dice,
    Holiday,
}

impl WidgetKind {
    /// Page order.
    pub const ALL: [WidgetKind; 6] = [
        WidgetKind::Counter,
        WidgetKind::Reveal,
        WidgetKind::ChangeType,
        WidgetKind::Attempt,
        WidgetKind::Dice,
        WidgetKind::Holiday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Counter => "counter",
            WidgetKind::Reveal => "reveal",
            WidgetKind::ChangeType => "change-type",
            WidgetKind::Attempt => "attempt",
            WidgetKind::Dice => "dice",
            WidgetKind::Holiday => "holiday",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WidgetKind::Counter => "Counter",
            WidgetKind::Reveal => "Reveal Answer",
            WidgetKind::ChangeType => "Change Type",
            WidgetKind::Attempt => "Start Attempt",
            WidgetKind::Dice => "Two Dice",
            WidgetKind::Holiday => "Cycle Holiday",
        }
    }

    /// A widget of this kind in its initial state.
    pub fn build(&self) -> Box<dyn Widget> {
        match self {
            WidgetKind::Counter => Box::new(Counter::new()),
            WidgetKind::Reveal => Box::new(RevealAnswer::new()),
            WidgetKind::ChangeType => Box::new(ChangeType::new()),
            WidgetKind::Attempt => Box::new(StartAttempt::new()),
            WidgetKind::Dice => Box::new(TwoDice::new()),
            WidgetKind::Holiday => Box::new(CycleHoliday::new()),
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WidgetKind {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        WidgetKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| QuizError::UnknownWidget(s.to_string()))
    }
}

/// Every widget in page order, freshly built.
pub fn page() -> Vec<Box<dyn Widget>> {
    WidgetKind::ALL.iter().map(|kind| kind.build()).collect()
}

/// Builds `kind` and applies `actions` in order, stopping at the first unknown action.
pub fn replay<A: AsRef<str>>(kind: WidgetKind, actions: &[A]) -> Result<Box<dyn Widget>> {
    let mut widget = kind.build();
    for action in actions {
        widget.apply(action.as_ref())?;
    }
    Ok(widget)
}

pub(crate) fn unknown_action(kind: WidgetKind, action: &str) -> QuizError {
    QuizError::UnknownAction {
        widget: kind.name().to_string(),
        action: action.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_by_name() {
        for kind in WidgetKind::ALL {
            assert_eq!(kind.name().parse::<WidgetKind>().unwrap(), kind);
        }
        assert_eq!(" Dice ".parse::<WidgetKind>().unwrap(), WidgetKind::Dice);
        assert!(matches!(
            "slider".parse::<WidgetKind>(),
            Err(QuizError::UnknownWidget(_))
        ));
    }

    #[test]
    fn page_builds_every_widget_in_order() {
        let kinds: Vec<_> = page().iter().map(|w| w.kind()).collect();
        assert_eq!(kinds, WidgetKind::ALL.to_vec());
    }

    #[test]
    fn replay_applies_actions() {
        let widget = replay(WidgetKind::Counter, &["add", "add", "add"]).unwrap();
        assert_eq!(widget.render(), vec!["Add One to 3."]);
    }

    #[test]
    fn replay_rejects_unknown_action() {
        let err = replay(WidgetKind::Reveal, &["toggle", "explode"]).err().unwrap();
        assert!(matches!(err, QuizError::UnknownAction { ref action, .. } if action == "explode"));
    }

    #[test]
    fn advertised_actions_are_accepted() {
        for kind in WidgetKind::ALL {
            let mut widget = kind.build();
            for action in widget.actions() {
                widget.apply(action).unwrap();
            }
        }
    }
}
