use super::{unknown_action, Widget, WidgetKind};
use crate::error::Result;

const ANSWER: u32 = 42;

/// A hidden answer behind a toggle button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealAnswer {
    visible: bool,
}

impl RevealAnswer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

impl Widget for RevealAnswer {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Reveal
    }

    fn actions(&self) -> &'static [&'static str] {
        &["toggle"]
    }

    fn apply(&mut self, action: &str) -> Result<()> {
        match action {
            "toggle" => self.toggle(),
            other => return Err(unknown_action(self.kind(), other)),
        }
        Ok(())
    }

    fn render(&self) -> Vec<String> {
        if self.visible {
            vec![
                "[Hide Answer]".to_string(),
                format!("The answer is {}.", ANSWER),
            ]
        } else {
            vec!["[Reveal Answer]".to_string()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_by_default() {
        let reveal = RevealAnswer::new();
        assert!(!reveal.is_visible());
        assert_eq!(reveal.render(), vec!["[Reveal Answer]"]);
    }

    #[test]
    fn toggle_shows_then_hides() {
        let mut reveal = RevealAnswer::new();
        reveal.apply("toggle").unwrap();
        assert_eq!(reveal.render(), vec!["[Hide Answer]", "The answer is 42."]);
        reveal.apply("toggle").unwrap();
        assert!(!reveal.is_visible());
    }
}
