use super::{unknown_action, Widget, WidgetKind};
use crate::error::Result;

const HOLIDAYS: [(&str, &str); 5] = [
    ("🎄", "Christmas"),
    ("🎃", "Halloween"),
    ("🎆", "New Year"),
    ("🦃", "Thanksgiving"),
    ("❤️", "Valentine's Day"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleHoliday {
    index: usize,
}

impl CycleHoliday {
    pub fn new() -> Self {
        Self::default()
    }

    /// `"{emoji} {name}"` of the current holiday.
    pub fn current(&self) -> String {
        let (emoji, name) = HOLIDAYS[self.index];
        format!("{} {}", emoji, name)
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % HOLIDAYS.len();
    }
}

impl Widget for CycleHoliday {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Holiday
    }

    fn actions(&self) -> &'static [&'static str] {
        &["next"]
    }

    fn apply(&mut self, action: &str) -> Result<()> {
        match action {
            "next" => self.next(),
            other => return Err(unknown_action(self.kind(), other)),
        }
        Ok(())
    }

    fn render(&self) -> Vec<String> {
        vec![
            format!("Current Holiday: {}", self.current()),
            "[Next Holiday]".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_christmas() {
        assert_eq!(CycleHoliday::new().current(), "🎄 Christmas");
    }

    #[test]
    fn wraps_after_fifth_holiday() {
        let mut widget = CycleHoliday::new();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(widget.current());
            widget.apply("next").unwrap();
        }
        assert_eq!(seen[4], "❤️ Valentine's Day");
        assert_eq!(widget, CycleHoliday::new());
    }
}
