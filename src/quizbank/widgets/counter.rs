use super::{unknown_action, Widget, WidgetKind};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    value: u64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn add_one(&mut self) {
        self.value += 1;
    }
}

impl Widget for Counter {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Counter
    }

    fn actions(&self) -> &'static [&'static str] {
        &["add"]
    }

    fn apply(&mut self, action: &str) -> Result<()> {
        match action {
            "add" => self.add_one(),
            other => return Err(unknown_action(self.kind(), other)),
        }
        Ok(())
    }

    fn render(&self) -> Vec<String> {
        vec![format!("Add One to {}.", self.value)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let counter = Counter::new();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.render(), vec!["Add One to 0."]);
    }

    #[test]
    fn add_increments_by_one() {
        let mut counter = Counter::new();
        counter.apply("add").unwrap();
        counter.apply("add").unwrap();
        assert_eq!(counter.value(), 2);
    }
}
