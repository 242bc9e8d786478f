use super::{unknown_action, Widget, WidgetKind};
use crate::error::Result;

/// Counts attempts. Start is only possible while inactive and stop only while active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartAttempt {
    attempts: u32,
    active: bool,
}

impl StartAttempt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn start(&mut self) {
        if !self.active {
            self.active = true;
            self.attempts += 1;
        }
    }

    pub fn stop(&mut self) {
        if self.active {
            self.active = false;
        }
    }
}

fn button(label: &str, disabled: bool) -> String {
    if disabled {
        format!("[{}] (disabled)", label)
    } else {
        format!("[{}]", label)
    }
}

impl Widget for StartAttempt {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Attempt
    }

    fn actions(&self) -> &'static [&'static str] {
        &["start", "stop"]
    }

    fn apply(&mut self, action: &str) -> Result<()> {
        match action {
            "start" => self.start(),
            "stop" => self.stop(),
            other => return Err(unknown_action(self.kind(), other)),
        }
        Ok(())
    }

    fn render(&self) -> Vec<String> {
        vec![
            format!("Attempts: {}", self.attempts),
            button("Start Attempt", self.active),
            button("Stop Attempt", !self.active),
        ]
    }
}
