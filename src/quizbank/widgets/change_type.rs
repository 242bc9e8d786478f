use super::{unknown_action, Widget, WidgetKind};
use crate::error::Result;
use crate::model::QuestionType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeType {
    current: QuestionType,
}

impl Default for ChangeType {
    fn default() -> Self {
        Self {
            current: QuestionType::ShortAnswerQuestion,
        }
    }
}

impl ChangeType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> QuestionType {
        self.current
    }

    pub fn toggle(&mut self) {
        self.current = match self.current {
            QuestionType::ShortAnswerQuestion => QuestionType::MultipleChoiceQuestion,
            QuestionType::MultipleChoiceQuestion => QuestionType::ShortAnswerQuestion,
        };
    }
}

impl Widget for ChangeType {
    fn kind(&self) -> WidgetKind {
        WidgetKind::ChangeType
    }

    fn actions(&self) -> &'static [&'static str] {
        &["change"]
    }

    fn apply(&mut self, action: &str) -> Result<()> {
        match action {
            "change" => self.toggle(),
            other => return Err(unknown_action(self.kind(), other)),
        }
        Ok(())
    }

    fn render(&self) -> Vec<String> {
        vec![
            format!("Current Type: {}", self.current.label()),
            "[Change Type]".to_string(),
        ]
    }
}
