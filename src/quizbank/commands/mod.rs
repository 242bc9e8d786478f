use crate::config::QuizConfig;
use crate::error::{QuizError, Result};
use crate::model::{Answer, Question, Scope};
use std::path::PathBuf;

pub mod answers;
pub mod check;
pub mod config;
pub mod create;
pub mod delete;
pub mod duplicate;
pub mod export;
pub mod helpers;
pub mod import;
pub mod init;
pub mod list;
pub mod merge;
pub mod options;
pub mod publish;
pub mod rename;
pub mod retype;
pub mod stats;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct QuizPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl QuizPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| QuizError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Point and type totals for a bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankSummary {
    pub questions: usize,
    pub published: usize,
    pub total_points: u32,
    pub published_points: u32,
    pub same_type: bool,
}

/// Outcome of checking one answer against a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerCheck {
    pub question_id: i64,
    pub valid: bool,
    pub correct: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_questions: Vec<Question>,
    pub listed_questions: Vec<Question>,
    pub answers: Vec<Answer>,
    pub rendered: Option<String>,
    pub summary: Option<BankSummary>,
    pub check: Option<AnswerCheck>,
    pub config: Option<QuizConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_questions(mut self, questions: Vec<Question>) -> Self {
        self.affected_questions = questions;
        self
    }

    pub fn with_listed_questions(mut self, questions: Vec<Question>) -> Self {
        self.listed_questions = questions;
        self
    }

    pub fn with_answers(mut self, answers: Vec<Answer>) -> Self {
        self.answers = answers;
        self
    }

    pub fn with_rendered(mut self, text: String) -> Self {
        self.rendered = Some(text);
        self
    }

    pub fn with_summary(mut self, summary: BankSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_check(mut self, check: AnswerCheck) -> Self {
        self.check = Some(check);
        self
    }

    pub fn with_config(mut self, config: QuizConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
