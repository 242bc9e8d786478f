use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    ShortAnswerQuestion,
    MultipleChoiceQuestion,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::ShortAnswerQuestion => "short_answer_question",
            QuestionType::MultipleChoiceQuestion => "multiple_choice_question",
        }
    }

    /// Human readable label, used by the widgets and the list view.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::ShortAnswerQuestion => "Short Answer",
            QuestionType::MultipleChoiceQuestion => "Multiple Choice",
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, QuestionType::MultipleChoiceQuestion)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short_answer_question" | "short-answer" | "short" => {
                Ok(QuestionType::ShortAnswerQuestion)
            }
            "multiple_choice_question" | "multiple-choice" | "multiple" | "mc" => {
                Ok(QuestionType::MultipleChoiceQuestion)
            }
            other => Err(format!(
                "Invalid question type '{}' (expected short_answer_question or multiple_choice_question)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub expected: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default = "default_points")]
    pub points: u32,
    #[serde(default)]
    pub published: bool,
}

fn default_points() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: i64,
    pub text: String,
    pub submitted: bool,
    pub correct: bool,
}

impl Answer {
    pub fn blank(question_id: i64) -> Self {
        Self {
            question_id,
            text: String::new(),
            submitted: false,
            correct: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_parses_full_names_and_aliases() {
        assert_eq!(
            "short_answer_question".parse::<QuestionType>().unwrap(),
            QuestionType::ShortAnswerQuestion
        );
        assert_eq!(
            "MC".parse::<QuestionType>().unwrap(),
            QuestionType::MultipleChoiceQuestion
        );
        assert!("essay".parse::<QuestionType>().is_err());
    }

    #[test]
    fn question_serializes_type_field() {
        let q = Question {
            id: 3,
            name: "Colors".into(),
            question_type: QuestionType::MultipleChoiceQuestion,
            body: String::new(),
            expected: "red".into(),
            options: vec!["red".into(), "blue".into()],
            points: 2,
            published: true,
        };
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "multiple_choice_question");
        assert_eq!(json["points"], 2);
    }

    #[test]
    fn question_defaults_missing_fields() {
        let q: Question =
            serde_json::from_str(r#"{"id": 1, "name": "A", "type": "short_answer_question"}"#)
                .unwrap();
        assert_eq!(q.points, 1);
        assert!(!q.published);
        assert!(q.options.is_empty());
    }

    #[test]
    fn answer_uses_camel_case_question_id() {
        let json = serde_json::to_value(Answer::blank(7)).unwrap();
        assert_eq!(json["questionId"], 7);
        assert_eq!(json["text"], "");
    }
}
