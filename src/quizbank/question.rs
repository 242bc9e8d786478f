//! Operations on a single [`Question`].
//!
//! Every function here is pure: it borrows its input and returns a freshly built
//! value, so the original question stays valid and unchanged.

use crate::model::{Question, QuestionType};

const SHORT_FORM_LEN: usize = 10;

/// Builds a question with empty body, expected answer and options, worth one point
/// and unpublished.
pub fn make_blank_question(id: i64, name: impl Into<String>, question_type: QuestionType) -> Question {
    Question {
        id,
        name: name.into(),
        question_type,
        body: String::new(),
        expected: String::new(),
        options: Vec::new(),
        points: 1,
        published: false,
    }
}

/// Whether `answer` matches the expected answer, ignoring case and surrounding whitespace.
pub fn is_correct(question: &Question, answer: &str) -> bool {
    question.expected.trim().to_lowercase() == answer.trim().to_lowercase()
}

/// Any answer is valid for a short answer question; a multiple choice answer must be
/// exactly one of the options.
pub fn is_valid(question: &Question, answer: &str) -> bool {
    match question.question_type {
        QuestionType::ShortAnswerQuestion => true,
        QuestionType::MultipleChoiceQuestion => question.options.iter().any(|o| o == answer),
    }
}

/// `"{id}: {name}"` with the name cut to its first ten characters.
pub fn to_short_form(question: &Question) -> String {
    let name: String = question.name.chars().take(SHORT_FORM_LEN).collect();
    format!("{}: {}", question.id, name)
}

pub fn to_markdown(question: &Question) -> String {
    let mut markdown = format!("# {}\n{}", question.name, question.body);
    if question.question_type.is_multiple_choice() {
        let options = question
            .options
            .iter()
            .map(|option| format!("- {}", option))
            .collect::<Vec<_>>()
            .join("\n");
        markdown.push('\n');
        markdown.push_str(&options);
    }
    markdown
}

pub fn rename_question(question: &Question, new_name: &str) -> Question {
    Question {
        name: new_name.to_string(),
        ..question.clone()
    }
}

/// Flips the `published` flag.
pub fn publish_question(question: &Question) -> Question {
    Question {
        published: !question.published,
        ..question.clone()
    }
}

pub fn duplicate_question(id: i64, old_question: &Question) -> Question {
    Question {
        id,
        name: format!("Copy of {}", old_question.name),
        published: false,
        ..old_question.clone()
    }
}

pub fn add_option(question: &Question, new_option: &str) -> Question {
    let mut options = question.options.clone();
    options.push(new_option.to_string());
    Question {
        options,
        ..question.clone()
    }
}

/// Takes body, type, options and expected answer from `content_question`; id, name
/// and points come from the arguments. The result is never published.
pub fn merge_question(id: i64, name: &str, content_question: &Question, points: u32) -> Question {
    Question {
        id,
        name: name.to_string(),
        points,
        published: false,
        ..content_question.clone()
    }
}
