use crate::collection::find_question;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Question, Scope};
use crate::store::DataStore;

use super::helpers::{not_found, replace_question, save_bank};

/// Field edits for one question; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct QuestionEdit {
    pub body: Option<String>,
    pub expected: Option<String>,
    pub points: Option<u32>,
}

impl QuestionEdit {
    pub fn is_empty(&self) -> bool {
        self.body.is_none() && self.expected.is_none() && self.points.is_none()
    }

    fn apply(&self, question: &Question) -> Question {
        Question {
            body: self.body.clone().unwrap_or_else(|| question.body.clone()),
            expected: self
                .expected
                .clone()
                .unwrap_or_else(|| question.expected.clone()),
            points: self.points.unwrap_or(question.points),
            ..question.clone()
        }
    }
}

pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    id: i64,
    edit: &QuestionEdit,
) -> Result<CmdResult> {
    let questions = store.load_questions(scope)?;
    let mut result = CmdResult::default();

    if edit.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update."));
        return Ok(result);
    }

    let edited = match find_question(&questions, id) {
        Some(q) => edit.apply(q),
        None => {
            result.add_message(not_found(id));
            return Ok(result);
        }
    };

    let updated = replace_question(&questions, &edited);
    save_bank(store, scope, &updated)?;

    result.add_message(CmdMessage::success(format!(
        "Question updated ({}): {}",
        id, edited.name
    )));
    result.affected_questions.push(edited);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_only_given_fields() {
        let mut store = StoreFixture::new().with_short_answer("Addition", "4").build();
        let edit = QuestionEdit {
            expected: Some("four".into()),
            points: Some(3),
            ..Default::default()
        };

        run(&mut store, Scope::Project, 1, &edit).unwrap();
        let bank = store.load_questions(Scope::Project).unwrap();
        assert_eq!(bank[0].expected, "four");
        assert_eq!(bank[0].points, 3);
        assert_eq!(bank[0].body, "Body of Addition");
    }

    #[test]
    fn empty_edit_is_a_no_op() {
        let mut store = StoreFixture::new().with_short_answer("Addition", "4").build();
        run(&mut store, Scope::Project, 1, &QuestionEdit::default()).unwrap();
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn missing_target_warns() {
        let mut store = StoreFixture::new().build();
        let edit = QuestionEdit {
            body: Some("x".into()),
            ..Default::default()
        };
        let result = run(&mut store, Scope::Project, 1, &edit).unwrap();
        assert!(result.has_warnings());
    }
}
