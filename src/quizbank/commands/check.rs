use crate::collection::find_question;
use crate::commands::{AnswerCheck, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::question::{is_correct, is_valid};
use crate::store::DataStore;

use super::helpers::not_found;

/// Grades a single answer. Invalid answers (not one of the options of a multiple
/// choice question) are never reported as correct.
pub fn run<S: DataStore>(store: &S, scope: Scope, id: i64, answer: &str) -> Result<CmdResult> {
    let questions = store.load_questions(scope)?;
    let mut result = CmdResult::default();

    let question = match find_question(&questions, id) {
        Some(q) => q,
        None => {
            result.add_message(not_found(id));
            return Ok(result);
        }
    };

    let valid = is_valid(question, answer);
    let correct = valid && is_correct(question, answer);
    Ok(result.with_check(AnswerCheck {
        question_id: id,
        valid,
        correct,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn store() -> crate::store::memory::InMemoryStore {
        StoreFixture::new()
            .with_short_answer("Addition", "4")
            .with_multiple_choice("Colors", &["red", "apple"], "red")
            .build()
    }

    #[test]
    fn short_answer_is_case_and_space_insensitive() {
        let check = run(&store(), Scope::Project, 1, " 4 ").unwrap().check.unwrap();
        assert!(check.valid);
        assert!(check.correct);
    }

    #[test]
    fn multiple_choice_must_match_an_option() {
        let check = run(&store(), Scope::Project, 2, "RED").unwrap().check.unwrap();
        assert!(!check.valid);
        assert!(!check.correct);

        let check = run(&store(), Scope::Project, 2, "apple").unwrap().check.unwrap();
        assert!(check.valid);
        assert!(!check.correct);
    }

    #[test]
    fn verdict_is_carried_only_by_the_check() {
        let result = run(&store(), Scope::Project, 2, "red").unwrap();
        assert!(result.messages.is_empty());
        assert!(result.check.unwrap().correct);
    }

    #[test]
    fn missing_question_warns() {
        let result = run(&store(), Scope::Project, 3, "4").unwrap();
        assert!(result.check.is_none());
        assert!(result.has_warnings());
    }
}
