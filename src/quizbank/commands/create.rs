use crate::collection::{add_new_question, find_question};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{QuestionType, Scope};
use crate::store::DataStore;

use super::helpers::{next_id, save_bank};

pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    name: String,
    question_type: QuestionType,
    id: Option<i64>,
) -> Result<CmdResult> {
    let questions = store.load_questions(scope)?;
    let id = match id {
        Some(explicit) => explicit,
        None => next_id(&questions)?,
    };
    let mut result = CmdResult::default();

    if find_question(&questions, id).is_some() {
        result.add_message(CmdMessage::warning(format!(
            "Question {} already exists",
            id
        )));
        return Ok(result);
    }

    let updated = add_new_question(&questions, id, &name, question_type);
    save_bank(store, scope, &updated)?;

    result.add_message(CmdMessage::success(format!(
        "Question created ({}): {}",
        id, name
    )));
    result.affected_questions = updated.last().cloned().into_iter().collect();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_blank_question_with_next_id() {
        let mut store = InMemoryStore::new();
        run(&mut store, Scope::Project, "A".into(), QuestionType::ShortAnswerQuestion, None).unwrap();
        let result = run(
            &mut store,
            Scope::Project,
            "B".into(),
            QuestionType::MultipleChoiceQuestion,
            None,
        )
        .unwrap();

        assert_eq!(result.affected_questions[0].id, 2);
        let bank = store.load_questions(Scope::Project).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank[1].name, "B");
        assert_eq!(bank[1].points, 1);
        assert!(!bank[1].published);
    }

    #[test]
    fn explicit_id_is_used() {
        let mut store = InMemoryStore::new();
        run(&mut store, Scope::Project, "A".into(), QuestionType::ShortAnswerQuestion, Some(42)).unwrap();
        let bank = store.load_questions(Scope::Project).unwrap();
        assert_eq!(bank[0].id, 42);
    }

    #[test]
    fn duplicate_id_is_rejected_without_saving() {
        let mut store = InMemoryStore::new();
        run(&mut store, Scope::Project, "A".into(), QuestionType::ShortAnswerQuestion, Some(1)).unwrap();
        let result =
            run(&mut store, Scope::Project, "B".into(), QuestionType::ShortAnswerQuestion, Some(1)).unwrap();

        assert!(result.has_warnings());
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load_questions(Scope::Project).unwrap().len(), 1);
    }

    #[test]
    fn bank_holding_max_id_needs_explicit_id() {
        let mut store = InMemoryStore::new();
        run(&mut store, Scope::Project, "Max".into(), QuestionType::ShortAnswerQuestion, Some(i64::MAX)).unwrap();

        let next = run(&mut store, Scope::Project, "Next".into(), QuestionType::ShortAnswerQuestion, None);
        assert!(next.is_err());
        assert_eq!(store.save_count(), 1);

        run(&mut store, Scope::Project, "Low".into(), QuestionType::ShortAnswerQuestion, Some(7)).unwrap();
        assert_eq!(store.load_questions(Scope::Project).unwrap().len(), 2);
    }

    #[test]
    fn scopes_are_separate() {
        let mut store = InMemoryStore::new();
        run(&mut store, Scope::Global, "G".into(), QuestionType::ShortAnswerQuestion, None).unwrap();
        assert!(store.load_questions(Scope::Project).unwrap().is_empty());
        assert_eq!(store.load_questions(Scope::Global).unwrap().len(), 1);
    }
}
