use crate::collection::{duplicate_question_in_array, find_question};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::{next_id, not_found, save_bank};

pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    target_id: i64,
    new_id: Option<i64>,
) -> Result<CmdResult> {
    let questions = store.load_questions(scope)?;
    let mut result = CmdResult::default();

    if find_question(&questions, target_id).is_none() {
        result.add_message(not_found(target_id));
        return Ok(result);
    }

    let new_id = match new_id {
        Some(explicit) => explicit,
        None => next_id(&questions)?,
    };
    if find_question(&questions, new_id).is_some() {
        result.add_message(CmdMessage::warning(format!(
            "Question {} already exists",
            new_id
        )));
        return Ok(result);
    }

    let updated = duplicate_question_in_array(&questions, target_id, new_id);
    save_bank(store, scope, &updated)?;

    if let Some(copy) = find_question(&updated, new_id) {
        result.add_message(CmdMessage::success(format!(
            "Question duplicated ({} -> {}): {}",
            target_id, new_id, copy.name
        )));
        result.affected_questions.push(copy.clone());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn inserts_copy_after_original() {
        let mut store = StoreFixture::new()
            .with_short_answer("Addition", "4")
            .published()
            .with_short_answer("Letters", "b")
            .build();

        let result = run(&mut store, Scope::Project, 1, None).unwrap();
        assert_eq!(result.affected_questions[0].id, 3);

        let bank = store.load_questions(Scope::Project).unwrap();
        let names: Vec<_> = bank.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, vec!["Addition", "Copy of Addition", "Letters"]);
        assert!(!bank[1].published);
        assert_eq!(bank[1].expected, "4");
    }

    #[test]
    fn refuses_taken_id() {
        let mut store = StoreFixture::new()
            .with_short_answer("Addition", "4")
            .with_short_answer("Letters", "b")
            .build();

        let result = run(&mut store, Scope::Project, 1, Some(2)).unwrap();
        assert!(result.has_warnings());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn missing_target_warns() {
        let mut store = StoreFixture::new().with_short_answer("Addition", "4").build();
        let result = run(&mut store, Scope::Project, 5, None).unwrap();
        assert!(result.has_warnings());
        assert_eq!(store.load_questions(Scope::Project).unwrap().len(), 1);
    }
}
