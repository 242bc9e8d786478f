use crate::collection::{find_question, rename_question_by_id};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::{not_found, save_bank};

pub fn run<S: DataStore>(store: &mut S, scope: Scope, id: i64, new_name: &str) -> Result<CmdResult> {
    let questions = store.load_questions(scope)?;
    let mut result = CmdResult::default();

    let old_name = match find_question(&questions, id) {
        Some(q) => q.name.clone(),
        None => {
            result.add_message(not_found(id));
            return Ok(result);
        }
    };

    let updated = rename_question_by_id(&questions, id, new_name);
    save_bank(store, scope, &updated)?;

    result.add_message(CmdMessage::success(format!(
        "Question renamed ({}): {} -> {}",
        id, old_name, new_name
    )));
    result.affected_questions = find_question(&updated, id).cloned().into_iter().collect();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn renames_target() {
        let mut store = StoreFixture::new()
            .with_short_answer("Addition", "4")
            .with_short_answer("Letters", "b")
            .build();

        run(&mut store, Scope::Project, 2, "Alphabet").unwrap();
        let bank = store.load_questions(Scope::Project).unwrap();
        assert_eq!(bank[0].name, "Addition");
        assert_eq!(bank[1].name, "Alphabet");
    }

    #[test]
    fn missing_target_is_not_saved() {
        let mut store = StoreFixture::new().with_short_answer("Addition", "4").build();
        let result = run(&mut store, Scope::Project, 7, "Nope").unwrap();
        assert!(result.has_warnings());
        assert_eq!(store.save_count(), 0);
    }
}
