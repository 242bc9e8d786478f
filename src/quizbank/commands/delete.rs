use crate::collection::{find_question, remove_question};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::{not_found, save_bank};

pub fn run<S: DataStore>(store: &mut S, scope: Scope, ids: &[i64]) -> Result<CmdResult> {
    let mut questions = store.load_questions(scope)?;
    let mut result = CmdResult::default();

    for &id in ids {
        match find_question(&questions, id).cloned() {
            Some(q) => {
                questions = remove_question(&questions, id);
                result.add_message(CmdMessage::success(format!(
                    "Question deleted ({}): {}",
                    id, q.name
                )));
                result.affected_questions.push(q);
            }
            None => result.add_message(not_found(id)),
        }
    }

    if !result.affected_questions.is_empty() {
        save_bank(store, scope, &questions)?;
    }
    Ok(result)
}
