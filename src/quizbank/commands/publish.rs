use crate::collection::{find_question, publish_all};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::question::publish_question;
use crate::store::DataStore;

use super::helpers::{not_found, replace_question, save_bank};

/// Toggles the published flag of one question.
pub fn toggle<S: DataStore>(store: &mut S, scope: Scope, id: i64) -> Result<CmdResult> {
    let questions = store.load_questions(scope)?;
    let mut result = CmdResult::default();

    let toggled = match find_question(&questions, id) {
        Some(q) => publish_question(q),
        None => {
            result.add_message(not_found(id));
            return Ok(result);
        }
    };

    let updated = replace_question(&questions, &toggled);
    save_bank(store, scope, &updated)?;

    let verb = if toggled.published {
        "published"
    } else {
        "unpublished"
    };
    result.add_message(CmdMessage::success(format!(
        "Question {} ({}): {}",
        verb, id, toggled.name
    )));
    result.affected_questions.push(toggled);
    Ok(result)
}

pub fn all<S: DataStore>(store: &mut S, scope: Scope) -> Result<CmdResult> {
    let questions = store.load_questions(scope)?;
    let updated = publish_all(&questions);
    save_bank(store, scope, &updated)?;

    let mut result = CmdResult::default().with_affected_questions(updated);
    result.add_message(CmdMessage::success(format!(
        "Published {} questions",
        result.affected_questions.len()
    )));
    Ok(result)
}
