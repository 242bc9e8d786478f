use crate::collection::{edit_option, find_question};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

use super::helpers::{not_found, save_bank};

/// Option index meaning "append".
pub const APPEND: isize = -1;

/// Appends (`index == -1`) or replaces an option of question `id`.
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    id: i64,
    index: isize,
    text: &str,
) -> Result<CmdResult> {
    let questions = store.load_questions(scope)?;
    let mut result = CmdResult::default();

    let option_count = match find_question(&questions, id) {
        Some(q) => q.options.len(),
        None => {
            result.add_message(not_found(id));
            return Ok(result);
        }
    };

    let in_range = usize::try_from(index).is_ok_and(|i| i < option_count);
    if index != APPEND && !in_range {
        result.add_message(CmdMessage::warning(format!(
            "Question {} has no option {} ({} options)",
            id, index, option_count
        )));
        return Ok(result);
    }

    let updated = edit_option(&questions, id, index, text);
    save_bank(store, scope, &updated)?;

    let action = if index == APPEND {
        "added".to_string()
    } else {
        format!("{} replaced", index)
    };
    result.add_message(CmdMessage::success(format!(
        "Option {} on question {}: {}",
        action, id, text
    )));
    result.affected_questions = find_question(&updated, id).cloned().into_iter().collect();
    Ok(result)
}
