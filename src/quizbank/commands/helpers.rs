use crate::commands::CmdMessage;
use crate::error::{QuizError, Result};
use crate::model::{Question, Scope};
use crate::store::DataStore;
use log::{info, warn};

/// One past the highest id in the bank (1 for an empty bank). Fails once the highest id
/// is `i64::MAX`; an explicit id is still accepted then.
pub fn next_id(questions: &[Question]) -> Result<i64> {
    let highest = questions.iter().map(|q| q.id).max().unwrap_or(0);
    highest.checked_add(1).ok_or_else(|| {
        QuizError::Api(format!(
            "No id after {} is available; pass an explicit --id",
            highest
        ))
    })
}

/// Copy of `questions` with the entry sharing `updated.id` swapped for `updated`.
pub fn replace_question(questions: &[Question], updated: &Question) -> Vec<Question> {
    questions
        .iter()
        .map(|q| {
            if q.id == updated.id {
                updated.clone()
            } else {
                q.clone()
            }
        })
        .collect()
}

pub fn not_found(id: i64) -> CmdMessage {
    warn!("Question {} not found", id);
    CmdMessage::warning(format!("Question {} not found", id))
}

pub fn save_bank<S: DataStore>(store: &mut S, scope: Scope, questions: &[Question]) -> Result<()> {
    store.save_questions(questions, scope)?;
    info!("Bank saved ({} questions)", questions.len());
    Ok(())
}
