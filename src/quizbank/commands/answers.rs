use crate::collection::make_answers;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

/// A blank answer sheet for the bank, one answer per question.
pub fn run<S: DataStore>(store: &S, scope: Scope, published_only: bool) -> Result<CmdResult> {
    let mut questions = store.load_questions(scope)?;
    if published_only {
        questions.retain(|q| q.published);
    }
    Ok(CmdResult::default().with_answers(make_answers(&questions)))
}
