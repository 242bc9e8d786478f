use crate::collection::{get_published_questions, same_type, sum_points, sum_published_points};
use crate::commands::{BankSummary, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, scope: Scope) -> Result<CmdResult> {
    let questions = store.load_questions(scope)?;
    let summary = BankSummary {
        questions: questions.len(),
        published: get_published_questions(&questions).len(),
        total_points: sum_points(&questions),
        published_points: sum_published_points(&questions),
        same_type: same_type(&questions),
    };
    Ok(CmdResult::default().with_summary(summary))
}
