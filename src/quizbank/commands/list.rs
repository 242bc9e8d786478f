use crate::collection::{get_non_empty_questions, get_published_questions};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionFilter {
    pub published_only: bool,
    pub non_empty_only: bool,
}

pub fn run<S: DataStore>(store: &S, scope: Scope, filter: QuestionFilter) -> Result<CmdResult> {
    let mut questions = store.load_questions(scope)?;
    if filter.published_only {
        questions = get_published_questions(&questions);
    }
    if filter.non_empty_only {
        questions = get_non_empty_questions(&questions);
    }
    Ok(CmdResult::default().with_listed_questions(questions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn store() -> crate::store::memory::InMemoryStore {
        StoreFixture::new()
            .with_short_answer("Addition", "4")
            .published()
            .with_blank("Empty")
            .published()
            .with_multiple_choice("Colors", &["red", "blue"], "red")
            .build()
    }

    #[test]
    fn lists_everything_in_bank_order() {
        let result = run(&store(), Scope::Project, QuestionFilter::default()).unwrap();
        let names: Vec<_> = result.listed_questions.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, vec!["Addition", "Empty", "Colors"]);
    }

    #[test]
    fn published_filter() {
        let filter = QuestionFilter {
            published_only: true,
            ..Default::default()
        };
        let result = run(&store(), Scope::Project, filter).unwrap();
        assert_eq!(result.listed_questions.len(), 2);
    }

    #[test]
    fn filters_combine() {
        let filter = QuestionFilter {
            published_only: true,
            non_empty_only: true,
        };
        let result = run(&store(), Scope::Project, filter).unwrap();
        assert_eq!(result.listed_questions.len(), 1);
        assert_eq!(result.listed_questions[0].name, "Addition");
    }
}
