use crate::collection::find_question;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Scope;
use crate::question::to_markdown;
use crate::store::DataStore;

use super::helpers::not_found;

/// Looks up each id and renders the hits as markdown, separated by blank lines.
pub fn run<S: DataStore>(store: &S, scope: Scope, ids: &[i64]) -> Result<CmdResult> {
    let questions = store.load_questions(scope)?;
    let mut result = CmdResult::default();

    for &id in ids {
        match find_question(&questions, id) {
            Some(q) => result.listed_questions.push(q.clone()),
            None => result.add_message(not_found(id)),
        }
    }

    let rendered = result
        .listed_questions
        .iter()
        .map(to_markdown)
        .collect::<Vec<_>>()
        .join("\n\n");
    Ok(result.with_rendered(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn renders_found_questions() {
        let store = StoreFixture::new()
            .with_short_answer("Addition", "4")
            .with_multiple_choice("Colors", &["red", "blue"], "red")
            .build();

        let result = run(&store, Scope::Project, &[2, 1]).unwrap();
        assert_eq!(
            result.rendered.as_deref(),
            Some("# Colors\nBody of Colors\n- red\n- blue\n\n# Addition\nBody of Addition")
        );
        assert!(!result.has_warnings());
    }

    #[test]
    fn warns_on_missing_ids() {
        let store = StoreFixture::new().with_short_answer("Addition", "4").build();
        let result = run(&store, Scope::Project, &[1, 9]).unwrap();
        assert_eq!(result.listed_questions.len(), 1);
        assert!(result.has_warnings());
    }
}
