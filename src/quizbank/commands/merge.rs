use crate::collection::find_question;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::question::merge_question;
use crate::store::DataStore;

use super::helpers::{next_id, not_found, save_bank};

/// Appends a new question built from the content of `source_id`. Points default to
/// the source question's points.
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    source_id: i64,
    name: &str,
    points: Option<u32>,
    new_id: Option<i64>,
) -> Result<CmdResult> {
    let mut questions = store.load_questions(scope)?;
    let mut result = CmdResult::default();

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

    let merged = match find_question(&questions, source_id) {
        Some(source) => merge_question(new_id, name, source, points.unwrap_or(source.points)),
        None => {
            result.add_message(not_found(source_id));
            return Ok(result);
        }
    };

    questions.push(merged.clone());
    save_bank(store, scope, &questions)?;

    result.add_message(CmdMessage::success(format!(
        "Question merged ({} from {}): {}",
        new_id, source_id, merged.name
    )));
    result.affected_questions.push(merged);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn merges_content_with_new_identity() {
        let mut store = StoreFixture::new()
            .with_multiple_choice("Colors", &["red", "blue"], "red")
            .published()
            .worth(2)
            .build();

        run(&mut store, Scope::Project, 1, "Colors again", Some(5), None).unwrap();
        let bank = store.load_questions(Scope::Project).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank[1].id, 2);
        assert_eq!(bank[1].name, "Colors again");
        assert_eq!(bank[1].points, 5);
        assert_eq!(bank[1].options, vec!["red", "blue"]);
        assert!(!bank[1].published);
    }

    #[test]
    fn points_default_to_source() {
        let mut store = StoreFixture::new()
            .with_short_answer("Addition", "4")
            .worth(4)
            .build();
        let result = run(&mut store, Scope::Project, 1, "Sum", None, Some(10)).unwrap();
        assert_eq!(result.affected_questions[0].points, 4);
        assert_eq!(result.affected_questions[0].id, 10);
    }

    #[test]
    fn missing_source_warns() {
        let mut store = StoreFixture::new().build();
        let result = run(&mut store, Scope::Project, 1, "Sum", None, None).unwrap();
        assert!(result.has_warnings());
        assert_eq!(store.save_count(), 0);
    }
}
