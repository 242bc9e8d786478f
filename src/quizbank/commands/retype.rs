use crate::collection::{change_question_type_by_id, find_question};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{QuestionType, Scope};
use crate::store::DataStore;

use super::helpers::{not_found, save_bank};

pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    id: i64,
    new_type: QuestionType,
) -> Result<CmdResult> {
    let questions = store.load_questions(scope)?;
    let mut result = CmdResult::default();

    let dropped_options = match find_question(&questions, id) {
        Some(q) if !new_type.is_multiple_choice() => q.options.len(),
        Some(_) => 0,
        None => {
            result.add_message(not_found(id));
            return Ok(result);
        }
    };

    let updated = change_question_type_by_id(&questions, id, new_type);
    save_bank(store, scope, &updated)?;

    result.add_message(CmdMessage::success(format!(
        "Question {} is now {}",
        id,
        new_type.label()
    )));
    if dropped_options > 0 {
        result.add_message(CmdMessage::info(format!(
            "Cleared {} options",
            dropped_options
        )));
    }
    result.affected_questions = find_question(&updated, id).cloned().into_iter().collect();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn short_answer_clears_options() {
        let mut store = StoreFixture::new()
            .with_multiple_choice("Colors", &["red", "blue"], "red")
            .with_multiple_choice("Shapes", &["square"], "square")
            .build();

        let result = run(&mut store, Scope::Project, 1, QuestionType::ShortAnswerQuestion).unwrap();
        assert_eq!(result.messages.len(), 2);

        let bank = store.load_questions(Scope::Project).unwrap();
        assert_eq!(bank[0].question_type, QuestionType::ShortAnswerQuestion);
        assert!(bank[0].options.is_empty());
        assert_eq!(bank[1].options, vec!["square"]);
    }

    #[test]
    fn missing_target_warns() {
        let mut store = StoreFixture::new().with_short_answer("Addition", "4").build();
        let result = run(&mut store, Scope::Project, 2, QuestionType::MultipleChoiceQuestion).unwrap();
        assert!(result.has_warnings());
        assert_eq!(store.save_count(), 0);
    }
}
