//! Operations on ordered collections of questions.
//!
//! Inputs are borrowed slices; every function returns a newly built `Vec` (or a
//! scalar) and never touches the slice it was given. Lookups that miss are signalled
//! with `None` or an unchanged copy of the collection, never with an error.

use crate::model::{Answer, Question, QuestionType};
use crate::question::{duplicate_question, make_blank_question};

const CSV_HEADER: &str = "id,name,options,points,published";

pub fn get_published_questions(questions: &[Question]) -> Vec<Question> {
    questions.iter().filter(|q| q.published).cloned().collect()
}

/// Keeps questions that have a non-blank body, a non-blank expected answer, or at
/// least one option.
pub fn get_non_empty_questions(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .filter(|q| {
            !q.body.trim().is_empty() || !q.expected.trim().is_empty() || !q.options.is_empty()
        })
        .cloned()
        .collect()
}

pub fn find_question(questions: &[Question], id: i64) -> Option<&Question> {
    questions.iter().find(|q| q.id == id)
}

/// Drops the first question with the given id.
pub fn remove_question(questions: &[Question], id: i64) -> Vec<Question> {
    let mut remaining = questions.to_vec();
    if let Some(pos) = remaining.iter().position(|q| q.id == id) {
        remaining.remove(pos);
    }
    remaining
}

pub fn get_names(questions: &[Question]) -> Vec<String> {
    questions.iter().map(|q| q.name.clone()).collect()
}

pub fn sum_points(questions: &[Question]) -> u32 {
    questions.iter().map(|q| q.points).sum()
}

pub fn sum_published_points(questions: &[Question]) -> u32 {
    questions
        .iter()
        .filter(|q| q.published)
        .map(|q| q.points)
        .sum()
}

/// Header line plus one `id,name,options,points,published` row per question, where
/// `options` is the number of options. Lines are joined with `\n`, no trailing newline.
pub fn to_csv(questions: &[Question]) -> String {
    let rows = questions.iter().map(|q| {
        format!(
            "{},{},{},{},{}",
            q.id,
            q.name,
            q.options.len(),
            q.points,
            q.published
        )
    });
    std::iter::once(CSV_HEADER.to_string())
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn make_answers(questions: &[Question]) -> Vec<Answer> {
    questions.iter().map(|q| Answer::blank(q.id)).collect()
}

pub fn publish_all(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .map(|q| Question {
            published: true,
            ..q.clone()
        })
        .collect()
}

/// True when every question shares the first question's type (vacuously true when empty).
pub fn same_type(questions: &[Question]) -> bool {
    match questions.first() {
        Some(first) => questions
            .iter()
            .all(|q| q.question_type == first.question_type),
        None => true,
    }
}

pub fn add_new_question(
    questions: &[Question],
    id: i64,
    name: &str,
    question_type: QuestionType,
) -> Vec<Question> {
    let mut extended = questions.to_vec();
    extended.push(make_blank_question(id, name, question_type));
    extended
}

/// Copies the collection, replacing the question with `target_id` by `update(question)`.
fn map_target<F>(questions: &[Question], target_id: i64, update: F) -> Vec<Question>
where
    F: Fn(&Question) -> Question,
{
    questions
        .iter()
        .map(|q| {
            if q.id == target_id {
                update(q)
            } else {
                q.clone()
            }
        })
        .collect()
}

pub fn rename_question_by_id(questions: &[Question], target_id: i64, new_name: &str) -> Vec<Question> {
    map_target(questions, target_id, |q| Question {
        name: new_name.to_string(),
        ..q.clone()
    })
}

/// Switching to anything but multiple choice also clears the options.
pub fn change_question_type_by_id(
    questions: &[Question],
    target_id: i64,
    new_question_type: QuestionType,
) -> Vec<Question> {
    map_target(questions, target_id, |q| {
        let options = if new_question_type.is_multiple_choice() {
            q.options.clone()
        } else {
            Vec::new()
        };
        Question {
            question_type: new_question_type,
            options,
            ..q.clone()
        }
    })
}

/// Index `-1` appends `new_option`; an index inside the options replaces that entry.
/// Any other index leaves the options untouched.
pub fn edit_option(
    questions: &[Question],
    target_id: i64,
    target_option_index: isize,
    new_option: &str,
) -> Vec<Question> {
    map_target(questions, target_id, |q| {
        let mut options = q.options.clone();
        if target_option_index == -1 {
            options.push(new_option.to_string());
        } else if let Ok(index) = usize::try_from(target_option_index) {
            if let Some(slot) = options.get_mut(index) {
                *slot = new_option.to_string();
            }
        }
        Question {
            options,
            ..q.clone()
        }
    })
}

/// Inserts a duplicate (see [`duplicate_question`]) right after the first question
/// with `target_id`.
pub fn duplicate_question_in_array(questions: &[Question], target_id: i64, new_id: i64) -> Vec<Question> {
    let mut result = Vec::with_capacity(questions.len() + 1);
    let mut duplicated = false;
    for q in questions {
        result.push(q.clone());
        if !duplicated && q.id == target_id {
            result.push(duplicate_question(new_id, q));
            duplicated = true;
        }
    }
    result
}
