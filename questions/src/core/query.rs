//! Read-only queries over a question collection.

use crate::question::Question;

/// Questions with `published=true`, in collection order.
pub fn published_questions(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .filter(|question| question.published)
        .cloned()
        .collect()
}

/// Questions that have a body, an expected answer, or at least one option.
pub fn non_empty_questions(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .filter(|question| !question.is_empty())
        .cloned()
        .collect()
}

/// First question with the given id.
///
/// Returns `None` if no question matches.
pub fn find_question(questions: &[Question], id: i64) -> Option<&Question> {
    questions.iter().find(|question| question.id == id)
}

pub fn names(questions: &[Question]) -> Vec<String> {
    questions
        .iter()
        .map(|question| question.name.clone())
        .collect()
}

/// Total points, widened to `u64` so any collection of `u32` weights fits.
pub fn sum_points(questions: &[Question]) -> u64 {
    questions
        .iter()
        .map(|question| u64::from(question.points))
        .sum()
}

pub fn sum_published_points(questions: &[Question]) -> u64 {
    questions
        .iter()
        .filter(|question| question.published)
        .map(|question| u64::from(question.points))
        .sum()
}

/// True if every question shares the first question's type.
///
/// An empty collection is trivially the same type.
pub fn same_type(questions: &[Question]) -> bool {
    match questions.first() {
        None => true,
        Some(first) => questions
            .iter()
            .all(|question| question.question_type == first.question_type),
    }
}
