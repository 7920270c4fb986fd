//! Transforms that grow a collection or rewrite every question.

use crate::question::{Question, QuestionType};

/// Append a blank question. The caller supplies a fresh id.
pub fn add_new_question(
    questions: &[Question],
    id: i64,
    name: &str,
    question_type: QuestionType,
) -> Vec<Question> {
    let mut added = questions.to_vec();
    added.push(Question::blank(id, name, question_type));
    added
}

/// Insert a `Copy of` duplicate directly after each question with `target_id`.
///
/// Returns an equal copy when nothing matches.
pub fn duplicate_question_in_array(
    questions: &[Question],
    target_id: i64,
    new_id: i64,
) -> Vec<Question> {
    let mut duplicated = Vec::with_capacity(questions.len() + 1);
    for question in questions {
        duplicated.push(question.clone());
        if question.id == target_id {
            duplicated.push(question.duplicate(new_id));
        }
    }
    duplicated
}

pub fn publish_all(questions: &[Question]) -> Vec<Question> {
    questions
        .iter()
        .map(|question| Question {
            published: true,
            ..question.clone()
        })
        .collect()
}
