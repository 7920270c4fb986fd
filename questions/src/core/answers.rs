//! Answer records derived from questions.

use crate::question::{Answer, Question};

/// One blank answer per question, in collection order.
pub fn make_answers(questions: &[Question]) -> Vec<Answer> {
    questions
        .iter()
        .map(|question| Answer::blank(question.id))
        .collect()
}
