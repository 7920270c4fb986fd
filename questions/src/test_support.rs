//! Test-only helpers for constructing question collections.

use crate::question::{Question, QuestionType};

/// Create a deterministic short-answer question with no content.
pub fn question(id: i64, name: &str) -> Question {
    Question::blank(id, name, QuestionType::ShortAnswer)
}

/// Create a short-answer question with an explicit body and expected answer.
pub fn short_answer(id: i64, name: &str, body: &str, expected: &str) -> Question {
    Question {
        body: body.to_string(),
        expected: expected.to_string(),
        ..question(id, name)
    }
}

/// Create a multiple-choice question with the given options.
pub fn multiple_choice(id: i64, name: &str, options: &[&str]) -> Question {
    Question {
        question_type: QuestionType::MultipleChoice,
        options: options.iter().map(|option| option.to_string()).collect(),
        ..question(id, name)
    }
}

/// Return `question` with explicit `points` and `published`.
pub fn scored(question: Question, points: u32, published: bool) -> Question {
    Question {
        points,
        published,
        ..question
    }
}

/// The four-question collection used across the query and CSV tests.
pub fn sample_collection() -> Vec<Question> {
    vec![
        scored(short_answer(1, "Addition", "What is 2+2?", "4"), 1, true),
        scored(short_answer(2, "Letters", "What is the last letter?", "Z"), 1, false),
        scored(
            multiple_choice(5, "Colors", &["red", "apple", "firetruck"]),
            1,
            true,
        ),
        scored(multiple_choice(9, "Shapes", &["square", "triangle", "circle"]), 2, false),
    ]
}
