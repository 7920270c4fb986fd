//! Collection invariants that transforms rely on but never enforce.

use crate::question::Question;
use std::collections::HashSet;

/// Check collection invariants:
/// - No duplicate ids
/// - Only multiple-choice questions carry options
///
/// Returns stable error messages in collection order.
pub fn validate_invariants(questions: &[Question]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, question) in questions.iter().enumerate() {
        if !seen.insert(question.id) {
            errors.push(format!("duplicate id '{}' at index {}", question.id, index));
        }

        if !question.question_type.is_multiple_choice() && !question.options.is_empty() {
            errors.push(format!(
                "question {}: options must be empty for {}",
                question.id, question.question_type
            ));
        }
    }

    errors
}
