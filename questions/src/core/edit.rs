//! Id-targeted transforms: remove, rename, retype and option edits.
//!
//! Every function returns a new collection. Targeting is filter-based: when
//! several questions share the target id, all of them are affected.

use crate::core::types::OptionSlot;
use crate::question::{Question, QuestionType};

/// Drop every question whose id matches.
pub fn remove_question(questions: &[Question], id: i64) -> Vec<Question> {
    questions
        .iter()
        .filter(|question| question.id != id)
        .cloned()
        .collect()
}

pub fn rename_question_by_id(
    questions: &[Question],
    target_id: i64,
    new_name: &str,
) -> Vec<Question> {
    map_matching(questions, target_id, |question| Question {
        name: new_name.to_string(),
        ..question.clone()
    })
}

/// Set the type of the matching question.
///
/// Options are cleared unless the new type is multiple choice.
pub fn change_question_type_by_id(
    questions: &[Question],
    target_id: i64,
    new_type: QuestionType,
) -> Vec<Question> {
    map_matching(questions, target_id, |question| Question {
        question_type: new_type,
        options: if new_type.is_multiple_choice() {
            question.options.clone()
        } else {
            Vec::new()
        },
        ..question.clone()
    })
}

/// Append or replace an option on the matching question.
///
/// Fails if `slot` is `At(i)` and `i` is past the end of a matching
/// question's options; nothing is returned in that case.
pub fn edit_option(
    questions: &[Question],
    target_id: i64,
    slot: OptionSlot,
    new_option: &str,
) -> Result<Vec<Question>, String> {
    questions
        .iter()
        .map(|question| {
            if question.id != target_id {
                return Ok(question.clone());
            }
            let options = with_option(&question.options, slot, new_option)
                .map_err(|err| format!("question {}: {}", question.id, err))?;
            Ok(Question {
                options,
                ..question.clone()
            })
        })
        .collect()
}

fn with_option(
    options: &[String],
    slot: OptionSlot,
    new_option: &str,
) -> Result<Vec<String>, String> {
    let mut updated = options.to_vec();
    match slot {
        OptionSlot::Append => updated.push(new_option.to_string()),
        OptionSlot::At(index) => {
            let len = updated.len();
            let target = updated.get_mut(index).ok_or_else(|| {
                format!("option index {} out of range for {} options", index, len)
            })?;
            *target = new_option.to_string();
        }
    }
    Ok(updated)
}

fn map_matching<F>(questions: &[Question], target_id: i64, update: F) -> Vec<Question>
where
    F: Fn(&Question) -> Question,
{
    questions
        .iter()
        .map(|question| {
            if question.id == target_id {
                update(question)
            } else {
                question.clone()
            }
        })
        .collect()
}
