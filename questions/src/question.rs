use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Structural tag of a question. Only multiple-choice questions carry options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "multiple_choice_question")]
    MultipleChoice,
    #[serde(rename = "short_answer_question")]
    ShortAnswer,
}

impl QuestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice_question",
            QuestionType::ShortAnswer => "short_answer_question",
        }
    }

    pub fn is_multiple_choice(self) -> bool {
        matches!(self, QuestionType::MultipleChoice)
    }

    /// The other variant.
    pub fn toggled(self) -> Self {
        match self {
            QuestionType::MultipleChoice => QuestionType::ShortAnswer,
            QuestionType::ShortAnswer => QuestionType::MultipleChoice,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multiple_choice_question" => Ok(QuestionType::MultipleChoice),
            "short_answer_question" => Ok(QuestionType::ShortAnswer),
            other => Err(format!(
                "unknown question type '{}' (expected multiple_choice_question or short_answer_question)",
                other
            )),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub name: String,
    pub body: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub expected: String,
    pub points: u32,
    pub published: bool,
}

impl Question {
    /// A fresh, unpublished question worth one point with no content.
    pub fn blank(id: i64, name: impl Into<String>, question_type: QuestionType) -> Self {
        Question {
            id,
            name: name.into(),
            body: String::new(),
            question_type,
            options: Vec::new(),
            expected: String::new(),
            points: 1,
            published: false,
        }
    }

    /// True when body, expected answer and options are all empty.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.expected.is_empty() && self.options.is_empty()
    }

    /// Copy under a new id, named `Copy of <name>`.
    pub fn duplicate(&self, new_id: i64) -> Self {
        Question {
            id: new_id,
            name: format!("Copy of {}", self.name),
            ..self.clone()
        }
    }
}

/// A response slot for one question. `question_id` is a plain back-reference.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: i64,
    pub text: String,
    pub submitted: bool,
    pub correct: bool,
}

impl Answer {
    pub fn blank(question_id: i64) -> Self {
        Answer {
            question_id,
            text: String::new(),
            submitted: false,
            correct: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn question_type_uses_wire_tags() {
        let value = serde_json::to_value(QuestionType::MultipleChoice).expect("serialize");
        assert_eq!(value, json!("multiple_choice_question"));
        let parsed: QuestionType =
            serde_json::from_value(json!("short_answer_question")).expect("deserialize");
        assert_eq!(parsed, QuestionType::ShortAnswer);
    }

    #[test]
    fn question_type_from_str_rejects_unknown_tags() {
        assert_eq!(
            "multiple_choice_question".parse::<QuestionType>(),
            Ok(QuestionType::MultipleChoice)
        );
        let err = "essay".parse::<QuestionType>().unwrap_err();
        assert!(err.contains("essay"));
    }

    #[test]
    fn toggled_switches_between_variants() {
        assert_eq!(
            QuestionType::ShortAnswer.toggled(),
            QuestionType::MultipleChoice
        );
        assert_eq!(
            QuestionType::MultipleChoice.toggled().toggled(),
            QuestionType::MultipleChoice
        );
    }

    #[test]
    fn question_serializes_type_field() {
        let question = Question::blank(1, "Addition", QuestionType::ShortAnswer);
        let value = serde_json::to_value(&question).expect("serialize");
        assert_eq!(value["type"], json!("short_answer_question"));
        assert_eq!(value["points"], json!(1));
        assert_eq!(value["published"], json!(false));
    }

    #[test]
    fn answer_uses_camel_case_question_id() {
        let value = serde_json::to_value(Answer::blank(7)).expect("serialize");
        assert_eq!(
            value,
            json!({"questionId": 7, "text": "", "submitted": false, "correct": false})
        );
    }

    #[test]
    fn duplicate_prefixes_name_and_keeps_content() {
        let mut original = Question::blank(1, "Colors", QuestionType::MultipleChoice);
        original.options = vec!["red".to_string(), "blue".to_string()];
        original.published = true;

        let copy = original.duplicate(9);
        assert_eq!(copy.id, 9);
        assert_eq!(copy.name, "Copy of Colors");
        assert_eq!(copy.options, original.options);
        assert!(copy.published);
    }
}
