//! Collection file loading with schema + invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::Draft;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::invariants::validate_invariants;
use crate::question::Question;

/// JSON Schema for a question collection file.
pub const V1_SCHEMA: &str = include_str!("../../schemas/questions/v1.schema.json");

/// Load and validate a collection file (schema + invariants).
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read questions {}", path.display()))?;
    let questions = parse_questions(&contents)
        .with_context(|| format!("load questions {}", path.display()))?;
    info!(path = %path.display(), count = questions.len(), "loaded questions");
    Ok(questions)
}

/// Parse and validate collection JSON already in memory.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>> {
    let value: Value = serde_json::from_str(raw).context("parse questions json")?;
    let schema: Value = serde_json::from_str(V1_SCHEMA).context("parse v1 schema")?;
    validate_schema(&value, &schema)?;
    let questions: Vec<Question> =
        serde_json::from_value(value).context("deserialize questions")?;
    let errors = validate_invariants(&questions);
    if !errors.is_empty() {
        return Err(anyhow!("invariant violations:\n- {}", errors.join("\n- ")));
    }
    debug!(count = questions.len(), "questions passed validation");
    Ok(questions)
}

/// Serialize `value` to JSON, pretty-printed when `pretty` is set.
pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("serialize json")
}

/// Validate JSON instance against a JSON Schema (Draft 2020-12).
fn validate_schema(instance: &Value, schema: &Value) -> Result<()> {
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .context("compile json schema")?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        return Err(anyhow!(
            "schema validation failed:\n- {}",
            messages.join("\n- ")
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_collection;

    #[test]
    fn load_round_trips_rendered_collection() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("questions.json");
        let questions = sample_collection();
        fs::write(&path, render_json(&questions, true).expect("render")).expect("write");

        let loaded = load_questions(&path).expect("load");
        assert_eq!(loaded, questions);
    }

    #[test]
    fn load_reports_missing_file_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("absent.json");
        let err = load_questions(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.json"));
    }

    #[test]
    fn parse_rejects_schema_violations() {
        let raw = r#"[{"id": 1, "name": "a", "type": "essay"}]"#;
        let err = parse_questions(raw).unwrap_err();
        assert!(err.to_string().contains("schema validation failed"));
    }

    #[test]
    fn parse_rejects_invariant_violations() {
        let raw = r#"[
            {"id": 1, "name": "a", "body": "", "type": "short_answer_question",
             "options": ["x"], "expected": "", "points": 1, "published": false},
            {"id": 1, "name": "b", "body": "", "type": "short_answer_question",
             "options": [], "expected": "", "points": 1, "published": false}
        ]"#;
        let err = parse_questions(raw).unwrap_err().to_string();
        assert!(err.contains("invariant violations"));
        assert!(err.contains("duplicate id '1'"));
        assert!(err.contains("options must be empty"));
    }

    #[test]
    fn render_json_compact_has_no_newlines() {
        let rendered = render_json(&sample_collection(), false).expect("render");
        assert!(!rendered.contains('\n'));
        assert!(rendered.contains("\"type\":\"multiple_choice_question\""));
    }
}
