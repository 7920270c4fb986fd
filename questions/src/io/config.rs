//! CLI configuration stored in `questions.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::question::QuestionType;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "questions.toml";

/// CLI configuration (TOML).
///
/// Missing fields default to the values in `QuestionsConfig::default()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QuestionsConfig {
    /// Collection file read when `--file` is not given.
    pub questions_path: PathBuf,

    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Type for `add` when `--type` is omitted.
    pub default_type: QuestionType,
}

impl Default for QuestionsConfig {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from("questions.json"),
            pretty: true,
            default_type: QuestionType::ShortAnswer,
        }
    }
}

impl QuestionsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.questions_path.as_os_str().is_empty() {
            return Err(anyhow!("questions_path must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `QuestionsConfig::default()`.
pub fn load_config(path: &Path) -> Result<QuestionsConfig> {
    if !path.exists() {
        let cfg = QuestionsConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: QuestionsConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
