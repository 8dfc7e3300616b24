//! Run configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dataset read when no input is given
pub const DEFAULT_INPUT_PATH: &str = "var/input.jsonl";

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed text layout
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON log lines instead of plain text
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Settings for one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// JSONL dataset to analyse
    pub input: PathBuf,
    /// Report format
    pub format: OutputFormat,
    /// Logging
    pub log: LogConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            format: OutputFormat::default(),
            log: LogConfig::default(),
        }
    }
}
