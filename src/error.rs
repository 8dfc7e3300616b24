//! Error types for flight log analysis

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors raised while decoding a single flight record
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line is not valid JSON, or a field has the wrong type
    #[error("malformed flight record: {0}")]
    Malformed(String),

    /// A required field is absent
    #[error("missing required field `{field}`")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },

    /// A timestamp field could not be read as ISO-8601 with a UTC offset
    #[error("invalid timestamp in `{field}`: {value:?} ({reason})")]
    InvalidTimestamp {
        /// Name of the timestamp field
        field: &'static str,
        /// Raw value found in the record
        value: String,
        /// Underlying chrono error
        reason: String,
    },

    /// Blank or whitespace-only line
    #[error("empty line")]
    EmptyLine,
}

impl ParseError {
    /// Create a malformed record error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Create an invalid timestamp error
    pub fn invalid_timestamp(
        field: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidTimestamp {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors that abort an analysis run
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Dataset path missing or unreadable
    #[error("cannot open dataset file {}: {source}", .path.display())]
    FileAccess {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// I/O failure while reading lines from an already opened dataset
    #[error("failed reading line {line} of {}: {source}", .path.display())]
    Read {
        /// Path being read
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A line could not be decoded into a flight
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Decoding failure
        #[source]
        source: ParseError,
    },

    /// Report could not be rendered
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Create a file access error
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error at the given line
    pub fn parse(line: usize, source: ParseError) -> Self {
        Self::Parse { line, source }
    }

    /// Whether the error was caused by malformed input rather than I/O
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
