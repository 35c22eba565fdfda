use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ConsolidateError>;

/// Which phrase column of a record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseSide {
    /// Field 0 of a record.
    Target,
    /// Field 1 of a record.
    Source,
}

impl fmt::Display for PhraseSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhraseSide::Target => write!(f, "target"),
            PhraseSide::Source => write!(f, "source"),
        }
    }
}

/// Error type covering every way a consolidation run can fail. None of them
/// are recoverable: the run stops at the first one.
#[derive(Debug, Error)]
pub enum ConsolidateError {
    /// Raised when the run configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Raised when an input or output file cannot be opened.
    #[error("could not open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Raised when reading a table fails part way through.
    #[error("failed to read {}, line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        source: std::io::Error,
    },

    /// Raised when writing the consolidated table fails.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Raised when a line reaches the configured maximum length.
    #[error(
        "line too long in file {}, line {line}: at least {length} bytes, limit is {limit}; \
         delete lines >= {limit} bytes or raise --max-line-length",
        path.display()
    )]
    LineTooLong {
        path: PathBuf,
        line: usize,
        length: usize,
        limit: usize,
    },

    /// Raised when a line is not valid UTF-8.
    #[error("invalid UTF-8 in file {}, line {line}", path.display())]
    InvalidUtf8 { path: PathBuf, line: usize },

    /// Raised when a record does not split into the expected number of fields.
    #[error(
        "expected {expected} items in file {}, line {line} (found {found})",
        path.display()
    )]
    FieldCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when the direct and indirect tables disagree on a phrase.
    #[error("{side} phrase does not match in line {line}: '{direct}' != '{indirect}'")]
    PhraseMismatch {
        line: usize,
        side: PhraseSide,
        direct: String,
        indirect: String,
    },

    /// Raised when a hierarchical phrase has no label in front of its words.
    #[error("expected {side} as 'label words' in line {line}: '{value}'")]
    MissingLabel {
        line: usize,
        side: PhraseSide,
        value: String,
    },

    /// Raised when one table ends before the other.
    #[error(
        "{} ended at line {line} while {} still has data",
        exhausted.display(),
        remaining.display()
    )]
    StreamLengthMismatch {
        line: usize,
        exhausted: PathBuf,
        remaining: PathBuf,
    },

    /// Raised when the run report cannot be serialised.
    #[error("report error: {0}")]
    Report(#[from] serde_json::Error),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
