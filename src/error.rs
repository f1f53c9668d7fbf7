//! Error types for samtally-rs.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for samtally-rs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be opened or read.
    #[error("unable to read input '{}': {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-header line could not be turned into an alignment record.
    #[error("malformed record at line {line_number}: {reason} ({line:?})")]
    MalformedRecord {
        /// 1-based line number in the input.
        line_number: usize,
        reason: String,
        /// Offending line, without its terminator.
        line: String,
    },

    /// A user-supplied override could not be parsed; the previous value is kept.
    #[error("invalid value for '{parameter}': {value:?}")]
    InvalidConfigurationValue { parameter: &'static str, value: String },
}

impl Error {
    pub(crate) fn malformed(line_number: usize, line: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line_number,
            reason: reason.into(),
            line: line.to_string(),
        }
    }
}
