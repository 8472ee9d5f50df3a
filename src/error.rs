//! Error types for category splitting

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a split run
#[derive(Debug, Error)]
pub enum SplitError {
    /// Input file or string is not the expected JSON shape
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Input is well-formed but violates a graph invariant
    #[error("invalid input: {0}")]
    Validation(String),

    /// Run parameters do not fit the input
    #[error("invalid configuration: n_clusters = {value}: {reason}")]
    Configuration { value: i64, reason: String },

    /// Input could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for library operations
pub type SplitResult<T> = std::result::Result<T, SplitError>;

impl SplitError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        SplitError::Validation(msg.into())
    }

    pub(crate) fn configuration(value: i64, reason: impl Into<String>) -> Self {
        SplitError::Configuration {
            value,
            reason: reason.into(),
        }
    }
}
