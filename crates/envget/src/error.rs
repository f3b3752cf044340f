//! Error types for envget

use std::path::PathBuf;

use crate::duration::DurationError;

/// Result type for envget operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while looking up or converting a value.
///
/// [`crate::Resolver::resolve`] never returns these; it falls back to the
/// caller's default instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No value set for {variable}")]
    NotSet { variable: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {input:?} as {kind}: {message}")]
    Parse {
        kind: &'static str,
        input: String,
        message: String,
    },

    #[error("Invalid duration {input:?}: {reason}")]
    Duration {
        input: String,
        #[source]
        reason: DurationError,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(kind: &'static str, input: &str, message: impl ToString) -> Self {
        Self::Parse {
            kind,
            input: input.to_string(),
            message: message.to_string(),
        }
    }
}
