//! Error types for ridelog core operations.
//!
//! Input grammar failures (`Format`) are recovered by the acquisition loop and
//! never reach its caller. Everything else is surfaced; the CLI layer maps
//! these to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for ridelog operations.
pub type Result<T> = std::result::Result<T, RideError>;

/// Core error type for ridelog operations.
#[derive(Debug, Error)]
pub enum RideError {
    /// Textual input did not match any accepted grammar
    #[error("Format error: {0}")]
    Format(String),

    /// The input stream ended before acquisition finished
    #[error("Input ended before the ride was complete")]
    StreamExhausted,

    /// I/O error on the prompt streams or the settings file
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RideError {
    /// Shorthand for a grammar failure on `input`.
    pub(crate) fn format(input: &str, expected: &str) -> Self {
        RideError::Format(format!("{:?} (expected {})", input, expected))
    }
}
