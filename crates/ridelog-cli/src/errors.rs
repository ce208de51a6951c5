//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use ridelog_core::RideError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// The ride database could not be opened, created or written
    StorageUnavailable { message: String, hint: String },

    /// Standard input closed mid-ride
    InputExhausted,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::StorageUnavailable { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InputExhausted => write!(f, "Input ended before the ride was complete"),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a StorageUnavailable error with message and hint.
    pub fn storage_unavailable(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::StorageUnavailable {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::StorageUnavailable { .. } => exit_codes::STORAGE_UNAVAILABLE,
            CliError::InputExhausted => exit_codes::INPUT_EXHAUSTED,
        }
    }
}

impl From<RideError> for CliError {
    fn from(err: RideError) -> Self {
        match err {
            RideError::StreamExhausted => CliError::InputExhausted,
            other => CliError::storage_unavailable(
                other.to_string(),
                "Hint: Check the db entry in your settings file (RIDELOG_SETTINGS).",
            ),
        }
    }
}

/// Exit code for an error that escaped `run`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(RideError::StreamExhausted) = err.downcast_ref::<RideError>() {
        return CliError::InputExhausted.exit_code();
    }
    1
}
