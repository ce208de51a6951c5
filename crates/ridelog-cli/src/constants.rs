//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// The ride database could not be opened or written.
    pub const STORAGE_UNAVAILABLE: i32 = 3;

    /// Input ended before the ride was complete.
    pub const INPUT_EXHAUSTED: i32 = 4;
}
