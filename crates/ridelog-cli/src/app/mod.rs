//! Application-level utilities for the ridelog CLI.
//!
//! This module provides the application context: settings loaded once at
//! startup and the database location derived from them.

mod context;

// Re-export public API
pub use context::AppContext;
