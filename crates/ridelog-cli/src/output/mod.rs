//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying rides
//! in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use text::{print_ride_list, print_ride_receipt, print_summary_list};
