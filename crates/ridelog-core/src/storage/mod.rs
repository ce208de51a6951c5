//! Ride persistence.
//!
//! The store is reached through the `SqlExecutor` trait, which only knows how
//! to run raw SQL. Everything ride-specific lives in [`rides`]: the statement
//! text for the ride table and the store, list and per-period summary
//! operations built on it.
//!
//! ## Backends
//!
//! - SQLite (file or in-memory), via `rusqlite`
//!
//! Duplicate rides are not detected; every stored record becomes a new row.

pub mod rides;
mod row;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use rides::{ensure_table, list_records, list_summaries, store_record, RIDES_TABLE};
pub use sqlite::SqliteStore;
pub use traits::SqlExecutor;
pub use types::{RideFilter, Row, SqlValue};
