//! Storage backend trait definition.
//!
//! Ride persistence only needs two primitives from a relational store: run a
//! query and get rows back, or run a statement and get an affected-row count.
//! Statement text is produced by [`crate::storage::rides`].

use super::types::Row;
use crate::error::Result;

/// A relational store that accepts raw SQL.
pub trait SqlExecutor: Send + Sync {
    /// Run a query and return all of its rows.
    ///
    /// # Errors
    ///
    /// Returns `RideError::Sqlite` (or another storage error) if the
    /// statement cannot be prepared or a row cannot be read.
    fn query(&self, sql: &str) -> Result<Vec<Row>>;

    /// Run a statement that returns no rows.
    ///
    /// # Returns
    ///
    /// The number of rows changed.
    fn execute(&mut self, sql: &str) -> Result<usize>;
}
