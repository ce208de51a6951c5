//! SQLite storage backend.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::types::ValueRef;
use rusqlite::Connection;

use crate::error::{RideError, Result};
use crate::storage::traits::SqlExecutor;
use crate::storage::types::{Row, SqlValue};

/// SQLite-backed store, on disk or in memory.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database file at `path`, creating parent
    /// directories as needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    RideError::Storage(format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), "opened sqlite database");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Mutex::new(Connection::open_in_memory()?),
        })
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| RideError::Storage("SQLite connection poisoned".to_string()))
    }
}

fn owned_value(value: ValueRef<'_>) -> SqlValue {
    match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(value) => SqlValue::Integer(value),
        ValueRef::Real(value) => SqlValue::Real(value),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            SqlValue::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

impl SqlExecutor for SqliteStore {
    fn query(&self, sql: &str) -> Result<Vec<Row>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(sql)?;
        let columns = stmt.column_count();
        let rows = stmt.query_map([], |row| {
            (0..columns)
                .map(|i| row.get_ref(i).map(owned_value))
                .collect::<rusqlite::Result<Row>>()
        })?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        tracing::trace!(sql, rows = result.len(), "query");
        Ok(result)
    }

    fn execute(&mut self, sql: &str) -> Result<usize> {
        let conn = self.lock_conn()?;
        let changed = conn.execute(sql, [])?;
        tracing::trace!(sql, changed, "execute");
        Ok(changed)
    }
}
