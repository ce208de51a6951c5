//! Ride table statements and the store/list operations built on them.

use crate::date::render_date;
use crate::error::{RideError, Result};
use crate::record::{Period, PeriodSummary, RideRecord};
use crate::storage::row::{summary_from_row, RideRow};
use crate::storage::traits::SqlExecutor;
use crate::storage::types::RideFilter;

/// Table that holds one row per ride.
pub const RIDES_TABLE: &str = "fahrrad_rides";

fn checked_table(table: &str) -> Result<&str> {
    let mut chars = table.chars();
    let valid_start = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(table)
    } else {
        Err(RideError::Validation(format!(
            "Invalid table name: {:?}",
            table
        )))
    }
}

/// `CREATE TABLE IF NOT EXISTS` for the ride table.
pub fn create_table_statement(table: &str) -> Result<String> {
    Ok(format!(
        "CREATE TABLE IF NOT EXISTS {} (\
         EntryID INTEGER PRIMARY KEY AUTOINCREMENT, \
         Date TEXT NOT NULL, \
         DayKM REAL NOT NULL, \
         DaySeconds INTEGER NOT NULL, \
         TotalKM REAL NOT NULL, \
         TotalSeconds INTEGER NOT NULL)",
        checked_table(table)?
    ))
}

/// The INSERT for one ride.
pub fn insert_statement(table: &str, record: &RideRecord) -> Result<String> {
    Ok(format!(
        "INSERT INTO {} (Date, DayKM, DaySeconds, TotalKM, TotalSeconds) VALUES ('{}', {}, {}, {}, {})",
        checked_table(table)?,
        render_date(record.date),
        record.day_distance,
        record.day_seconds,
        record.total_distance,
        record.total_seconds
    ))
}

fn filter_clauses(filter: &RideFilter) -> (String, String) {
    let mut conditions = Vec::new();
    if let Some(since) = filter.since {
        conditions.push(format!("Date >= '{}'", render_date(since)));
    }
    if let Some(until) = filter.until {
        conditions.push(format!("Date <= '{}'", render_date(until)));
    }
    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };
    let limit_clause = filter
        .limit
        .map(|limit| format!(" LIMIT {}", limit))
        .unwrap_or_default();
    (where_clause, limit_clause)
}

/// The SELECT for stored rides, newest first.
pub fn select_statement(table: &str, filter: &RideFilter) -> Result<String> {
    let (where_clause, limit_clause) = filter_clauses(filter);
    Ok(format!(
        "SELECT Date, DayKM, DaySeconds, TotalKM, TotalSeconds FROM {}{} ORDER BY Date DESC, EntryID DESC{}",
        checked_table(table)?,
        where_clause,
        limit_clause
    ))
}

/// SQL for the first day of the period containing `Date`.
fn period_start(period: Period) -> &'static str {
    match period {
        Period::Day => "Date",
        // %w is 0 for Sunday; weeks start on Monday
        Period::Week => {
            "date(Date, '-' || ((CAST(strftime('%w', Date) AS INTEGER) + 6) % 7) || ' days')"
        }
        Period::Month => "strftime('%Y-%m-01', Date)",
        Period::Year => "strftime('%Y-01-01', Date)",
    }
}

/// The SELECT summing day figures per period, newest period first.
pub fn summary_statement(table: &str, period: Period, filter: &RideFilter) -> Result<String> {
    let (where_clause, limit_clause) = filter_clauses(filter);
    Ok(format!(
        "SELECT {} AS PeriodStart, COUNT(*), SUM(DayKM), SUM(DaySeconds) FROM {}{} \
         GROUP BY PeriodStart ORDER BY PeriodStart DESC{}",
        period_start(period),
        checked_table(table)?,
        where_clause,
        limit_clause
    ))
}

/// Create the ride table if it does not exist yet.
pub fn ensure_table<S: SqlExecutor + ?Sized>(store: &mut S, table: &str) -> Result<()> {
    store.execute(&create_table_statement(table)?)?;
    Ok(())
}

/// Persist a finished ride. The record is consumed.
pub fn store_record<S: SqlExecutor + ?Sized>(
    store: &mut S,
    table: &str,
    record: RideRecord,
) -> Result<()> {
    let sql = insert_statement(table, &record)?;
    let changed = store.execute(&sql)?;
    if changed != 1 {
        return Err(RideError::Storage(format!(
            "Expected to insert 1 ride, inserted {}",
            changed
        )));
    }
    tracing::info!(date = %record.date, table, "ride stored");
    Ok(())
}

/// Read stored rides back, newest first.
pub fn list_records<S: SqlExecutor + ?Sized>(
    store: &S,
    table: &str,
    filter: &RideFilter,
) -> Result<Vec<RideRecord>> {
    store
        .query(&select_statement(table, filter)?)?
        .into_iter()
        .map(|row| RideRow::try_from(row).and_then(RideRecord::try_from))
        .collect()
}

/// Sum the stored rides per period, newest period first.
pub fn list_summaries<S: SqlExecutor + ?Sized>(
    store: &S,
    table: &str,
    period: Period,
    filter: &RideFilter,
) -> Result<Vec<PeriodSummary>> {
    store
        .query(&summary_statement(table, period, filter)?)?
        .into_iter()
        .map(|row| summary_from_row(period, row))
        .collect()
}
