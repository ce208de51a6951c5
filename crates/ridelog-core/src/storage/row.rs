//! Ride row type for database queries.

use chrono::NaiveDate;

use crate::error::{RideError, Result};
use crate::record::{Period, PeriodSummary, RideRecord};
use crate::storage::types::{Row, SqlValue};

/// Raw columns of a ride row, in select order, before parsing into a record.
#[derive(Debug)]
pub struct RideRow {
    pub date: SqlValue,
    pub day_km: SqlValue,
    pub day_seconds: SqlValue,
    pub total_km: SqlValue,
    pub total_seconds: SqlValue,
}

impl TryFrom<Row> for RideRow {
    type Error = RideError;

    fn try_from(row: Row) -> Result<Self> {
        let columns = row.len();
        let [date, day_km, day_seconds, total_km, total_seconds]: [SqlValue; 5] =
            row.try_into().map_err(|_| {
                RideError::Storage(format!("Expected 5 ride columns, got {}", columns))
            })?;
        Ok(RideRow {
            date,
            day_km,
            day_seconds,
            total_km,
            total_seconds,
        })
    }
}

impl TryFrom<RideRow> for RideRecord {
    type Error = RideError;

    fn try_from(row: RideRow) -> Result<Self> {
        Ok(RideRecord {
            date: stored_date("Date", &row.date)?,
            day_distance: distance("DayKM", &row.day_km)?,
            day_seconds: non_negative("DaySeconds", &row.day_seconds)?,
            total_distance: distance("TotalKM", &row.total_km)?,
            total_seconds: non_negative("TotalSeconds", &row.total_seconds)?,
        })
    }
}

/// Parse a summary row: period start, ride count, summed km, summed seconds.
pub fn summary_from_row(period: Period, row: Row) -> Result<PeriodSummary> {
    let columns = row.len();
    let [start, rides, km, day_seconds]: [SqlValue; 4] = row.try_into().map_err(|_| {
        RideError::Storage(format!("Expected 4 summary columns, got {}", columns))
    })?;
    Ok(PeriodSummary {
        period,
        start: stored_date("PeriodStart", &start)?,
        rides: non_negative("Rides", &rides)?,
        distance: distance("DayKM", &km)?,
        seconds: non_negative("DaySeconds", &day_seconds)?,
    })
}

fn stored_date(column: &str, value: &SqlValue) -> Result<NaiveDate> {
    let text = value
        .as_str()
        .ok_or_else(|| RideError::Storage(format!("Invalid {} column: {}", column, value)))?;
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| RideError::Storage(format!("Invalid {} {:?}: {}", column, text, e)))
}

fn distance(column: &str, value: &SqlValue) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| RideError::Storage(format!("Invalid {} column: {}", column, value)))
}

/// A non-negative integer column.
fn non_negative(column: &str, value: &SqlValue) -> Result<u64> {
    value
        .as_i64()
        .and_then(|s| u64::try_from(s).ok())
        .ok_or_else(|| RideError::Storage(format!("Invalid {} column: {}", column, value)))
}
