//! Ride record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RideError, Result};
use crate::field::FieldSelector;

/// A complete ride: the day's figures plus the bike computer totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideRecord {
    /// Day of the ride
    pub date: NaiveDate,

    /// Distance ridden that day, in km
    pub day_distance: f64,

    /// Time ridden that day, in seconds
    pub day_seconds: u64,

    /// Odometer distance after the ride, in km
    pub total_distance: f64,

    /// Odometer time after the ride, in seconds
    pub total_seconds: u64,
}

impl RideRecord {
    /// Average speed of the day's ride in km/h.
    pub fn day_kmh(&self) -> Option<f64> {
        kmh(self.day_distance, self.day_seconds)
    }

    /// Average speed over the odometer totals in km/h.
    pub fn total_kmh(&self) -> Option<f64> {
        kmh(self.total_distance, self.total_seconds)
    }
}

/// Length of the periods rides are summed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    /// Column heading for the first day of a period.
    pub fn start_label(&self) -> &'static str {
        match self {
            Self::Day => "Date",
            Self::Week => "Week starting",
            Self::Month => "Month starting",
            Self::Year => "Year starting",
        }
    }
}

/// Rides summed over one period. Weeks start on Monday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub period: Period,

    /// First day of the period
    pub start: NaiveDate,

    /// Number of rides in the period
    pub rides: u64,

    /// Summed day distance, in km
    pub distance: f64,

    /// Summed day time, in seconds
    pub seconds: u64,
}

impl PeriodSummary {
    /// Average speed over the period in km/h.
    pub fn kmh(&self) -> Option<f64> {
        kmh(self.distance, self.seconds)
    }
}

fn kmh(distance: f64, seconds: u64) -> Option<f64> {
    if seconds == 0 {
        None
    } else {
        Some(distance * 3600.0 / seconds as f64)
    }
}

/// A value accepted for one of the four fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Distance(f64),
    Seconds(u64),
}

/// Builder for a [`RideRecord`], filled one field at a time.
#[derive(Debug, Clone)]
pub struct RideDraft {
    date: NaiveDate,
    day_distance: Option<f64>,
    day_seconds: Option<u64>,
    total_distance: Option<f64>,
    total_seconds: Option<u64>,
}

impl RideDraft {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day_distance: None,
            day_seconds: None,
            total_distance: None,
            total_seconds: None,
        }
    }

    /// Record the value for `field`.
    ///
    /// # Errors
    ///
    /// Returns `RideError::Validation` if the value kind does not fit the field.
    pub fn set(&mut self, field: FieldSelector, value: FieldValue) -> Result<()> {
        match (field, value) {
            (FieldSelector::DayDistance, FieldValue::Distance(km)) => self.day_distance = Some(km),
            (FieldSelector::DayDuration, FieldValue::Seconds(s)) => self.day_seconds = Some(s),
            (FieldSelector::TotalDistance, FieldValue::Distance(km)) => {
                self.total_distance = Some(km)
            }
            (FieldSelector::TotalDuration, FieldValue::Seconds(s)) => self.total_seconds = Some(s),
            (field, value) => {
                return Err(RideError::Validation(format!(
                    "{} cannot hold {:?}",
                    field.label(),
                    value
                )))
            }
        }
        Ok(())
    }

    pub fn is_set(&self, field: FieldSelector) -> bool {
        match field {
            FieldSelector::DayDistance => self.day_distance.is_some(),
            FieldSelector::DayDuration => self.day_seconds.is_some(),
            FieldSelector::TotalDistance => self.total_distance.is_some(),
            FieldSelector::TotalDuration => self.total_seconds.is_some(),
        }
    }

    /// Finish the draft.
    ///
    /// # Errors
    ///
    /// Returns `RideError::Validation` naming the first missing field.
    pub fn finish(self) -> Result<RideRecord> {
        if let Some(missing) = FieldSelector::ALL.iter().find(|f| !self.is_set(**f)) {
            return Err(RideError::Validation(format!(
                "{} has not been entered",
                missing.label()
            )));
        }
        Ok(RideRecord {
            date: self.date,
            day_distance: self.day_distance.unwrap_or_default(),
            day_seconds: self.day_seconds.unwrap_or_default(),
            total_distance: self.total_distance.unwrap_or_default(),
            total_seconds: self.total_seconds.unwrap_or_default(),
        })
    }
}
