//! Shorthand ride dates.
//!
//! Accepted forms, with omitted parts taken from `today`:
//!
//! | input      | meaning                     |
//! |------------|-----------------------------|
//! | (empty)    | today                       |
//! | `d`        | day of the current month    |
//! | `d-m`      | day and month, current year |
//! | `d-m-y`    | full date                   |
//!
//! Years below 100 are read as 20xx.

use chrono::{Datelike, NaiveDate};

use crate::error::{RideError, Result};
use crate::numeric::{is_numeric, parse_whole};

const EXPECTED: &str = "d, d-m or d-m-y";

/// Resolve a date expression against `today`.
pub fn resolve(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }

    let (day, month, year) = if is_numeric(input) {
        (parse_whole(input)?, i64::from(today.month()), i64::from(today.year()))
    } else {
        let parts: Vec<&str> = input.split('-').collect();
        match parts.as_slice() {
            [day, month] => (
                parse_part(input, day)?,
                parse_part(input, month)?,
                i64::from(today.year()),
            ),
            [day, month, year] => (
                parse_part(input, day)?,
                parse_part(input, month)?,
                normalize_year(parse_part(input, year)?),
            ),
            _ => return Err(RideError::format(input, EXPECTED)),
        }
    };

    calendar_date(input, day, month, year)
}

/// Render a date the way it is stored: `YYYY-MM-DD`.
pub fn render_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_part(input: &str, token: &str) -> Result<i64> {
    if !is_numeric(token) {
        return Err(RideError::format(input, EXPECTED));
    }
    parse_whole(token).map_err(|_| RideError::format(input, EXPECTED))
}

fn normalize_year(year: i64) -> i64 {
    if (0..100).contains(&year) {
        2000 + year
    } else {
        year
    }
}

fn calendar_date(input: &str, day: i64, month: i64, year: i64) -> Result<NaiveDate> {
    let out_of_range = || RideError::Format(format!("{:?} is not a calendar date", input));
    let day = u32::try_from(day).map_err(|_| out_of_range())?;
    let month = u32::try_from(month).map_err(|_| out_of_range())?;
    // Four-digit years keep the stored text sortable as YYYY-MM-DD.
    if !(0..=9999).contains(&year) {
        return Err(out_of_range());
    }
    let year = i32::try_from(year).map_err(|_| out_of_range())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_empty_input_is_today() {
        assert_eq!(resolve("", today()).unwrap(), today());
        assert_eq!(resolve("   ", today()).unwrap(), today());
    }

    #[test]
    fn test_day_only() {
        assert_eq!(resolve("9", today()).unwrap(), ymd(2024, 3, 9));
    }

    #[test]
    fn test_day_and_month() {
        assert_eq!(resolve("9-12", today()).unwrap(), ymd(2024, 12, 9));
    }

    #[test]
    fn test_full_date_with_short_years() {
        assert_eq!(resolve("9-12-23", today()).unwrap(), ymd(2023, 12, 9));
        assert_eq!(resolve("9-12-5", today()).unwrap(), ymd(2005, 12, 9));
    }

    #[test]
    fn test_full_date_with_long_year() {
        assert_eq!(resolve("1-1-1999", today()).unwrap(), ymd(1999, 1, 1));
    }

    #[test]
    fn test_rejects_unparseable_input() {
        assert!(matches!(resolve("abc", today()), Err(RideError::Format(_))));
        assert!(matches!(resolve("1-2-3-4", today()), Err(RideError::Format(_))));
        assert!(matches!(resolve("9-x", today()), Err(RideError::Format(_))));
        assert!(matches!(resolve("9.5", today()), Err(RideError::Format(_))));
        assert!(matches!(resolve("-9", today()), Err(RideError::Format(_))));
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(matches!(resolve("31-2", today()), Err(RideError::Format(_))));
        assert!(matches!(resolve("0", today()), Err(RideError::Format(_))));
        assert!(matches!(resolve("1-13", today()), Err(RideError::Format(_))));
    }

    #[test]
    fn test_rejects_years_past_four_digits() {
        assert!(matches!(resolve("1-1-10000", today()), Err(RideError::Format(_))));
        assert_eq!(resolve("31-12-9999", today()).unwrap(), ymd(9999, 12, 31));
    }

    #[test]
    fn test_render_is_zero_padded() {
        assert_eq!(render_date(ymd(2005, 1, 2)), "2005-01-02");
        assert_eq!(render_date(resolve("9", today()).unwrap()), "2024-03-09");
    }
}
