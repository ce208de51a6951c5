//! Ride time grammars.
//!
//! Day time is `ss`, `mm:ss` or `hh:mm:ss`; total time is `hh` or `hh:mm`.
//! Both resolve to whole seconds.

use crate::error::{RideError, Result};
use crate::numeric::{is_numeric, parse_whole};

pub const DAY_DURATION_HINT: &str = "ss or mm:ss or hh:mm:ss";
pub const TOTAL_DURATION_HINT: &str = "hh or hh:mm";

/// Parse a day duration into seconds.
pub fn parse_day_duration(input: &str) -> Result<u64> {
    let input = input.trim();
    if is_numeric(input) {
        return component(input, input, DAY_DURATION_HINT);
    }

    let parts: Vec<&str> = input.split(':').collect();
    match parts.as_slice() {
        [minutes, seconds] => {
            let minutes = component(input, minutes, DAY_DURATION_HINT)?;
            let seconds = component(input, seconds, DAY_DURATION_HINT)?;
            Ok(minutes * 60 + seconds)
        }
        [hours, minutes, seconds] => {
            let hours = component(input, hours, DAY_DURATION_HINT)?;
            let minutes = component(input, minutes, DAY_DURATION_HINT)?;
            let seconds = component(input, seconds, DAY_DURATION_HINT)?;
            Ok(hours * 3600 + minutes * 60 + seconds)
        }
        _ => Err(RideError::format(input, DAY_DURATION_HINT)),
    }
}

/// Parse a total (odometer) duration into seconds.
pub fn parse_total_duration(input: &str) -> Result<u64> {
    let input = input.trim();
    if is_numeric(input) {
        return Ok(component(input, input, TOTAL_DURATION_HINT)? * 3600);
    }

    let parts: Vec<&str> = input.split(':').collect();
    match parts.as_slice() {
        [hours, minutes] => {
            let hours = component(input, hours, TOTAL_DURATION_HINT)?;
            let minutes = component(input, minutes, TOTAL_DURATION_HINT)?;
            Ok(hours * 3600 + minutes * 60)
        }
        _ => Err(RideError::format(input, TOTAL_DURATION_HINT)),
    }
}

/// Format seconds as `hh:mm:ss`; hours grow past two digits as needed.
pub fn format_seconds(seconds: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    )
}

fn component(input: &str, token: &str, expected: &str) -> Result<u64> {
    if !is_numeric(token) {
        return Err(RideError::format(input, expected));
    }
    let value = parse_whole(token).map_err(|_| RideError::format(input, expected))?;
    // Scale cannot overflow: every component is checked against this bound first.
    if !(0..=i64::from(u32::MAX)).contains(&value) {
        return Err(RideError::format(input, expected));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_duration_shapes() {
        assert_eq!(parse_day_duration("90").unwrap(), 90);
        assert_eq!(parse_day_duration("1:30").unwrap(), 90);
        assert_eq!(parse_day_duration("1:01:30").unwrap(), 3690);
        assert_eq!(parse_day_duration(" 45:00 ").unwrap(), 2700);
    }

    #[test]
    fn test_day_duration_rejects_other_shapes() {
        assert!(matches!(parse_day_duration("1:2:3:4"), Err(RideError::Format(_))));
        assert!(matches!(parse_day_duration(""), Err(RideError::Format(_))));
        assert!(matches!(parse_day_duration("1:x"), Err(RideError::Format(_))));
        assert!(matches!(parse_day_duration("1:"), Err(RideError::Format(_))));
        assert!(matches!(parse_day_duration("-5"), Err(RideError::Format(_))));
        assert!(matches!(parse_day_duration("1.5"), Err(RideError::Format(_))));
    }

    #[test]
    fn test_total_duration_shapes() {
        assert_eq!(parse_total_duration("2").unwrap(), 7200);
        assert_eq!(parse_total_duration("2:30").unwrap(), 9000);
        assert_eq!(parse_total_duration("1234:05").unwrap(), 1234 * 3600 + 300);
    }

    #[test]
    fn test_total_duration_rejects_seconds() {
        assert!(matches!(parse_total_duration("2:30:00"), Err(RideError::Format(_))));
        assert!(matches!(parse_total_duration("abc"), Err(RideError::Format(_))));
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0), "00:00:00");
        assert_eq!(format_seconds(3690), "01:01:30");
        assert_eq!(format_seconds(360_000 + 61), "100:01:01");
    }
}
