//! JSON output formatting for rides.

use ridelog_core::date::render_date;
use ridelog_core::duration::format_seconds;
use ridelog_core::{PeriodSummary, RideRecord};

/// Convert a ride to JSON for output.
pub fn ride_json(ride: &RideRecord) -> serde_json::Value {
    serde_json::json!({
        "date": render_date(ride.date),
        "day_km": ride.day_distance,
        "day_seconds": ride.day_seconds,
        "day_time": format_seconds(ride.day_seconds),
        "day_kmh": ride.day_kmh(),
        "total_km": ride.total_distance,
        "total_seconds": ride.total_seconds,
        "total_time": format_seconds(ride.total_seconds),
        "total_kmh": ride.total_kmh(),
    })
}

/// Convert multiple rides to a JSON array for output.
pub fn rides_json(rides: &[RideRecord]) -> Vec<serde_json::Value> {
    rides.iter().map(ride_json).collect()
}

/// Convert one period total to JSON for output.
pub fn summary_json(summary: &PeriodSummary) -> serde_json::Value {
    serde_json::json!({
        "period": summary.period,
        "start": render_date(summary.start),
        "rides": summary.rides,
        "km": summary.distance,
        "seconds": summary.seconds,
        "time": format_seconds(summary.seconds),
        "kmh": summary.kmh(),
    })
}

/// Convert period totals to a JSON array for output.
pub fn summaries_json(summaries: &[PeriodSummary]) -> Vec<serde_json::Value> {
    summaries.iter().map(summary_json).collect()
}
