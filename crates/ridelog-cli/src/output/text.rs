//! Text and table output formatting for rides.

use ridelog_core::date::render_date;
use ridelog_core::duration::format_seconds;
use ridelog_core::{PeriodSummary, RideRecord};

use super::json::{rides_json, summaries_json};
use crate::ui::{self, UiContext};

const HEADERS: [&str; 6] = ["Date", "Day km", "Day time", "km/h", "Total km", "Total time"];

fn speed(kmh: Option<f64>) -> String {
    kmh.map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| "-".to_string())
}

fn ride_row(ride: &RideRecord) -> Vec<String> {
    vec![
        render_date(ride.date),
        format!("{:.2}", ride.day_distance),
        format_seconds(ride.day_seconds),
        speed(ride.day_kmh()),
        format!("{:.2}", ride.total_distance),
        format_seconds(ride.total_seconds),
    ]
}

/// Print the summary shown after a ride was stored.
pub fn print_ride_receipt(ctx: &UiContext, ride: &RideRecord) {
    let items = [
        ("Date", render_date(ride.date)),
        ("Day km", format!("{:.2}", ride.day_distance)),
        ("Day time", format_seconds(ride.day_seconds)),
        ("Day km/h", speed(ride.day_kmh())),
        ("Total km", format!("{:.2}", ride.total_distance)),
        ("Total time", format_seconds(ride.total_seconds)),
        ("Total km/h", speed(ride.total_kmh())),
    ];
    ui::print(ctx, &ui::receipt(ctx, "Ride saved", &items));
}

/// Print a list of rides as JSON, a table, or plain lines.
pub fn print_ride_list(ctx: &UiContext, rides: &[RideRecord]) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&rides_json(rides))?);
        return Ok(());
    }

    if rides.is_empty() {
        ui::print(ctx, "No rides found.");
        return Ok(());
    }

    let count = format!("{} rides", rides.len());
    ui::print(ctx, &ui::header(ctx, "list", Some(&count)));
    let rows: Vec<Vec<String>> = rides.iter().map(ride_row).collect();
    ui::print(ctx, &ui::table(ctx, &HEADERS, &rows));
    Ok(())
}

fn summary_row(summary: &PeriodSummary) -> Vec<String> {
    vec![
        render_date(summary.start),
        summary.rides.to_string(),
        format!("{:.2}", summary.distance),
        format_seconds(summary.seconds),
        speed(summary.kmh()),
    ]
}

/// Print per-period totals as JSON, a table, or plain lines.
pub fn print_summary_list(ctx: &UiContext, summaries: &[PeriodSummary]) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&summaries_json(summaries))?);
        return Ok(());
    }

    let Some(first) = summaries.first() else {
        ui::print(ctx, "No rides found.");
        return Ok(());
    };

    let count = format!("{} totals", summaries.len());
    ui::print(ctx, &ui::header(ctx, "list", Some(&count)));
    let headers = [first.period.start_label(), "Rides", "km", "Time", "km/h"];
    let rows: Vec<Vec<String>> = summaries.iter().map(summary_row).collect();
    ui::print(ctx, &ui::table(ctx, &headers, &rows));
    Ok(())
}
