use chrono::NaiveDate;

use ridelog_core::date::resolve;
use ridelog_core::storage::{list_records, list_summaries, RideFilter, RIDES_TABLE};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::errors::CliError;
use crate::output::{print_ride_list, print_summary_list};

fn parse_bound(flag: &str, value: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    resolve(value, today).map_err(|_| {
        anyhow::anyhow!(
            "Invalid {} date {:?}\nHint: Use d, d-m or d-m-y (e.g. 9-12-23).",
            flag,
            value
        )
    })
}

/// Build the ride filter from `--from`, `--to` and `--limit`.
pub fn ride_filter(args: &ListArgs, today: NaiveDate) -> anyhow::Result<RideFilter> {
    let mut filter = RideFilter::new();
    if let Some(ref from) = args.from {
        filter = filter.since(parse_bound("--from", from, today)?);
    }
    if let Some(ref to) = args.to {
        filter = filter.until(parse_bound("--to", to, today)?);
    }
    if let (Some(since), Some(until)) = (filter.since, filter.until) {
        if since > until {
            anyhow::bail!("--from {} is after --to {}", since, until);
        }
    }
    if let Some(limit) = args.limit {
        filter = filter.limit(limit);
    }
    Ok(filter)
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    let filter = ride_filter(args, today)?;
    let store = ctx.open_store()?;
    let ui_ctx = ctx.ui_context(args.json);

    match args.by {
        Some(group) => {
            let summaries = list_summaries(&store, RIDES_TABLE, group.into(), &filter)
                .map_err(CliError::from)?;
            tracing::debug!(count = summaries.len(), "listed period totals");
            print_summary_list(&ui_ctx, &summaries)
        }
        None => {
            let rides = list_records(&store, RIDES_TABLE, &filter).map_err(CliError::from)?;
            tracing::debug!(count = rides.len(), "listed rides");
            print_ride_list(&ui_ctx, &rides)
        }
    }
}
