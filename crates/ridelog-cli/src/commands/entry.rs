//! The interactive entry run: ask for one ride and store it.

use std::io;

use ridelog_core::storage::{store_record, RIDES_TABLE};
use ridelog_core::RideError;

use crate::app::AppContext;
use crate::errors::CliError;
use crate::output::print_ride_receipt;

pub fn handle_entry(ctx: &AppContext) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    tracing::info!(
        connection = %ctx.settings().connection_target(),
        database = %ctx.database_path().display(),
        "ready for a ride"
    );

    let today = chrono::Local::now().date_naive();
    let ride = ridelog_core::acquire(io::stdin().lock(), io::stdout().lock(), today).map_err(
        |err| match err {
            RideError::StreamExhausted => anyhow::Error::new(CliError::InputExhausted),
            other => anyhow::Error::new(other),
        },
    )?;

    store_record(&mut store, RIDES_TABLE, ride.clone()).map_err(CliError::from)?;

    let ui_ctx = ctx.ui_context(false);
    // The last prompt leaves the cursor on its line when stdin is piped.
    println!();
    print_ride_receipt(&ui_ctx, &ride);
    Ok(())
}
