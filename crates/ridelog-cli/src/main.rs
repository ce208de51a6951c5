//! Ridelog CLI - log bike rides from the terminal
//!
//! This is the command-line interface for ridelog. It asks for a ride,
//! validates every answer and stores the result in a SQLite database.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entry, list, misc};
use crate::errors::exit_code_for;
use crate::logging::init_logging;
use crate::ui::{print_error, UiContext};

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        let ui_ctx = UiContext::from_env(false);

        // Split an embedded hint off the message
        let error_msg = format!("{}", e);
        let (message, hint) = match error_msg.split_once("\nHint:") {
            Some((message, hint)) => (message.to_string(), Some(hint.trim().to_string())),
            None => (error_msg, None),
        };

        tracing::debug!(error = ?e, "command failed");
        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Some(Commands::Completions { shell }) = &cli.command {
        return misc::handle_completions(*shell);
    }

    let ctx = AppContext::load()?;
    match &cli.command {
        None => entry::handle_entry(&ctx),
        Some(Commands::List(args)) => list::handle_list(&ctx, args),
        Some(Commands::Completions { .. }) => Ok(()),
    }
}
