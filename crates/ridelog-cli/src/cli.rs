use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use ridelog_core::{Period, VERSION};

/// Ridelog - log bike rides from the terminal
///
/// Run without a subcommand to enter a ride interactively.
#[derive(Parser)]
#[command(name = "ridelog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Period to sum rides over in `list --by`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    Day,
    Week,
    Month,
    Year,
}

impl From<GroupBy> for Period {
    fn from(group: GroupBy) -> Self {
        match group {
            GroupBy::Day => Period::Day,
            GroupBy::Week => Period::Week,
            GroupBy::Month => Period::Month,
            GroupBy::Year => Period::Year,
        }
    }
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// First ride date to include (d, d-m or d-m-y)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last ride date to include (d, d-m or d-m-y)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Sum rides per day, week, month or year
    #[arg(long, value_enum, value_name = "PERIOD")]
    pub by: Option<GroupBy>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stored rides or per-period totals, newest first
    List(ListArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
