use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dashkit dashboard support toolkit.
#[derive(Parser)]
#[command(
    name = "dashkit",
    version,
    about = "Calendar and list-data helpers for the dashboard"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the month-grid calendar for a year and month.
    Month(MonthArgs),
    /// Print date labels for the next (or previous) N days.
    Range(RangeArgs),
    /// Format a date value with a custom pattern.
    Fmt(FmtArgs),
    /// Fetch list data from the API server.
    Fetch(FetchArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Calendar year.
    pub year: i32,

    /// Calendar month (out-of-range values roll over: 0 is December of the
    /// previous year, 13 is January of the next).
    pub month: i32,

    /// Emit the grid as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// Number of days.
    pub count: usize,

    /// Count backwards from today (earliest label first, today last).
    #[arg(long)]
    pub before: bool,
}

/// Arguments for the `fmt` subcommand.
#[derive(clap::Args)]
pub struct FmtArgs {
    /// Date to format: epoch milliseconds or a date string.
    pub date: String,

    /// Format pattern, e.g. "yyyy-MM-dd EE hh:mm:ss".
    #[arg(short, long)]
    pub pattern: Option<String>,
}

/// Arguments for the `fetch` subcommand.
#[derive(clap::Args)]
pub struct FetchArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "dashkit.toml")]
    pub config: PathBuf,

    /// Fetch the secondary dataset (`/data2`) instead of `/data`.
    #[arg(long)]
    pub second: bool,

    /// Query parameters as key=value pairs (repeatable).
    #[arg(short, long = "query", value_name = "KEY=VALUE")]
    pub query: Vec<String>,
}
