mod cli;
mod config;
mod fetch_cmd;
mod fmt_cmd;
mod logging;
mod month_cmd;
mod range_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Month(args) => month_cmd::run(args),
        Command::Range(args) => range_cmd::run(args),
        Command::Fmt(args) => fmt_cmd::run(args),
        Command::Fetch(args) => fetch_cmd::run(args),
    }
}
