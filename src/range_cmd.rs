//! Range command: print date labels for the next (or previous) N days.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dashkit_calendar::{date_range, Direction};

use crate::cli::RangeArgs;

/// Run the date-range printer.
pub fn run(args: RangeArgs) -> Result<()> {
    let _cmd = info_span!("range").entered();
    let direction = if args.before {
        Direction::Before
    } else {
        Direction::Forward
    };
    let labels = date_range(args.count, direction)
        .with_context(|| format!("cannot build a {}-day range", args.count))?;
    info!(count = labels.len(), ?direction, "range built");

    for label in &labels {
        println!("{label}");
    }
    Ok(())
}
