//! Month command: print the month-grid calendar.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dashkit_calendar::month_grid;

use crate::cli::MonthArgs;

/// Column headers, Monday first, matching the grid alignment.
const WEEKDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";

/// Run the month calendar printer.
pub fn run(args: MonthArgs) -> Result<()> {
    let _cmd = info_span!("month").entered();
    let grid = month_grid(args.year, args.month)
        .with_context(|| format!("cannot build calendar for {}-{}", args.year, args.month))?;
    info!(
        year = grid.year(),
        month = grid.month(),
        days = grid.days_in_month(),
        rows = grid.weeks().len(),
        "calendar built"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    println!("{}-{:02}", grid.year(), grid.month());
    println!("{WEEKDAY_HEADER}");
    for week in grid.weeks() {
        let line: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(c) => format!("{:>2}", c.date),
                None => "  ".to_string(),
            })
            .collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}
