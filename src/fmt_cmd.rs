//! Fmt command: format one date value with a custom pattern.

use anyhow::{Context, Result};
use tracing::info_span;

use dashkit_calendar::{format_date, DateInput};

use crate::cli::FmtArgs;

/// Run the date formatter.
pub fn run(args: FmtArgs) -> Result<()> {
    let _cmd = info_span!("fmt").entered();
    // A bare integer argument is an epoch-millisecond timestamp; everything
    // else goes through the textual pipeline.
    let input = match args.date.parse::<i64>() {
        Ok(millis) => DateInput::Millis(millis),
        Err(_) => DateInput::Text(args.date.clone()),
    };
    let formatted = format_date(input, args.pattern.as_deref())
        .with_context(|| format!("cannot format {:?}", args.date))?;
    println!("{formatted}");
    Ok(())
}
