//! N-day date-label ranges.

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::error::CalendarError;
use crate::format::format_date;

/// Label pattern for range entries.
const RANGE_PATTERN: &str = "MM-dd";

/// Which way a range extends from its anchor day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Anchor day first, then each following day.
    #[default]
    Forward,
    /// Days preceding the anchor: earliest first, anchor last.
    Before,
}

/// Returns `count` consecutive `"MM-dd"` labels anchored at today.
///
/// `Forward` walks from today onward (today is the first label); `Before`
/// walks backward but keeps the labels in calendar order (today is the last
/// label). `count == 0` yields an empty vector. Day arithmetic rolls over
/// month and year boundaries.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] only when the walk leaves the
/// representable calendar range.
pub fn date_range(count: usize, direction: Direction) -> Result<Vec<String>, CalendarError> {
    date_range_from(Local::now().date_naive(), count, direction)
}

/// [`date_range`] with an explicit anchor day.
pub fn date_range_from(
    anchor: NaiveDate,
    count: usize,
    direction: Direction,
) -> Result<Vec<String>, CalendarError> {
    let mut labels = Vec::with_capacity(count);
    for offset in 0..count {
        let day = match direction {
            Direction::Forward => anchor.checked_add_days(Days::new(offset as u64)),
            Direction::Before => anchor.checked_sub_days(Days::new(offset as u64)),
        }
        .ok_or(CalendarError::DateOutOfRange {
            year: anchor.year(),
            month: anchor.month() as i32,
        })?;
        labels.push(format_date(day, Some(RANGE_PATTERN))?);
    }
    if direction == Direction::Before {
        labels.reverse();
    }
    Ok(labels)
}
