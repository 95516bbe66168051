//! Month-grid calendar construction.
//!
//! A month grid is a 7-column, row-major arrangement of a month's days,
//! aligned so that column 0 is Monday and column 6 is Sunday. Out-of-range
//! months roll over deterministically (month 0 is December of the previous
//! year, month 13 is January of the next), so callers never pre-validate.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CalendarError;

/// An occupied cell in a [`MonthGrid`]: a 1-based day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    /// Day of the month (1..=31).
    pub date: u32,
}

/// A month's days laid out week by week.
///
/// Every day 1..=`days_in_month` appears exactly once, in increasing order,
/// row-major from `(row 0, start column)`. Cells before the first day and
/// after the last are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    days_in_month: u32,
    weeks: Vec<[Option<CalendarCell>; 7]>,
}

impl MonthGrid {
    /// The (normalized) year this grid covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The (normalized) month this grid covers (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// The week rows, each a fixed seven columns wide.
    pub fn weeks(&self) -> &[[Option<CalendarCell>; 7]] {
        &self.weeks
    }

    /// The occupied cells in row-major order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks
            .iter()
            .flatten()
            .filter_map(|cell| cell.map(|c| c.date))
    }
}

/// Rolls an out-of-range month into 1..=12, adjusting the year. Widened
/// arithmetic keeps inputs near the i32 bounds from overflowing; a rolled
/// year that no longer fits i32 is unrepresentable and yields `None`.
fn normalize(year: i32, month: i32) -> Option<(i32, u32)> {
    let zero_based = i64::from(month) - 1;
    let year = i64::from(year) + zero_based.div_euclid(12);
    let month = (zero_based.rem_euclid(12) + 1) as u32;
    Some((i32::try_from(year).ok()?, month))
}

/// 1-based weekday of the 1st of the month: Monday = 1 through Sunday = 7.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] when the normalized year/month
/// cannot be represented.
pub fn first_weekday(year: i32, month: i32) -> Result<u32, CalendarError> {
    let (y, m) = normalize(year, month).ok_or(CalendarError::DateOutOfRange { year, month })?;
    let first = NaiveDate::from_ymd_opt(y, m, 1)
        .ok_or(CalendarError::DateOutOfRange { year, month })?;
    Ok(first.weekday().number_from_monday())
}

/// Number of days in the month, computed from the first day of the next
/// month.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] when the normalized year/month
/// cannot be represented.
pub fn days_in_month(year: i32, month: i32) -> Result<u32, CalendarError> {
    let (y, m) = normalize(year, month).ok_or(CalendarError::DateOutOfRange { year, month })?;
    let (next_y, next_m) = if m == 12 {
        match y.checked_add(1) {
            Some(next) => (next, 1),
            None => return Err(CalendarError::DateOutOfRange { year, month }),
        }
    } else {
        (y, m + 1)
    };
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .ok_or(CalendarError::DateOutOfRange { year, month })
}

/// Builds the month grid for a year and month.
///
/// Rows are sized to fit exactly: `ceil((days_in_month + start_column) / 7)`,
/// where the start column is `first_weekday - 1`.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] when the normalized year/month
/// cannot be represented.
///
/// # Examples
///
/// ```
/// use dashkit_calendar::month_grid;
///
/// let grid = month_grid(2024, 2).unwrap();
/// assert_eq!(grid.days_in_month(), 29);
/// // February 2024 starts on a Thursday: first row is [None; 3] then 1..=4.
/// assert_eq!(grid.weeks()[0][3].unwrap().date, 1);
/// ```
pub fn month_grid(year: i32, month: i32) -> Result<MonthGrid, CalendarError> {
    let (y, m) = normalize(year, month).ok_or(CalendarError::DateOutOfRange { year, month })?;
    let n_days = days_in_month(year, month)?;
    let start_column = (first_weekday(year, month)? - 1) as usize;
    let row_count = (n_days as usize + start_column).div_ceil(7);

    let mut weeks = vec![[None; 7]; row_count];
    let mut row = 0;
    let mut column = start_column;
    for date in 1..=n_days {
        weeks[row][column] = Some(CalendarCell { date });
        column += 1;
        if column == 7 {
            column = 0;
            row += 1;
        }
    }

    Ok(MonthGrid {
        year: y,
        month: m,
        days_in_month: n_days,
        weeks,
    })
}
