//! Date input resolution.
//!
//! Formatting accepts three shapes of value. Textual inputs go through a
//! normalization pipeline (separator replacement, ISO `T`-form handling,
//! numeric coercion) before being parsed against a fixed set of formats.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::CalendarError;

/// Date-time formats tried for textual input, after `-` separators have been
/// normalized to `/`.
const DATETIME_FORMATS: &[&str] = &["%Y/%m/%d %H:%M:%S", "%Y/%m/%d %H:%M"];

/// Date-only formats tried after the date-time formats; the missing time
/// component resolves to midnight.
const DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%m/%d/%Y"];

/// A date value accepted by [`format_date`](crate::format_date).
///
/// Exactly one of three shapes: an epoch-millisecond timestamp, a textual
/// date representation, or an already-parsed date-time. Anything that cannot
/// be converted into one of these shapes is unrepresentable by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Milliseconds since 1970-01-01T00:00:00Z, interpreted on the local
    /// calendar.
    Millis(i64),
    /// A textual date representation; see [`DateInput::resolve`] for the
    /// accepted forms.
    Text(String),
    /// An already-parsed local date-time.
    Structured(NaiveDateTime),
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        Self::Millis(millis)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        Self::Structured(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Structured(
            value
                .and_hms_opt(0, 0, 0)
                .expect("midnight is valid on every date"),
        )
    }
}

impl From<DateTime<Local>> for DateInput {
    fn from(value: DateTime<Local>) -> Self {
        Self::Structured(value.naive_local())
    }
}

impl DateInput {
    /// Resolves the input to a local date-time.
    ///
    /// Textual inputs are normalized first: every `-` becomes `/`; if the
    /// string carries an ISO `T` separator, everything from the first `.` on
    /// is dropped (fractional seconds) and the `T` becomes a space. A string
    /// that is purely numeric after normalization is coerced to epoch
    /// milliseconds; otherwise it is parsed against the fixed format lists.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnrecognizedDateInput`] when no shape
    /// produces a date value.
    pub(crate) fn resolve(&self) -> Result<NaiveDateTime, CalendarError> {
        match self {
            Self::Millis(millis) => from_millis(*millis),
            Self::Text(text) => from_text(text),
            Self::Structured(value) => Ok(*value),
        }
    }
}

fn from_millis(millis: i64) -> Result<NaiveDateTime, CalendarError> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.naive_local())
        .ok_or_else(|| CalendarError::UnrecognizedDateInput {
            input: millis.to_string(),
        })
}

fn from_text(text: &str) -> Result<NaiveDateTime, CalendarError> {
    let unrecognized = || CalendarError::UnrecognizedDateInput {
        input: text.to_string(),
    };

    let mut s = text.replace('-', "/");
    if s.contains('T') {
        if let Some(dot) = s.find('.') {
            s.truncate(dot);
        }
        s = s.replace('T', " ");
    }

    if let Some(millis) = parse_numeric(&s) {
        return from_millis(millis).map_err(|_| unrecognized());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&s, fmt) {
            return Ok(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&s, fmt) {
            return Ok(date
                .and_hms_opt(0, 0, 0)
                .expect("midnight is valid on every date"));
        }
    }
    Err(unrecognized())
}

/// Interprets a string as an epoch-millisecond count if it is purely numeric.
/// Fractional values truncate toward zero.
fn parse_numeric(s: &str) -> Option<i64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(f as i64),
        _ => None,
    }
}
