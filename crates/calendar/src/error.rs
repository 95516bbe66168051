//! Error types for the dashkit-calendar crate.

/// Error type for all fallible operations in the dashkit-calendar crate.
///
/// Formatting fails only when the input value resolves to no date at all.
/// Grid and range construction never validate their inputs (out-of-range
/// months roll over deterministically); they fail only at the bounds of the
/// representable calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a date input is neither epoch milliseconds, a parseable
    /// date string, nor a structured date-time value.
    #[error("unrecognized date input: {input}")]
    UnrecognizedDateInput {
        /// Textual rendering of the rejected input.
        input: String,
    },

    /// Returned when a year/month pair falls outside the representable
    /// calendar range even after rollover normalization.
    #[error("date out of range: year {year}, month {month}")]
    DateOutOfRange {
        /// The year as supplied by the caller.
        year: i32,
        /// The month as supplied by the caller.
        month: i32,
    },
}
