//! # dashkit-calendar
//!
//! Pure date formatting and calendar construction for the dashboard.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use dashkit_calendar::{date_range_from, format_date, month_grid, Direction};
//!
//! // Custom-pattern formatting
//! let dt = NaiveDate::from_ymd_opt(2006, 7, 2)
//!     .unwrap()
//!     .and_hms_opt(8, 9, 4)
//!     .unwrap();
//! assert_eq!(format_date(dt, None).unwrap(), "2006-07-02 08:09:04");
//!
//! // Consecutive day labels
//! let anchor = NaiveDate::from_ymd_opt(2024, 3, 30).unwrap();
//! let labels = date_range_from(anchor, 3, Direction::Forward).unwrap();
//! assert_eq!(labels, vec!["03-30", "03-31", "04-01"]);
//!
//! // Month grid
//! let grid = month_grid(2024, 2).unwrap();
//! assert_eq!(grid.days_in_month(), 29);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `input` | Date input shapes and textual parsing |
//! | `format` | Custom-pattern formatting |
//! | `range` | N-day date-label ranges |
//! | `grid` | First-weekday and month-grid construction |
//! | `error` | Error types |

mod error;
mod format;
mod grid;
mod input;
mod range;

pub use error::CalendarError;
pub use format::{format_date, DEFAULT_PATTERN};
pub use grid::{days_in_month, first_weekday, month_grid, CalendarCell, MonthGrid};
pub use input::DateInput;
pub use range::{date_range, date_range_from, Direction};
