//! Custom-pattern date formatting.
//!
//! Patterns are literal text interspersed with token runs: `y` (1-4, year
//! right-truncated to the run length), `M`/`d`/`h`/`H`/`m`/`s`/`q` (1-2,
//! zero-padded to width 2 at length 2), `S` (exactly 1, milliseconds 0-999
//! rendered as-is), and `E` (1-3, CJK weekday names). Only the leftmost run
//! of each token class is substituted; later runs of the same letter pass
//! through as literal text.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::error::CalendarError;
use crate::input::DateInput;

/// Pattern applied when the caller supplies none.
pub const DEFAULT_PATTERN: &str = "yyyy-MM-dd hh:mm:ss";

/// CJK numerals for weekday names, indexed by Sunday-based weekday
/// (0 = 日 through 6 = 六).
const WEEKDAY_NUMERALS: [char; 7] = ['日', '一', '二', '三', '四', '五', '六'];

/// Token classes recognized by the pattern scanner, one per token letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Year,
    Month,
    Day,
    Hour12,
    Hour24,
    Minute,
    Second,
    Quarter,
    Millis,
    Weekday,
}

/// Number of token classes, for the per-class substitution bookkeeping.
const TOKEN_CLASS_COUNT: usize = 10;

impl TokenClass {
    fn of(c: char) -> Option<Self> {
        Some(match c {
            'y' => Self::Year,
            'M' => Self::Month,
            'd' => Self::Day,
            'h' => Self::Hour12,
            'H' => Self::Hour24,
            'm' => Self::Minute,
            's' => Self::Second,
            'q' => Self::Quarter,
            'S' => Self::Millis,
            'E' => Self::Weekday,
            _ => return None,
        })
    }
}

/// Formats a date value with a custom pattern.
///
/// Accepts anything convertible into a [`DateInput`]: epoch milliseconds,
/// date strings (ISO `T`-forms and `-`/`/` separators included), or
/// structured chrono values. `None` selects [`DEFAULT_PATTERN`].
///
/// Hour handling follows the `h`/`H` split: `H` always renders the 24-hour
/// value, while `h` renders `"00"` for hour zero (a wrapped hour 24) even at
/// single width.
///
/// # Errors
///
/// Returns [`CalendarError::UnrecognizedDateInput`] when the input resolves
/// to no date value.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dashkit_calendar::format_date;
///
/// let dt = NaiveDate::from_ymd_opt(2009, 3, 10)
///     .unwrap()
///     .and_hms_opt(20, 9, 4)
///     .unwrap();
/// assert_eq!(
///     format_date(dt, Some("yyyy-MM-dd EE HH:mm:ss")).unwrap(),
///     "2009-03-10 周二 20:09:04"
/// );
/// ```
pub fn format_date<I>(date: I, pattern: Option<&str>) -> Result<String, CalendarError>
where
    I: Into<DateInput>,
{
    let resolved = date.into().resolve()?;
    Ok(render(&resolved, pattern.unwrap_or(DEFAULT_PATTERN)))
}

/// Single left-to-right pass over the pattern. Each token class substitutes
/// at most once (leftmost run wins); everything else is copied through.
fn render(dt: &NaiveDateTime, pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut substituted = [false; TOKEN_CLASS_COUNT];

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let Some(class) = TokenClass::of(c) else {
            out.push(c);
            i += 1;
            continue;
        };
        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }
        if substituted[class as usize] {
            for _ in 0..run {
                out.push(c);
            }
        } else {
            substituted[class as usize] = true;
            render_token(&mut out, dt, class, run);
        }
        i += run;
    }
    out
}

fn render_token(out: &mut String, dt: &NaiveDateTime, class: TokenClass, run: usize) {
    match class {
        TokenClass::Year => {
            let year = format!("{:04}", dt.year());
            let keep = run.min(4);
            out.push_str(&year[year.len() - keep..]);
        }
        TokenClass::Weekday => {
            if run >= 3 {
                out.push_str("星期");
            } else if run == 2 {
                out.push('周');
            }
            out.push(WEEKDAY_NUMERALS[dt.weekday().num_days_from_sunday() as usize]);
        }
        TokenClass::Millis => {
            // Exactly one placeholder; extra `S` characters in the run stay
            // literal. The value is 1-3 digits, never padded.
            out.push_str(&(dt.nanosecond() / 1_000_000).to_string());
            for _ in 1..run {
                out.push('S');
            }
        }
        TokenClass::Month => push_numeric(out, dt.month(), run),
        TokenClass::Day => push_numeric(out, dt.day(), run),
        TokenClass::Hour12 => {
            if dt.hour() == 0 {
                out.push_str("00");
            } else {
                push_numeric(out, dt.hour(), run);
            }
        }
        TokenClass::Hour24 => push_numeric(out, dt.hour(), run),
        TokenClass::Minute => push_numeric(out, dt.minute(), run),
        TokenClass::Second => push_numeric(out, dt.second(), run),
        TokenClass::Quarter => push_numeric(out, (dt.month() + 2) / 3, run),
    }
}

/// Length 1 renders the raw value; anything longer zero-pads to width 2.
fn push_numeric(out: &mut String, value: u32, run: usize) {
    if run == 1 {
        out.push_str(&value.to_string());
    } else {
        out.push_str(&format!("{value:02}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, s, ms)
            .unwrap()
    }

    #[test]
    fn default_pattern() {
        let value = dt(2006, 7, 2, 8, 9, 4, 0);
        assert_eq!(format_date(value, None).unwrap(), "2006-07-02 08:09:04");
    }

    #[test]
    fn padded_with_millis() {
        let value = dt(2006, 7, 2, 8, 9, 4, 423);
        assert_eq!(
            format_date(value, Some("yyyy-MM-dd hh:mm:ss.S")).unwrap(),
            "2006-07-02 08:09:04.423"
        );
    }

    #[test]
    fn unpadded_components() {
        let value = dt(2006, 7, 2, 8, 9, 4, 18);
        assert_eq!(
            format_date(value, Some("yyyy-M-d h:m:s.S")).unwrap(),
            "2006-7-2 8:9:4.18"
        );
    }

    #[test]
    fn weekday_single() {
        // 2009-03-10 is a Tuesday.
        let value = dt(2009, 3, 10, 20, 9, 4, 0);
        assert_eq!(
            format_date(value, Some("yyyy-MM-dd E HH:mm:ss")).unwrap(),
            "2009-03-10 二 20:09:04"
        );
    }

    #[test]
    fn weekday_double_and_triple() {
        let value = dt(2009, 3, 10, 8, 9, 4, 0);
        assert_eq!(
            format_date(value, Some("EE")).unwrap(),
            "周二"
        );
        assert_eq!(
            format_date(value, Some("EEE")).unwrap(),
            "星期二"
        );
    }

    #[test]
    fn weekday_sunday() {
        // 2006-07-02 is a Sunday.
        let value = dt(2006, 7, 2, 0, 0, 0, 0);
        assert_eq!(format_date(value, Some("E")).unwrap(), "日");
    }

    #[test]
    fn year_truncation() {
        let value = dt(2024, 1, 1, 0, 0, 0, 0);
        assert_eq!(format_date(value, Some("yyyy")).unwrap(), "2024");
        assert_eq!(format_date(value, Some("yyy")).unwrap(), "024");
        assert_eq!(format_date(value, Some("yy")).unwrap(), "24");
        assert_eq!(format_date(value, Some("y")).unwrap(), "4");
    }

    #[test]
    fn hour12_midnight_is_double_zero() {
        let value = dt(2024, 1, 1, 0, 30, 0, 0);
        // Even the single-width token renders "00" for hour zero.
        assert_eq!(format_date(value, Some("h:m")).unwrap(), "00:30");
        assert_eq!(format_date(value, Some("hh:mm")).unwrap(), "00:30");
    }

    #[test]
    fn hour12_tracks_24h_value_otherwise() {
        let value = dt(2024, 1, 1, 13, 5, 0, 0);
        assert_eq!(format_date(value, Some("h")).unwrap(), "13");
        assert_eq!(format_date(value, Some("HH")).unwrap(), "13");
    }

    #[test]
    fn quarter() {
        assert_eq!(
            format_date(dt(2024, 1, 15, 0, 0, 0, 0), Some("q")).unwrap(),
            "1"
        );
        assert_eq!(
            format_date(dt(2024, 7, 15, 0, 0, 0, 0), Some("qq")).unwrap(),
            "03"
        );
        assert_eq!(
            format_date(dt(2024, 12, 15, 0, 0, 0, 0), Some("q")).unwrap(),
            "4"
        );
    }

    #[test]
    fn millis_not_padded() {
        assert_eq!(
            format_date(dt(2024, 1, 1, 0, 0, 0, 7), Some("S")).unwrap(),
            "7"
        );
        assert_eq!(
            format_date(dt(2024, 1, 1, 0, 0, 0, 999), Some("S")).unwrap(),
            "999"
        );
    }

    #[test]
    fn repeated_class_stays_literal() {
        // Only the leftmost run of a class substitutes.
        let value = dt(2024, 3, 5, 0, 0, 0, 0);
        assert_eq!(format_date(value, Some("MM M")).unwrap(), "03 M");
        assert_eq!(format_date(value, Some("M MM")).unwrap(), "3 MM");
    }

    #[test]
    fn literal_text_passes_through() {
        let value = dt(2024, 3, 5, 0, 0, 0, 0);
        assert_eq!(
            format_date(value, Some("[yyyy/MM/dd]")).unwrap(),
            "[2024/03/05]"
        );
    }

    #[test]
    fn pattern_without_tokens_is_identity() {
        let value = dt(2024, 3, 5, 0, 0, 0, 0);
        assert_eq!(format_date(value, Some("no tokens")).unwrap(), "no tokens");
    }

    #[test]
    fn textual_input_formats() {
        assert_eq!(
            format_date("2024-03-05T08:09:04.423", Some("yyyy-MM-dd HH:mm:ss")).unwrap(),
            "2024-03-05 08:09:04"
        );
    }

    #[test]
    fn unrecognized_input_is_an_error() {
        let err = format_date("definitely not a date", None).unwrap_err();
        assert!(matches!(err, CalendarError::UnrecognizedDateInput { .. }));
    }
}
