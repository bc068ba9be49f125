//! Free-text date parsing.
//!
//! Layouts are tried in a fixed priority order and the first full-string
//! match wins. Month names are English and matched case-sensitively. When no
//! layout matches, the first embedded `YYYY-MM-DD` substring is used.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use booking_model::DateParseError;

/// Accepted layouts in priority order (chrono syntax).
pub const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d", // 2024-01-12
    "%d %b %Y", // 12 Jan 2024
    "%b %d, %Y", // Jan 12, 2024
    "%d %B %Y", // 12 January 2024
    "%b %d %Y", // Jan 12 2024
];

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const FULL_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static ISO_DATE_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid ISO date regex"));

static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2} ([A-Za-z]+) [0-9]{4}$").expect("valid day-month-year regex")
});

static MONTH_DAY_COMMA_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+) [0-9]{1,2}, [0-9]{4}$").expect("valid month-day-year regex")
});

static MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+) [0-9]{1,2} [0-9]{4}$").expect("valid month-day-year regex")
});

static ISO_DATE_EMBEDDED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid ISO date regex"));

/// Parse a free-text date into a calendar date.
///
/// Surrounding whitespace is ignored. Fails when no layout in
/// [`DATE_FORMATS`] matches the whole string and no embedded ISO date is
/// present (or the embedded one is not a real calendar date).
pub fn parse_date(text: &str) -> Result<NaiveDate, DateParseError> {
    let cleaned = text.trim();

    for format in DATE_FORMATS {
        if let Some(date) = try_parse_with(cleaned, format) {
            return Ok(date);
        }
    }

    ISO_DATE_EMBEDDED
        .find(cleaned)
        .and_then(|found| NaiveDate::parse_from_str(found.as_str(), "%Y-%m-%d").ok())
        .ok_or_else(|| DateParseError {
            input: text.to_string(),
        })
}

fn try_parse_with(value: &str, format: &str) -> Option<NaiveDate> {
    if !layout_shape_matches(value, format) {
        return None;
    }
    NaiveDate::parse_from_str(value, format).ok()
}

/// chrono is lenient about digit counts and spacing, and accepts short and
/// long month names interchangeably in any case. Pin each layout to its
/// exact shape (four-digit year, single spaces, English month name of the
/// right length) before handing the value to chrono.
fn layout_shape_matches(value: &str, format: &str) -> bool {
    let (pattern, months) = match format {
        "%Y-%m-%d" => return ISO_DATE_EXACT.is_match(value),
        "%d %b %Y" => (&*DAY_MONTH_YEAR, &SHORT_MONTHS),
        "%d %B %Y" => (&*DAY_MONTH_YEAR, &FULL_MONTHS),
        "%b %d, %Y" => (&*MONTH_DAY_COMMA_YEAR, &SHORT_MONTHS),
        "%b %d %Y" => (&*MONTH_DAY_YEAR, &SHORT_MONTHS),
        _ => return false,
    };
    pattern
        .captures(value)
        .and_then(|captures| captures.get(1))
        .is_some_and(|month| months.contains(&month.as_str()))
}
