//! Cell value parsing.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// How cell text is interpreted when comparing rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    String,
    Number,
    Date,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Date => "date",
        }
    }
}

impl FromStr for ValueType {
    type Err = Infallible;

    /// Unknown hints fall back to string comparison.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "number" => Self::Number,
            "date" => Self::Date,
            _ => Self::String,
        })
    }
}

impl From<&str> for ValueType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(value_type) => value_type,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell reduced to something comparable.
///
/// `Unordered` covers missing cells and text that does not parse as the
/// requested type. It sorts after every other key in both directions.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(f64),
    /// Milliseconds since the Unix epoch.
    Date(i64),
    Unordered,
}

impl SortKey {
    pub fn parse(text: Option<&str>, value_type: ValueType) -> Self {
        let Some(text) = text.map(str::trim) else {
            return Self::Unordered;
        };
        match value_type {
            ValueType::String => Self::Text(text.to_string()),
            ValueType::Number => parse_number(text).map_or(Self::Unordered, Self::Number),
            ValueType::Date => parse_date(text).map_or(Self::Unordered, Self::Date),
        }
    }

    pub fn is_unordered(&self) -> bool {
        matches!(self, Self::Unordered)
    }
}

/// Parse the longest leading decimal literal, ignoring trailing text.
///
/// `"12.5 pts"` is `12.5`, `"-3e2x"` is `-300`, `"Infinity"` is infinite.
/// Returns `None` when no digits lead the text.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

/// ISO forms with an explicit offset that RFC 3339 parsing rejects: minute
/// precision, or an offset without a colon. A trailing `Z` is rewritten to
/// `+00:00` before these are tried.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%dT%H:%M:%S%#z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a date or date-time into epoch milliseconds.
///
/// Accepts RFC 3339, ISO forms with an offset at minute precision
/// (`2023-01-05T14:30Z`, `2023-01-05T14:30+01:00`), ISO-like local forms
/// (`2023-01-05`, `2023-01-05 14:30`, `2023-01-05T14:30:00.250`, `2023-01`,
/// `2023`) and RFC 2822. Values without an offset are read as UTC.
pub fn parse_date(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    let zoned = match text.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => text.to_string(),
    };
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, format) {
            return Some(dt.timestamp_millis());
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    if let Some(date) = parse_calendar_date(text) {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc().timestamp_millis());
    }
    DateTime::parse_from_rfc2822(text)
        .ok()
        .map(|dt| dt.timestamp_millis())
}

fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match text.len() {
        10 => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok(),
        7 if text.as_bytes()[4] == b'-' && is_digits(&text[..4]) && is_digits(&text[5..]) => {
            NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d").ok()
        }
        4 if is_digits(text) => NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1),
        _ => None,
    }
}
