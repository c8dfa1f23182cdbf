//! Calendar-date normalization.
//!
//! Dates reach the core as ISO-8601 strings or as richer date-time values.
//! Everything is reduced to a `NaiveDate` before it is stored or compared,
//! so business logic only ever sees one representation.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Canonical wire format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// A date as supplied by a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Date(NaiveDate),
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
    Text(String),
}

impl DateInput {
    /// Reduce to a calendar date, discarding any time of day
    pub fn to_date(&self) -> AppResult<NaiveDate> {
        match self {
            DateInput::Date(d) => Ok(*d),
            DateInput::Zoned(dt) => Ok(dt.date_naive()),
            DateInput::Naive(dt) => Ok(dt.date()),
            DateInput::Text(s) => parse_date(s),
        }
    }
}

/// Parse a date string in any of the accepted layouts
pub fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    let s = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| AppError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", raw)))
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        DateInput::Date(d)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::Naive(dt)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(dt: DateTime<Tz>) -> Self {
        DateInput::Zoned(dt.fixed_offset())
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}
