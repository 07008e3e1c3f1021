//! Calendar date value object with a strict `YYYY-MM-DD` wire form.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

const ISO_LEN: usize = 10;
const ISO_FORMAT: &str = "%Y-%m-%d";

/// A local-midnight calendar date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate(NaiveDate);

impl IsoDate {
    /// Parses a strict `YYYY-MM-DD` string.
    ///
    /// Rejects surrounding whitespace, time components, signed or short
    /// years, and dates that do not exist (e.g. `2023-02-29`).
    pub fn parse(field: &str, value: &str) -> Result<Self, ValidationError> {
        if !Self::has_iso_shape(value) {
            return Err(ValidationError::invalid_format(
                field,
                format!("expected YYYY-MM-DD, got '{}'", value),
            ));
        }
        NaiveDate::parse_from_str(value, ISO_FORMAT)
            .map(Self)
            .map_err(|e| {
                ValidationError::invalid_format(field, format!("'{}' is not a calendar date: {}", value, e))
            })
    }

    /// Parses a query bound, tolerating representation noise.
    ///
    /// Surrounding whitespace and a trailing time component (`T...` or a
    /// space-separated time) are discarded, so `"2024-03-01"`,
    /// `" 2024-03-01 "` and `"2024-03-01T00:00:00Z"` all yield the same date.
    pub fn normalize_bound(field: &str, value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        let date_part = match trimmed.char_indices().nth(ISO_LEN) {
            Some((idx, 'T')) | Some((idx, 't')) | Some((idx, ' ')) => &trimmed[..idx],
            _ => trimmed,
        };
        Self::parse(field, date_part)
    }

    /// Builds a date from components, `None` if it does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Builds a date, clamping `day` to the last day of the month.
    pub fn from_ymd_clamped(year: i32, month: u32, day: u32) -> Option<Self> {
        let last = days_in_month(year, month)?;
        Self::from_ymd(year, month, day.clamp(1, last))
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Months since year 0, used for month arithmetic.
    pub fn month_index(&self) -> i64 {
        i64::from(self.year()) * 12 + i64::from(self.month0())
    }

    fn month0(&self) -> u32 {
        self.0.month0()
    }

    /// Whole days from `earlier` to `self` (negative if `earlier` is later).
    pub fn days_since(&self, earlier: &IsoDate) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Adds days, `None` past the representable range.
    pub fn add_days(&self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    /// Subtracts days, `None` past the representable range.
    pub fn sub_days(&self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Self)
    }

    /// Formats as `YYYY-MM-DD`.
    pub fn to_iso_string(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    fn has_iso_shape(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == ISO_LEN
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
    }
}

/// Number of days in `month` of `year`, `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl FromStr for IsoDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("date", s)
    }
}

impl Serialize for IsoDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        IsoDate::parse("date", &raw).map_err(serde::de::Error::custom)
    }
}
