//! Calendar year-month key
//!
//! Dashboards aggregate by calendar month; `MonthKey` is the "2024-06" style
//! key used to filter transactions and populate the month selector.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar year-month
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Create a month key; fails on an out-of-range month
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current calendar month (local time)
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| MonthKeyParseError(s.to_string()))?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| MonthKeyParseError(s.to_string()))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| MonthKeyParseError(s.to_string()))?;

        Self::new(year, month).ok_or_else(|| MonthKeyParseError(s.to_string()))
    }
}

/// Error parsing a "YYYY-MM" month key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthKeyParseError(String);

impl fmt::Display for MonthKeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month key: '{}' (expected YYYY-MM)", self.0)
    }
}

impl std::error::Error for MonthKeyParseError {}
