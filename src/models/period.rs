//! Calendar month periods
//!
//! Monthly windows drive the dashboard, monthly analytics, the calendar and
//! the asset trend. Parsed from and displayed as `YYYY-MM`.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
}

impl MonthPeriod {
    /// Create a month period, returning None if `month` is not 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next().start_date() - Duration::days(1)
    }

    /// Number of days in the month
    pub fn days_in_month(&self) -> u32 {
        self.end_date().day()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The date of `day` in this month, if it exists
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// The following month
    pub fn next(&self) -> Self {
        self.offset(1)
    }

    /// The preceding month
    pub fn prev(&self) -> Self {
        self.offset(-1)
    }

    /// Shift by a signed number of months, crossing year boundaries
    pub fn offset(&self, months: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Parse a period from `YYYY-MM`
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month).ok_or(PeriodParseError::InvalidMonth(month))
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:04}-{:02}", self.year, self.month))
    }
}

impl FromStr for MonthPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid period '{}', expected YYYY-MM", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(y: i32, m: u32) -> MonthPeriod {
        MonthPeriod::new(y, m).unwrap()
    }

    #[test]
    fn test_bounds() {
        let feb = month(2024, 2);
        assert_eq!(feb.start_date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(feb.end_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(month(2025, 2).days_in_month(), 28);
        assert_eq!(month(2025, 12).days_in_month(), 31);
    }

    #[test]
    fn test_offset_crosses_years() {
        assert_eq!(month(2025, 1).prev(), month(2024, 12));
        assert_eq!(month(2024, 12).next(), month(2025, 1));
        assert_eq!(month(2025, 3).offset(-15), month(2023, 12));
        assert_eq!(month(2025, 3).offset(10), month(2026, 1));
    }

    #[test]
    fn test_contains() {
        let jan = month(2025, 1);
        assert!(jan.contains(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
    }

    #[test]
    fn test_parse_and_display() {
        let period = MonthPeriod::parse("2025-03").unwrap();
        assert_eq!(period, month(2025, 3));
        assert_eq!(period.to_string(), "2025-03");
        assert_eq!(MonthPeriod::parse("2025-13"), Err(PeriodParseError::InvalidMonth(13)));
        assert!(MonthPeriod::parse("March").is_err());
    }

    #[test]
    fn test_new_rejects_month_zero() {
        assert!(MonthPeriod::new(2025, 0).is_none());
    }
}
