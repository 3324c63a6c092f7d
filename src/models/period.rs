//! Calendar month representation
//!
//! Month-range filters and monthly summaries both need the first and last
//! day of a month; the last day is leap-year aware.

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A calendar month (e.g. "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month; `month` must be in 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The current local month
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    /// The first day of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap())
    }

    /// The last day of this month (inclusive, leap-year aware)
    pub fn last_day(&self) -> NaiveDate {
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_month.unwrap() - Duration::days(1)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthParseError(String);

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid month format: '{}'", self.0)
    }
}

impl std::error::Error for MonthParseError {}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MonthParseError(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        Month::new(year, month).ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let month: Month = "2024-02".parse().unwrap();
        assert_eq!(month, Month::new(2024, 2).unwrap());

        assert!("2024".parse::<Month>().is_err());
        assert!("2024-13".parse::<Month>().is_err());
        assert!("2024-02-15".parse::<Month>().is_err());
        assert!("banana".parse::<Month>().is_err());
    }

    #[test]
    fn test_leap_year_boundaries() {
        let feb_2024: Month = "2024-02".parse().unwrap();
        assert_eq!(feb_2024.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let feb_2023: Month = "2023-02".parse().unwrap();
        assert_eq!(feb_2023.last_day(), NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let dec = Month::new(2024, 12).unwrap();
        assert_eq!(dec.last_day(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_contains() {
        let month = Month::new(2024, 2).unwrap();
        assert!(month.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(month.contains(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::new(2024, 2).unwrap().to_string(), "2024-02");
    }
}
