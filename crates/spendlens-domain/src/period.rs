//! Calendar-month keys used for filtering, resets and budget tracking.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Identifies a calendar month, rendered as `YYYY-MM`.
///
/// Ordering is chronological, which matches the lexicographic order of the
/// text form for four-digit years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeriodKey {
    year: i32,
    month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors that can occur when constructing [`PeriodKey`] values.
pub enum PeriodKeyError {
    #[error("period `{0}` must use the YYYY-MM format")]
    Format(String),
    #[error("month {0} is outside 1..=12")]
    Month(u32),
}

impl PeriodKey {
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodKeyError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodKeyError::Month(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Human label such as `March 2024`.
    pub fn long_label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// Month name only, such as `March`.
    pub fn month_name(&self) -> String {
        self.first_day().format("%B").to_string()
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PeriodKey {
    type Err = PeriodKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let format_error = || PeriodKeyError::Format(trimmed.to_string());
        let (year, month) = trimmed.split_once('-').ok_or_else(format_error)?;
        if year.len() != 4
            || month.len() != 2
            || !year.chars().all(|c| c.is_ascii_digit())
            || !month.chars().all(|c| c.is_ascii_digit())
        {
            return Err(format_error());
        }
        let year: i32 = year.parse().map_err(|_| format_error())?;
        let month: u32 = month.parse().map_err(|_| format_error())?;
        PeriodKey::new(year, month)
    }
}

impl Serialize for PeriodKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PeriodKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_year_month() {
        let key: PeriodKey = "2024-03".parse().expect("valid period");
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 3);
        assert_eq!(key.to_string(), "2024-03");
        assert_eq!(key.long_label(), "March 2024");
    }

    #[test]
    fn rejects_malformed_periods() {
        assert!("2024-3".parse::<PeriodKey>().is_err());
        assert!("2024-13".parse::<PeriodKey>().is_err());
        assert!("2024/03".parse::<PeriodKey>().is_err());
        assert!("2024-03-01".parse::<PeriodKey>().is_err());
        assert!("".parse::<PeriodKey>().is_err());
    }

    #[test]
    fn ordering_is_chronological() {
        let mut keys: Vec<PeriodKey> = ["2024-11", "2023-12", "2024-02"]
            .iter()
            .map(|raw| raw.parse().unwrap())
            .collect();
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["2023-12", "2024-02", "2024-11"]);
    }

    #[test]
    fn contains_matches_dates_in_the_month_only() {
        let key = PeriodKey::new(2024, 3).unwrap();
        assert!(key.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2023, 3, 15).unwrap()));
    }
}
