use std::fmt::{self, Write};

use chrono::NaiveDate;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// How the integer part of an amount is split into digit groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigitGrouping {
    /// `1,234,567`
    Standard,
    /// `12,34,567`
    #[default]
    Indian,
}

impl DigitGrouping {
    /// Lenient parser for configuration values; unknown values fall back to the default.
    pub fn from_config(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" | "western" | "thousands" => DigitGrouping::Standard,
            _ => DigitGrouping::Indian,
        }
    }
}

impl fmt::Display for DigitGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DigitGrouping::Standard => "standard",
            DigitGrouping::Indian => "indian",
        };
        f.write_str(label)
    }
}

/// Symbol-prefixed currency formatter with configurable grouping and precision.
#[derive(Debug, Clone)]
pub struct GroupedCurrencyFormatter {
    symbol: String,
    grouping: DigitGrouping,
    precision: usize,
}

impl GroupedCurrencyFormatter {
    pub fn new(symbol: impl Into<String>, grouping: DigitGrouping, precision: u8) -> Self {
        Self {
            symbol: symbol.into(),
            grouping,
            precision: precision as usize,
        }
    }
}

impl Default for GroupedCurrencyFormatter {
    fn default() -> Self {
        Self::new("₹", DigitGrouping::Indian, 2)
    }
}

impl CurrencyFormatter for GroupedCurrencyFormatter {
    fn format_amount(&self, amount: f64) -> String {
        let raw = format!("{:.*}", self.precision, amount.abs());
        let (integer, fraction) = match raw.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (raw.as_str(), None),
        };
        let negative = amount < 0.0 && raw.chars().any(|c| c.is_ascii_digit() && c != '0');

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        out.push_str(&group_digits(integer, self.grouping));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

/// `chrono` pattern based date formatter.
#[derive(Debug, Clone)]
pub struct PatternDateFormatter {
    pattern: String,
}

impl PatternDateFormatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Default for PatternDateFormatter {
    fn default() -> Self {
        Self::new("%-m/%-d/%Y")
    }
}

impl DateFormatter for PatternDateFormatter {
    /// Falls back to ISO `YYYY-MM-DD` when the pattern is not a valid `chrono` format.
    fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.pattern)).is_err() {
            return date.format("%Y-%m-%d").to_string();
        }
        out
    }
}

fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = match grouping {
        DigitGrouping::Standard => 3,
        DigitGrouping::Indian => 2,
    };
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping_splits_lakhs() {
        let formatter = GroupedCurrencyFormatter::default();
        assert_eq!(formatter.format_amount(1234567.5), "₹12,34,567.50");
        assert_eq!(formatter.format_amount(999.0), "₹999.00");
        assert_eq!(formatter.format_amount(1000.0), "₹1,000.00");
    }

    #[test]
    fn standard_grouping_splits_thousands() {
        let formatter = GroupedCurrencyFormatter::new("$", DigitGrouping::Standard, 2);
        assert_eq!(formatter.format_amount(1234567.0), "$1,234,567.00");
        assert_eq!(formatter.format_amount(-100.0), "-$100.00");
    }

    #[test]
    fn zero_precision_omits_fraction_and_negative_zero_sign() {
        let formatter = GroupedCurrencyFormatter::new("€", DigitGrouping::Standard, 0);
        assert_eq!(formatter.format_amount(42.4), "€42");
        assert_eq!(formatter.format_amount(-0.001), "€0");
    }

    #[test]
    fn grouping_config_is_lenient() {
        assert_eq!(DigitGrouping::from_config("Standard"), DigitGrouping::Standard);
        assert_eq!(DigitGrouping::from_config("anything"), DigitGrouping::Indian);
    }

    #[test]
    fn pattern_date_formatter_uses_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(PatternDateFormatter::default().format_date(date), "3/5/2024");
        assert_eq!(PatternDateFormatter::new("%d %b %Y").format_date(date), "05 Mar 2024");
        assert_eq!(PatternDateFormatter::new("%Q").format_date(date), "2024-03-05");
    }
}
