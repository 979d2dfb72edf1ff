//! Domain model for a single recorded expense.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, period::PeriodKey};

/// One dated, categorized expense entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
    /// Display-formatted creation timestamp. Never parsed back.
    #[serde(rename = "createdAt", alias = "time", default)]
    pub created_at: String,
}

impl ExpenseRecord {
    pub fn new(category: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            amount,
            date,
            note: String::new(),
            created_at: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    pub fn period(&self) -> PeriodKey {
        PeriodKey::of(self.date)
    }

    pub fn falls_within(&self, period: PeriodKey) -> bool {
        period.contains(self.date)
    }
}

impl Amounted for ExpenseRecord {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for ExpenseRecord {
    fn display_label(&self) -> String {
        if self.note.is_empty() {
            format!("{} {} {:.2}", self.date, self.category, self.amount)
        } else {
            format!(
                "{} {} {:.2} ({})",
                self.date, self.category, self.amount, self.note
            )
        }
    }
}

/// Names the user-supplied fields of an expense for validation reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseField {
    Category,
    Amount,
    Date,
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseField::Category => "category",
            ExpenseField::Amount => "amount",
            ExpenseField::Date => "date",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_storage_field_names() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let record = ExpenseRecord::new("Food", 120.5, date)
            .with_note("lunch")
            .with_created_at("3/5/2024, 1:00:00 PM");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["category"], "Food");
        assert_eq!(json["amount"], 120.5);
        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["note"], "lunch");
        assert_eq!(json["createdAt"], "3/5/2024, 1:00:00 PM");
    }

    #[test]
    fn accepts_legacy_entries_without_id_or_note() {
        let raw = r#"{"category":"Travel","amount":30,"date":"2024-04-01","time":"4/1/2024"}"#;
        let record: ExpenseRecord = serde_json::from_str(raw).unwrap();

        assert!(!record.id.is_nil());
        assert_eq!(record.note, "");
        assert_eq!(record.created_at, "4/1/2024");
        assert_eq!(record.period().to_string(), "2024-04");
    }

    #[test]
    fn display_label_includes_note_when_present() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let record = ExpenseRecord::new("Food", 12.0, date);
        assert_eq!(record.display_label(), "2024-03-05 Food 12.00");
        assert_eq!(
            record.with_note("tea").display_label(),
            "2024-03-05 Food 12.00 (tea)"
        );
    }
}
