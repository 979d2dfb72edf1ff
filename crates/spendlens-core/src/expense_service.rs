//! Turns raw form input into validated expense records.

use chrono::NaiveDate;
use spendlens_domain::{ExpenseField, ExpenseRecord};

use crate::{ledger_store::validate_record, time::Clock, CoreError};

/// Unvalidated field values as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub category: String,
    pub amount: String,
    pub date: String,
    pub note: String,
}

impl ExpenseDraft {
    pub fn new(
        category: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            amount: amount.into(),
            date: date.into(),
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

pub struct ExpenseService;

impl ExpenseService {
    /// Validates `draft` field by field (category, amount, date) and builds a record
    /// stamped with the clock's creation time.
    pub fn build(draft: &ExpenseDraft, clock: &dyn Clock) -> Result<ExpenseRecord, CoreError> {
        let category = draft.category.trim();
        if category.is_empty() {
            return Err(CoreError::validation(
                ExpenseField::Category,
                "a category is required",
            ));
        }
        let amount = parse_amount(&draft.amount)?;
        let date = parse_date(&draft.date)?;

        let record = ExpenseRecord::new(category, amount, date)
            .with_note(draft.note.trim())
            .with_created_at(clock.created_stamp());
        validate_record(&record)?;
        Ok(record)
    }
}

fn parse_amount(raw: &str) -> Result<f64, CoreError> {
    let amount: f64 = raw.trim().parse().map_err(|_| {
        CoreError::validation(ExpenseField::Amount, format!("`{}` is not a number", raw.trim()))
    })?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::validation(
            ExpenseField::Amount,
            "amount must be a positive number",
        ));
    }
    Ok(amount)
}

fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(ExpenseField::Date, "a date is required"));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        CoreError::validation(
            ExpenseField::Date,
            format!("`{trimmed}` is not a YYYY-MM-DD date"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 18).unwrap())
    }

    fn field_of(err: CoreError) -> ExpenseField {
        match err {
            CoreError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn builds_trimmed_record() {
        let draft = ExpenseDraft::new("  Food ", "120.50", "2024-03-05").with_note(" dinner ");
        let record = ExpenseService::build(&draft, &clock()).expect("valid draft");

        assert_eq!(record.category, "Food");
        assert_eq!(record.amount, 120.5);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(record.note, "dinner");
        assert!(!record.created_at.is_empty());
    }

    #[test]
    fn reports_the_first_invalid_field() {
        let missing_category = ExpenseDraft::new("   ", "-5", "");
        assert_eq!(
            field_of(ExpenseService::build(&missing_category, &clock()).unwrap_err()),
            ExpenseField::Category
        );

        for amount in ["0", "-3", "abc", "", "inf"] {
            let draft = ExpenseDraft::new("Food", amount, "2024-03-05");
            assert_eq!(
                field_of(ExpenseService::build(&draft, &clock()).unwrap_err()),
                ExpenseField::Amount,
                "amount `{amount}` should be rejected"
            );
        }

        for date in ["", "2024-02-30", "05/03/2024"] {
            let draft = ExpenseDraft::new("Food", "10", date);
            assert_eq!(
                field_of(ExpenseService::build(&draft, &clock()).unwrap_err()),
                ExpenseField::Date,
                "date `{date}` should be rejected"
            );
        }
    }
}
