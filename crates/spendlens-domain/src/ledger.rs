//! The expense ledger: ordered records plus the monthly budget threshold.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{expense::ExpenseRecord, period::PeriodKey};

/// Ordered collection of expenses and the single monthly budget value.
///
/// Insertion order is display order before any filtering. A budget of `0`
/// means no budget is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    pub records: Vec<ExpenseRecord>,
    pub monthly_budget: f64,
}

impl Ledger {
    pub fn new(records: Vec<ExpenseRecord>, monthly_budget: f64) -> Self {
        Self {
            records,
            monthly_budget: normalize_budget(monthly_budget),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, id: Uuid) -> Option<&ExpenseRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn position_of(&self, id: Uuid) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    pub fn push(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    pub fn remove_at(&mut self, index: usize) -> Option<ExpenseRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// Drops every record dated within `period`, returning how many were removed.
    pub fn retain_outside(&mut self, period: PeriodKey) -> usize {
        let before = self.records.len();
        self.records.retain(|record| !record.falls_within(period));
        before - self.records.len()
    }

    pub fn set_budget(&mut self, value: f64) {
        self.monthly_budget = normalize_budget(value);
    }

    pub fn has_budget(&self) -> bool {
        self.monthly_budget > 0.0
    }
}

/// Coerces negative and non-finite budget values to `0`.
pub fn normalize_budget(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
