use std::io;

use spendlens_domain::{ExpenseField, PeriodKeyError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: ExpenseField, reason: String },
    #[error("Index {index} is out of range for a ledger of {len} records")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Expense not found: {0}")]
    RecordNotFound(Uuid),
    #[error("Invalid period: {0}")]
    InvalidPeriod(#[from] PeriodKeyError),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CoreError {
    pub fn validation(field: ExpenseField, reason: impl Into<String>) -> Self {
        CoreError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Returns `true` for failures raised while reading or writing durable storage.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            CoreError::Storage(_) | CoreError::Serde(_) | CoreError::Io(_)
        )
    }
}
