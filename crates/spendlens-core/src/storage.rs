use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use spendlens_domain::Ledger;

use crate::CoreError;

/// Key holding the serialized expense list.
pub const EXPENSES_KEY: &str = "spendlens_expenses";
/// Key holding the monthly budget as plain text.
pub const BUDGET_KEY: &str = "spendlens_budget";

/// Abstraction over durable key-value stores holding the ledger entries.
///
/// Values are opaque strings. Writes overwrite the previous value in full.
pub trait LedgerStorage: Send + Sync {
    fn read_entry(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn write_entry(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn remove_entry(&self, key: &str) -> Result<(), CoreError>;
}

/// Volatile storage backend, shared between clones.
///
/// Used by tests and by the shell when no data directory is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        self
    }

    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }
}

impl LedgerStorage for MemoryStorage {
    fn read_entry(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory storage lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn write_entry(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory storage lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_entry(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory storage lock poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Detects persisted records that break the creation-time invariants.
///
/// Such records are kept as-is; the warnings are only reported.
pub fn ledger_warnings(ledger: &Ledger) -> Vec<String> {
    let mut warnings = Vec::new();
    for (index, record) in ledger.records.iter().enumerate() {
        if record.category.trim().is_empty() {
            warnings.push(format!("expense #{} has an empty category", index + 1));
        }
        if !(record.amount.is_finite() && record.amount > 0.0) {
            warnings.push(format!(
                "expense #{} has a non-positive amount {}",
                index + 1,
                record.amount
            ));
        }
    }
    warnings
}
