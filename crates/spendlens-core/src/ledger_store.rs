//! Owner of the in-memory ledger and its mirror in durable storage.

use spendlens_domain::{
    normalize_budget, Displayable, ExpenseField, ExpenseRecord, Ledger, PeriodKey,
};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    storage::{ledger_warnings, LedgerStorage, BUDGET_KEY, EXPENSES_KEY},
    CoreError,
};

/// Facade that coordinates ledger state and persistence.
///
/// Every mutation rewrites both storage entries in full. When that write
/// fails the in-memory change is kept, since it is the source of truth for
/// the session, and the storage error is returned so callers can surface it.
pub struct LedgerStore {
    ledger: Ledger,
    storage: Box<dyn LedgerStorage>,
}

impl LedgerStore {
    /// Restores the ledger from `storage`.
    ///
    /// Missing, unreadable or malformed entries degrade to an empty record
    /// list and a zero budget; loading never fails.
    pub fn load(storage: impl LedgerStorage + 'static) -> Self {
        Self::load_boxed(Box::new(storage))
    }

    pub fn load_boxed(storage: Box<dyn LedgerStorage>) -> Self {
        let records = read_records(storage.as_ref());
        let budget = read_budget(storage.as_ref());
        let ledger = Ledger::new(records, budget);
        for warning in ledger_warnings(&ledger) {
            warn!(%warning, "stored expense violates creation rules");
        }
        debug!(
            records = ledger.len(),
            budget = ledger.monthly_budget,
            "ledger loaded"
        );
        Self { ledger, storage }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.ledger.records
    }

    pub fn monthly_budget(&self) -> f64 {
        self.ledger.monthly_budget
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Validates and appends `record` to the end of the ledger.
    pub fn append(&mut self, record: ExpenseRecord) -> Result<(), CoreError> {
        validate_record(&record)?;
        debug!(id = %record.id, category = %record.category, amount = record.amount, "appending expense");
        self.ledger.push(record);
        self.persist()
    }

    /// Removes the record at `index` of the full, unfiltered sequence.
    pub fn remove_at(&mut self, index: usize) -> Result<ExpenseRecord, CoreError> {
        let len = self.ledger.len();
        let removed = self
            .ledger
            .remove_at(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })?;
        debug!(index, expense = %removed.display_label(), "removed expense");
        self.persist()?;
        Ok(removed)
    }

    /// Removes the record with the given stable identifier.
    pub fn remove_by_id(&mut self, id: Uuid) -> Result<ExpenseRecord, CoreError> {
        let index = self
            .ledger
            .position_of(id)
            .ok_or(CoreError::RecordNotFound(id))?;
        self.remove_at(index)
    }

    /// Stores a new monthly budget; negative and non-finite values become `0`.
    ///
    /// Returns the value actually stored.
    pub fn set_budget(&mut self, value: f64) -> Result<f64, CoreError> {
        self.ledger.set_budget(value);
        let stored = self.ledger.monthly_budget;
        if stored != value {
            warn!(requested = value, "budget coerced to 0");
        }
        debug!(budget = stored, "monthly budget updated");
        self.persist()?;
        Ok(stored)
    }

    /// Parses raw user text as a budget, then stores it.
    pub fn set_budget_input(&mut self, raw: &str) -> Result<f64, CoreError> {
        self.set_budget(parse_budget_text(raw))
    }

    /// Removes every record dated within `period` and returns how many were dropped.
    pub fn reset_period(&mut self, period: PeriodKey) -> Result<usize, CoreError> {
        let removed = self.ledger.retain_outside(period);
        debug!(%period, removed, "period reset");
        self.persist()?;
        Ok(removed)
    }

    /// Overwrites both storage entries with the current ledger.
    pub fn persist(&self) -> Result<(), CoreError> {
        let records = serde_json::to_string(&self.ledger.records)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        self.storage.write_entry(EXPENSES_KEY, &records)?;
        self.storage
            .write_entry(BUDGET_KEY, &self.ledger.monthly_budget.to_string())?;
        Ok(())
    }
}

/// Checks the creation-time invariants of an expense.
pub fn validate_record(record: &ExpenseRecord) -> Result<(), CoreError> {
    if record.category.trim().is_empty() {
        return Err(CoreError::validation(
            ExpenseField::Category,
            "a category is required",
        ));
    }
    if !record.amount.is_finite() || record.amount <= 0.0 {
        return Err(CoreError::validation(
            ExpenseField::Amount,
            "amount must be a positive number",
        ));
    }
    Ok(())
}

/// Reads the longest leading numeric prefix of `raw`, like a lenient float
/// parser. Anything unparsable, negative or non-finite becomes `0`.
pub fn parse_budget_text(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let end = numeric_prefix_len(trimmed.as_bytes());
    let parsed = trimmed[..end].parse::<f64>().unwrap_or(0.0);
    normalize_budget(parsed)
}

/// Length of the leading `[+-]digits[.digits][e[+-]digits]` run, or `0`
/// when it holds no mantissa digit.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |mut idx: usize| {
        while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
            idx += 1;
        }
        idx
    };

    let mut idx = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(idx);
    let mut mantissa_digits = int_end - idx;
    idx = int_end;
    if bytes.get(idx) == Some(&b'.') {
        let frac_end = digits_from(idx + 1);
        mantissa_digits += frac_end - idx - 1;
        idx = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        let mut exp = idx + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            idx = exp_end;
        }
    }
    idx
}

fn read_records(storage: &dyn LedgerStorage) -> Vec<ExpenseRecord> {
    match storage.read_entry(EXPENSES_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<ExpenseRecord>>(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "stored expenses are malformed; starting empty");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(err) => {
            warn!(error = %err, "unable to read stored expenses; starting empty");
            Vec::new()
        }
    }
}

fn read_budget(storage: &dyn LedgerStorage) -> f64 {
    match storage.read_entry(BUDGET_KEY) {
        Ok(Some(raw)) => parse_budget_text(&raw),
        Ok(None) => 0.0,
        Err(err) => {
            warn!(error = %err, "unable to read stored budget; using 0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_budget_text_follows_lenient_prefix_rules() {
        assert_eq!(parse_budget_text("500"), 500.0);
        assert_eq!(parse_budget_text("  1250.75 rupees"), 1250.75);
        assert_eq!(parse_budget_text("1e3"), 1000.0);
        assert_eq!(parse_budget_text("abc"), 0.0);
        assert_eq!(parse_budget_text(""), 0.0);
        assert_eq!(parse_budget_text("-40"), 0.0);
        assert_eq!(parse_budget_text("NaN"), 0.0);
        assert_eq!(parse_budget_text("₹500"), 0.0);
    }

    #[test]
    fn numeric_prefix_stops_at_the_first_non_numeric_shape() {
        assert_eq!(parse_budget_text("750.5abc"), 750.5);
        assert_eq!(parse_budget_text(".5"), 0.5);
        assert_eq!(parse_budget_text("+12."), 12.0);
        assert_eq!(parse_budget_text("2e"), 2.0);
        assert_eq!(parse_budget_text("2e-1x"), 0.2);
        assert_eq!(parse_budget_text("-."), 0.0);
        assert_eq!(numeric_prefix_len(b"12.5e+3 rupees"), 7);
    }

    #[test]
    fn long_numeric_run_is_measured_in_one_pass() {
        let raw = format!("{}{}", "9".repeat(50_000), "x".repeat(50_000));
        assert_eq!(parse_budget_text(&raw), 0.0, "overflow to infinity stores 0");
        assert_eq!(numeric_prefix_len(raw.as_bytes()), 50_000);
    }
}
