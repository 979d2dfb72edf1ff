//! Provides budget consumption and severity helpers for the monthly threshold.

use spendlens_domain::{
    BudgetMessage, BudgetProgress, ExpenseRecord, Ledger, PeriodKey, RemainingState, Severity,
};

use crate::query_service::QueryService;

/// Upper bound (inclusive) of the `Normal` band, in percent.
pub const WARNING_THRESHOLD: f64 = 75.0;
/// Upper bound (inclusive) of the `Warning` band, in percent.
pub const DANGER_THRESHOLD: f64 = 90.0;

/// Stateless budgeting utilities that operate over ledger snapshots.
pub struct BudgetService;

impl BudgetService {
    /// Sums the amounts of records dated within `period`.
    pub fn monthly_total(records: &[ExpenseRecord], period: PeriodKey) -> f64 {
        QueryService::total_of(records.iter().filter(|record| record.falls_within(period)))
    }

    /// Share of `budget` consumed, unclamped. A budget of `0` or less yields `0`.
    pub fn progress_percent(monthly_total: f64, budget: f64) -> f64 {
        if budget <= 0.0 {
            0.0
        } else {
            (monthly_total / budget) * 100.0
        }
    }

    pub fn classify(progress_percent: f64) -> Severity {
        if progress_percent > DANGER_THRESHOLD {
            Severity::Danger
        } else if progress_percent > WARNING_THRESHOLD {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }

    /// Remaining-budget state. `remaining` is `budget - total` whenever a budget is set.
    pub fn remaining_message(monthly_total: f64, budget: f64) -> BudgetMessage {
        if budget <= 0.0 {
            BudgetMessage {
                state: RemainingState::NoBudget,
                remaining: 0.0,
            }
        } else if monthly_total >= budget {
            BudgetMessage {
                state: RemainingState::LimitReached,
                remaining: budget - monthly_total,
            }
        } else {
            BudgetMessage {
                state: RemainingState::Normal,
                remaining: budget - monthly_total,
            }
        }
    }

    /// Full evaluation of `period` against the ledger's budget. Ignores any view filters.
    pub fn evaluate(ledger: &Ledger, period: PeriodKey) -> BudgetProgress {
        let monthly_total = Self::monthly_total(&ledger.records, period);
        let budget = ledger.monthly_budget;
        let percent = Self::progress_percent(monthly_total, budget);
        BudgetProgress {
            period,
            monthly_total,
            budget,
            percent,
            display_percent: percent.clamp(0.0, 100.0),
            severity: Self::classify(percent),
            message: Self::remaining_message(monthly_total, budget),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(amount: f64, y: i32, m: u32, d: u32) -> ExpenseRecord {
        ExpenseRecord::new("Food", amount, NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn progress_percent_handles_missing_budget() {
        assert_eq!(BudgetService::progress_percent(450.0, 500.0), 90.0);
        assert_eq!(BudgetService::progress_percent(450.0, 0.0), 0.0);
        assert_eq!(BudgetService::progress_percent(450.0, -10.0), 0.0);
        assert_eq!(BudgetService::progress_percent(1000.0, 500.0), 200.0);
    }

    #[test]
    fn classify_uses_inclusive_upper_bounds() {
        assert_eq!(BudgetService::classify(0.0), Severity::Normal);
        assert_eq!(BudgetService::classify(75.0), Severity::Normal);
        assert_eq!(BudgetService::classify(75.01), Severity::Warning);
        assert_eq!(BudgetService::classify(90.0), Severity::Warning);
        assert_eq!(BudgetService::classify(90.01), Severity::Danger);
        assert_eq!(BudgetService::classify(250.0), Severity::Danger);
    }

    #[test]
    fn remaining_message_reports_signed_remaining() {
        assert_eq!(
            BudgetService::remaining_message(600.0, 500.0),
            BudgetMessage {
                state: RemainingState::LimitReached,
                remaining: -100.0
            }
        );
        assert_eq!(
            BudgetService::remaining_message(500.0, 500.0),
            BudgetMessage {
                state: RemainingState::LimitReached,
                remaining: 0.0
            }
        );
        assert_eq!(
            BudgetService::remaining_message(120.0, 500.0),
            BudgetMessage {
                state: RemainingState::Normal,
                remaining: 380.0
            }
        );
        assert_eq!(
            BudgetService::remaining_message(120.0, 0.0).state,
            RemainingState::NoBudget
        );
    }

    #[test]
    fn evaluate_only_counts_the_requested_period() {
        let ledger = Ledger::new(
            vec![
                record(300.0, 2024, 3, 1),
                record(150.0, 2024, 3, 28),
                record(900.0, 2024, 4, 2),
            ],
            500.0,
        );
        let march = BudgetService::evaluate(&ledger, PeriodKey::new(2024, 3).unwrap());
        assert_eq!(march.monthly_total, 450.0);
        assert_eq!(march.percent, 90.0);
        assert_eq!(march.severity, Severity::Warning);
        assert_eq!(march.message.remaining, 50.0);

        let april = BudgetService::evaluate(&ledger, PeriodKey::new(2024, 4).unwrap());
        assert_eq!(april.percent, 180.0);
        assert_eq!(april.display_percent, 100.0);
        assert_eq!(april.severity, Severity::Danger);
        assert_eq!(april.message.state, RemainingState::LimitReached);
    }

    #[test]
    fn evaluate_without_budget_is_distinct_from_zero_percent() {
        let ledger = Ledger::new(vec![record(10.0, 2024, 3, 1)], 0.0);
        let progress = BudgetService::evaluate(&ledger, PeriodKey::new(2024, 3).unwrap());
        assert_eq!(progress.percent, 0.0);
        assert!(!progress.has_budget());
        assert_eq!(progress.severity, Severity::Normal);
    }
}
