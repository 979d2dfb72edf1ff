//! Budget progress structures and severity bands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::period::PeriodKey;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Severity band derived from the share of the monthly budget consumed.
pub enum Severity {
    Normal,
    Warning,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Normal => "Normal",
            Severity::Warning => "Warning",
            Severity::Danger => "Danger",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Describes where monthly spending stands relative to the budget.
pub enum RemainingState {
    Normal,
    LimitReached,
    NoBudget,
}

impl fmt::Display for RemainingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RemainingState::Normal => "Under Limit",
            RemainingState::LimitReached => "Limit Reached",
            RemainingState::NoBudget => "No Budget",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// Remaining-budget state plus the signed amount left.
///
/// `remaining` is `budget - total` whenever a budget exists, so it is zero or
/// negative once the limit is reached. It is `0` when no budget is set.
pub struct BudgetMessage {
    pub state: RemainingState,
    pub remaining: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Complete budget evaluation for one period.
pub struct BudgetProgress {
    pub period: PeriodKey,
    pub monthly_total: f64,
    pub budget: f64,
    /// Unclamped share of the budget consumed, in percent.
    pub percent: f64,
    /// `percent` clamped to `0..=100` for progress indicators.
    pub display_percent: f64,
    pub severity: Severity,
    pub message: BudgetMessage,
}

impl BudgetProgress {
    pub fn has_budget(&self) -> bool {
        !matches!(self.message.state, RemainingState::NoBudget)
    }
}
