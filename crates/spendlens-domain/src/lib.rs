//! spendlens-domain
//!
//! Pure domain models (ExpenseRecord, Ledger, PeriodKey, budget bands).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod budget;
pub mod common;
pub mod expense;
pub mod ledger;
pub mod period;

pub use budget::*;
pub use common::*;
pub use expense::*;
pub use ledger::*;
pub use period::*;
