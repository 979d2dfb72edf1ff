//! spendlens-core
//!
//! Business logic and services for SpendLens.
//! Depends on spendlens-domain. No CLI, no terminal I/O; persistence goes
//! through the [`storage::LedgerStorage`] trait.

pub mod budget_service;
pub mod error;
pub mod expense_service;
pub mod format;
pub mod ledger_store;
pub mod query_service;
pub mod storage;
pub mod time;

pub use budget_service::*;
pub use error::CoreError;
pub use expense_service::*;
pub use ledger_store::*;
pub use query_service::*;
