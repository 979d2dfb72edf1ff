#![doc(test(attr(deny(warnings))))]

//! SpendLens keeps a personal expense ledger with a monthly budget and
//! exposes it through an interactive shell.

pub mod cli;
pub mod errors;
pub mod utils;

pub use errors::AppError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("SpendLens tracing initialized.");
    });
}
