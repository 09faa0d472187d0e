#![doc(test(attr(deny(warnings))))]

//! Finance Tracker keeps a personal ledger of income and outcome transactions,
//! persists it to a flat text file and answers overall, monthly and
//! per-category summaries.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Finance Tracker tracing initialized.");
    });
}
