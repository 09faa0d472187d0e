#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use finance_tracker::{ledger::Ledger, storage::TextStore, time::FixedClock};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// The date every test ledger treats as "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
}

pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(today()))
}

pub fn empty_ledger() -> Ledger {
    Ledger::with_clock(clock())
}

/// The two-transaction ledger used throughout the query tests.
pub fn food_ledger() -> Ledger {
    let mut ledger = empty_ledger();
    ledger
        .add("income", "100", "food", "01-01-2024")
        .expect("valid income");
    ledger
        .add("outcome", "40", "food", "02-01-2024")
        .expect("valid outcome");
    ledger
}

/// Creates a store backed by a unique directory that outlives the test body.
pub fn temp_store() -> TextStore {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("transactions.csv");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    TextStore::new(path)
}
