//! Ledger domain model: validated transactions, date ordering, and summaries.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;
pub mod transaction;

pub use ledger::Ledger;
pub use summary::AggregateView;
pub use transaction::{Transaction, TransactionKind, DATE_FORMAT};
