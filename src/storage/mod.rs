pub mod text_backend;
pub mod text_format;

use std::sync::Arc;

use crate::{errors::Result, ledger::Ledger, time::Clock};

/// Abstraction over persistence backends capable of loading and saving a whole ledger.
pub trait StorageBackend {
    /// Loads the persisted ledger, validating records against `clock`.
    fn load(&self, clock: Arc<dyn Clock>) -> Result<Ledger>;

    /// Replaces the persisted ledger with `ledger`.
    fn save(&self, ledger: &Ledger) -> Result<()>;

    /// Human readable location used in status messages.
    fn location(&self) -> String;
}

pub use text_backend::TextStore;
pub use text_format::{format_record, read_ledger, write_ledger};
