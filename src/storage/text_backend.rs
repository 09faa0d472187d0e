use std::{
    fs::File,
    io::{BufReader, ErrorKind},
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::info;

use crate::{
    errors::Result,
    ledger::Ledger,
    time::Clock,
    utils::persistence::write_atomic,
};

use super::{
    text_format::{read_ledger, write_ledger},
    StorageBackend,
};

/// Flat text file holding one ledger.
#[derive(Debug, Clone)]
pub struct TextStore {
    path: PathBuf,
}

impl TextStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for TextStore {
    fn load(&self, clock: Arc<dyn Clock>) -> Result<Ledger> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no ledger file yet, starting empty");
                return Ok(Ledger::with_clock(clock));
            }
            Err(err) => return Err(err.into()),
        };
        let ledger = read_ledger(BufReader::new(file), clock)?;
        info!(
            path = %self.path.display(),
            transactions = ledger.len(),
            "ledger loaded"
        );
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let mut buffer = Vec::new();
        write_ledger(ledger, &mut buffer)?;
        write_atomic(&self.path, &buffer)?;
        info!(
            path = %self.path.display(),
            transactions = ledger.len(),
            "ledger saved"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
