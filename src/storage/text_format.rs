//! Line-oriented text codec: one `type,amount,category,date` record per line.

use std::{
    io::{BufRead, Write},
    sync::Arc,
};

use tracing::warn;

use crate::{
    errors::{LedgerError, Result},
    ledger::{Ledger, Transaction},
    time::Clock,
};

const FIELD_COUNT: usize = 4;

/// Reads every record from `reader`, validating each one like a direct insert.
///
/// Blank lines are skipped. The first malformed record aborts the read.
pub fn read_ledger<R: BufRead>(reader: R, clock: Arc<dyn Clock>) -> Result<Ledger> {
    let mut ledger = Ledger::with_clock(clock);
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.trim();
        if content.is_empty() {
            continue;
        }
        if let Err(reason) = add_record(&mut ledger, content) {
            warn!(line = index + 1, %reason, "rejected stored record");
            return Err(LedgerError::InvalidRecord {
                line: index + 1,
                content: content.to_string(),
                reason: Box::new(reason),
            });
        }
    }
    Ok(ledger)
}

fn add_record(ledger: &mut Ledger, content: &str) -> Result<()> {
    let fields: Vec<&str> = content.split(',').map(str::trim).collect();
    let [kind, amount, category, date] = fields.as_slice() else {
        return Err(LedgerError::FieldCount(fields.len()));
    };
    ledger.add(kind, amount, category, date)
}

/// Formats one transaction as a record line, without the line terminator.
pub fn format_record(transaction: &Transaction) -> String {
    format!(
        "{},{},{},{}",
        transaction.kind(),
        transaction.amount(),
        transaction.category(),
        transaction.formatted_date()
    )
}

/// Writes every transaction in ledger order, one record per line.
pub fn write_ledger<W: Write>(ledger: &Ledger, mut writer: W) -> Result<()> {
    for transaction in ledger.transactions() {
        writeln!(writer, "{}", format_record(transaction))?;
    }
    writer.flush()?;
    Ok(())
}
