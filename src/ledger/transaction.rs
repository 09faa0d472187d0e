use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::errors::{LedgerError, Result};

/// `strftime` pattern for transaction dates (`DD-MM-YYYY`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Outcome,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Outcome => "outcome",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "income" => Ok(TransactionKind::Income),
            "outcome" => Ok(TransactionKind::Outcome),
            other => Err(LedgerError::InvalidKind(other.to_string())),
        }
    }
}

/// A single validated income or outcome record.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: f64,
    category: String,
    date: NaiveDate,
}

impl Transaction {
    /// Validates raw field text and builds a transaction.
    ///
    /// Checks run in a fixed order (kind, category, amount, date) and stop at
    /// the first failure. `today` bounds the accepted dates.
    pub fn parse(
        kind: &str,
        amount: &str,
        category: &str,
        date: &str,
        today: NaiveDate,
    ) -> Result<Self> {
        let kind = kind.parse::<TransactionKind>()?;
        let category = parse_category(category)?;
        let amount = parse_amount(amount)?;
        let date = parse_date(date, today)?;
        Ok(Self {
            kind,
            amount,
            category,
            date,
        })
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

fn parse_category(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::EmptyCategory);
    }
    // a comma or line break would split the stored record
    if trimmed.chars().any(|c| c == ',' || c.is_control()) {
        return Err(LedgerError::CategoryContainsDelimiter(trimmed.to_string()));
    }
    Ok(trimmed.to_lowercase())
}

fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        // adding +0.0 folds a parsed "-0" into 0
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value + 0.0),
        _ => Err(LedgerError::InvalidAmount(trimmed.to_string())),
    }
}

fn parse_date(raw: &str, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| LedgerError::InvalidDate {
        value: trimmed.to_string(),
        reason: reason.to_string(),
    };

    if !has_date_shape(trimmed) {
        return Err(invalid("expected Day-Month-Year as DD-MM-YYYY"));
    }
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| invalid("not a valid calendar date"))?;
    if date > today {
        return Err(invalid("date cannot be in the future"));
    }
    Ok(date)
}

/// `chrono` accepts unpadded and signed fields, so the layout is checked first.
fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            2 | 5 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}
