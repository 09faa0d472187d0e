use thiserror::Error;

/// Error type that captures ledger validation and persistence failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid transaction type `{0}`: expected `income` or `outcome`")]
    InvalidKind(String),
    #[error("Category cannot be empty")]
    EmptyCategory,
    #[error("Category {0:?} cannot contain a comma or control characters")]
    CategoryContainsDelimiter(String),
    #[error("Invalid amount `{0}`: must be a positive number")]
    InvalidAmount(String),
    #[error("Invalid date `{value}`: {reason}")]
    InvalidDate { value: String, reason: String },
    #[error("Invalid period {month}/{year}: enter a month between 1 and 12 and a year up to the current one")]
    InvalidPeriod { month: u32, year: i32 },
    #[error("Malformed record on line {line} (`{content}`): {reason}")]
    InvalidRecord {
        line: usize,
        content: String,
        #[source]
        reason: Box<LedgerError>,
    },
    #[error("Expected 4 comma separated fields, found {0}")]
    FieldCount(usize),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
