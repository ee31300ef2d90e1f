use thiserror::Error;

/// Corrupt ledger content. Always fatal: rows are never skipped or repaired.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum LedgerError {
    #[error("ledger file has no header row")]
    MissingHeader,

    #[error("ledger header is '{found}', expected 'date,amount,category,description'")]
    BadHeader { found: String },

    #[error("line {line}: expected 4 columns, found {found}")]
    ColumnCount { line: u64, found: usize },

    #[error("line {line}: invalid date '{value}' (expected dd-mm-yyyy)")]
    BadDate { line: u64, value: String },

    #[error("line {line}: invalid amount '{value}'")]
    BadAmount { line: u64, value: String },

    #[error("line {line}: unknown category '{value}'")]
    BadCategory { line: u64, value: String },
}
