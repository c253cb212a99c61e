//! Storage layer: the CSV-backed record store and its error taxonomy.

pub mod csv;

pub use csv::{CsvConnection, RecordRepository};

use thiserror::Error;

/// Errors surfaced by record store operations.
///
/// Malformed rows are not an error: they are silently skipped during
/// listing (see [`csv::codec::decode_row`]).
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A mutation targeted a position with no persisted row.
    #[error("no record at position {0}")]
    NotFound(usize),
    /// The ledger file could not be read or written.
    #[error("ledger file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The ledger file could not be processed as CSV.
    #[error("ledger file is not readable as CSV: {0}")]
    Csv(#[from] ::csv::Error),
}
