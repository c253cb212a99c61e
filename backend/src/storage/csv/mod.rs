//! CSV flat-file persistence for ledger records.

pub mod codec;
pub mod connection;
pub mod record_repository;

pub use connection::CsvConnection;
pub use record_repository::RecordRepository;
