//! Domain layer: valuation rules and the record service.

pub mod record_service;
pub mod valuation;

pub use record_service::RecordService;
