//! Record service: translates API requests into record store
//! operations.

use tracing::info;

use shared::{CreateRecordRequest, Record};

use crate::storage::{LedgerError, RecordRepository};

/// Stateless service over the CSV record store, constructed once per
/// process with an injected repository.
#[derive(Clone)]
pub struct RecordService {
    repository: RecordRepository,
}

impl RecordService {
    pub fn new(repository: RecordRepository) -> Self {
        Self { repository }
    }

    /// All persisted records in file order.
    pub fn list_records(&self) -> Result<Vec<Record>, LedgerError> {
        self.repository.list_all()
    }

    /// Create a record. `recordedAt`, `normalizedAmount` and
    /// `classification` are derived server-side from the input.
    pub fn create_record(&self, request: CreateRecordRequest) -> Result<Record, LedgerError> {
        info!(
            "Creating record for account type '{}'",
            request.account_type
        );
        self.repository.append(&request)
    }

    /// Rewrite the record at `position` from the given input.
    pub fn update_record(
        &self,
        position: usize,
        request: CreateRecordRequest,
    ) -> Result<Record, LedgerError> {
        info!("Updating record at position {}", position);
        self.repository.replace(position, &request)
    }

    /// Delete the record at `position`.
    pub fn delete_record(&self, position: usize) -> Result<(), LedgerError> {
        info!("Deleting record at position {}", position);
        self.repository.remove_at(position)
    }
}
