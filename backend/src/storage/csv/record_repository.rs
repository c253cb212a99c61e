use chrono::Utc;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use tracing::{info, warn};

use shared::{CreateRecordRequest, Record};

use super::codec;
use super::connection::CsvConnection;
use crate::domain::valuation;
use crate::storage::LedgerError;

/// CSV-based record repository.
///
/// Every operation reads the whole ledger file, mutates the row list
/// in memory, and rewrites the whole file. There is no incremental or
/// streaming I/O and no index; positions are derived from file order
/// on every read.
#[derive(Clone)]
pub struct RecordRepository {
    connection: CsvConnection,
}

impl RecordRepository {
    /// Create a new CSV record repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read the header and all raw data rows from the ledger file.
    ///
    /// Rows are kept raw here so that malformed rows still occupy
    /// their position for the mutation operations.
    fn read_rows(&self) -> Result<(StringRecord, Vec<StringRecord>), LedgerError> {
        self.connection.ensure_ledger_file_exists()?;

        let file = File::open(self.connection.ledger_file_path())?;
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()?.clone();
        let mut rows = Vec::new();
        for row in reader.records() {
            rows.push(row?);
        }

        Ok((headers, rows))
    }

    /// Rewrite the whole ledger file from the in-memory row list.
    fn write_rows(&self, rows: &[StringRecord]) -> Result<(), LedgerError> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.connection.ledger_file_path())?;

        let mut writer = WriterBuilder::new()
            .flexible(true)
            .from_writer(BufWriter::new(file));

        writer.write_record(&codec::LEDGER_HEADER)?;
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Build a full record from caller input. The derived fields are
    /// always recomputed here, never taken from the caller.
    fn build_record(input: &CreateRecordRequest, position: usize) -> Record {
        Record {
            position,
            account_type: input.account_type.clone(),
            currency: input.currency.clone(),
            amount: input.amount,
            description: input.description.clone(),
            recorded_at: Utc::now().to_rfc3339(),
            normalized_amount: valuation::to_cny(input.amount, &input.currency),
            classification: valuation::classify(&input.account_type),
        }
    }

    /// List all decodable records in file order.
    ///
    /// Positions are 1-based ordinals among the data rows. A malformed
    /// row is skipped but still consumes its ordinal, so the positions
    /// of later rows are stable for a given file.
    pub fn list_all(&self) -> Result<Vec<Record>, LedgerError> {
        let (headers, rows) = self.read_rows()?;

        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            match codec::decode_row(&headers, row) {
                Some(mut record) => {
                    record.position = index + 1;
                    records.push(record);
                }
                None => {
                    warn!("Skipping malformed ledger row at position {}", index + 1);
                }
            }
        }

        Ok(records)
    }

    /// Append one record to the ledger.
    pub fn append(&self, input: &CreateRecordRequest) -> Result<Record, LedgerError> {
        let (_, mut rows) = self.read_rows()?;

        let record = Self::build_record(input, rows.len() + 1);
        rows.push(codec::encode_row(&record));
        self.write_rows(&rows)?;

        info!("Appended record at position {}", record.position);
        Ok(record)
    }

    /// Replace the row at `position` with a freshly derived record.
    /// The previous row's values are discarded, not merged.
    pub fn replace(
        &self,
        position: usize,
        input: &CreateRecordRequest,
    ) -> Result<Record, LedgerError> {
        let (_, mut rows) = self.read_rows()?;
        if position == 0 || position > rows.len() {
            return Err(LedgerError::NotFound(position));
        }

        let record = Self::build_record(input, position);
        rows[position - 1] = codec::encode_row(&record);
        self.write_rows(&rows)?;

        info!("Replaced record at position {}", position);
        Ok(record)
    }

    /// Remove the row at `position`. Later rows shift down by one
    /// position on the next read.
    pub fn remove_at(&self, position: usize) -> Result<(), LedgerError> {
        let (_, mut rows) = self.read_rows()?;
        if position == 0 || position > rows.len() {
            return Err(LedgerError::NotFound(position));
        }

        rows.remove(position - 1);
        self.write_rows(&rows)?;

        info!("Removed record at position {}", position);
        Ok(())
    }
}
