//! Row-level mapping between the ledger file format and [`Record`].
//!
//! Pure functions, no I/O. The repository owns reading and writing the
//! file; this module only translates individual rows.

use csv::StringRecord;
use shared::{Classification, Record};

/// Fixed column order of the ledger file. The header row is exactly
/// these names joined by commas.
pub const LEDGER_HEADER: [&str; 7] = [
    "accountType",
    "currency",
    "amount",
    "description",
    "recordedAt",
    "normalizedAmount",
    "classification",
];

/// Decode one data row by zipping header names to field values
/// positionally.
///
/// Returns `None` when the row's field count does not match the
/// header's; such rows are skipped by the caller rather than treated
/// as errors. Unknown header names are ignored, and numeric fields
/// that fail to parse default to 0. The caller fills in `position`.
pub fn decode_row(headers: &StringRecord, row: &StringRecord) -> Option<Record> {
    if row.len() != headers.len() {
        return None;
    }

    let mut record = Record {
        position: 0,
        account_type: String::new(),
        currency: String::new(),
        amount: 0.0,
        description: String::new(),
        recorded_at: String::new(),
        normalized_amount: 0.0,
        classification: Classification::Asset,
    };

    for (name, value) in headers.iter().zip(row.iter()) {
        let value = value.trim();
        match name.trim() {
            "accountType" => record.account_type = value.to_string(),
            "currency" => record.currency = value.to_string(),
            "amount" => record.amount = value.parse().unwrap_or(0.0),
            "description" => record.description = value.to_string(),
            "recordedAt" => record.recorded_at = value.to_string(),
            "normalizedAmount" => record.normalized_amount = value.parse().unwrap_or(0.0),
            "classification" => record.classification = Classification::from_label(value),
            _ => {}
        }
    }

    Some(record)
}

/// Encode a record in the fixed column order.
pub fn encode_row(record: &Record) -> StringRecord {
    StringRecord::from(vec![
        record.account_type.clone(),
        record.currency.clone(),
        record.amount.to_string(),
        record.description.clone(),
        record.recorded_at.clone(),
        record.normalized_amount.to_string(),
        record.classification.to_string(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> StringRecord {
        StringRecord::from(LEDGER_HEADER.to_vec())
    }

    fn sample_record() -> Record {
        Record {
            position: 0,
            account_type: "credit card".to_string(),
            currency: "USD".to_string(),
            amount: 10.0,
            description: "annual fee".to_string(),
            recorded_at: "2024-01-15T10:30:00+00:00".to_string(),
            normalized_amount: 72.0,
            classification: Classification::Liability,
        }
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let record = sample_record();
        let decoded = decode_row(&header(), &encode_row(&record)).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn field_count_mismatch_skips_the_row() {
        let row = StringRecord::from(vec!["cash", "CNY", "100"]);
        assert!(decode_row(&header(), &row).is_none());
    }

    #[test]
    fn unparseable_numbers_default_to_zero() {
        let row = StringRecord::from(vec![
            "cash",
            "CNY",
            "not-a-number",
            "lunch",
            "2024-01-15T10:30:00+00:00",
            "also-bad",
            "asset",
        ]);
        let record = decode_row(&header(), &row).unwrap();
        assert_eq!(record.amount, 0.0);
        assert_eq!(record.normalized_amount, 0.0);
    }

    #[test]
    fn unknown_header_names_are_ignored() {
        let headers = StringRecord::from(vec!["accountType", "mystery", "amount"]);
        let row = StringRecord::from(vec!["cash", "whatever", "25.5"]);

        let record = decode_row(&headers, &row).unwrap();
        assert_eq!(record.account_type, "cash");
        assert_eq!(record.amount, 25.5);
        assert_eq!(record.description, "");
    }

    #[test]
    fn whitespace_around_fields_is_trimmed() {
        let row = StringRecord::from(vec![
            " savings ",
            " usd ",
            " 3.5 ",
            " rainy day ",
            " 2024-01-15T10:30:00+00:00 ",
            " 25.2 ",
            " asset ",
        ]);
        let record = decode_row(&header(), &row).unwrap();
        assert_eq!(record.account_type, "savings");
        assert_eq!(record.currency, "usd");
        assert_eq!(record.amount, 3.5);
    }
}
