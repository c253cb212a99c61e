use serde::{Deserialize, Serialize};
use std::fmt;

/// One ledger entry.
///
/// The wire format uses camelCase field names to stay compatible with
/// the existing frontend contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// 1-based ordinal among persisted rows at the time of read; used
    /// as the record's identifier. Not stable across deletions.
    pub position: usize,
    /// Free-form account label ("cash", "savings", "credit card", ...)
    pub account_type: String,
    /// 3-letter currency code; unrecognized codes convert at 1:1
    pub currency: String,
    /// Signed amount in `currency`
    pub amount: f64,
    /// Free-form description
    pub description: String,
    /// Timestamp assigned at write time (RFC 3339)
    pub recorded_at: String,
    /// `amount` converted to CNY, rounded to 2 decimal places
    pub normalized_amount: f64,
    /// Asset/liability tag derived from the account type
    pub classification: Classification,
}

/// Whether an entry counts toward assets or liabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Asset,
    Liability,
}

impl Classification {
    /// The label stored in the ledger file and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Asset => "asset",
            Classification::Liability => "liability",
        }
    }

    /// Parse a stored label; anything that is not "liability" reads as
    /// an asset, mirroring the classification default.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("liability") {
            Classification::Liability
        } else {
            Classification::Asset
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of POST /api/records and PUT /api/records/:position.
///
/// Derived fields (`recordedAt`, `normalizedAmount`, `classification`)
/// are deliberately absent: the server always recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    pub account_type: String,
    pub currency: String,
    pub amount: f64,
    pub description: String,
}

/// Acknowledgement returned by DELETE /api/records/:position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Error body shared by all failure responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_camel_case_names() -> anyhow::Result<()> {
        let record = Record {
            position: 1,
            account_type: "credit card".to_string(),
            currency: "USD".to_string(),
            amount: 10.0,
            description: "fee".to_string(),
            recorded_at: "2024-01-15T10:30:00+00:00".to_string(),
            normalized_amount: 72.0,
            classification: Classification::Liability,
        };

        let json = serde_json::to_value(&record)?;
        assert_eq!(json["accountType"], "credit card");
        assert_eq!(json["recordedAt"], "2024-01-15T10:30:00+00:00");
        assert_eq!(json["normalizedAmount"], 72.0);
        assert_eq!(json["classification"], "liability");

        let back: Record = serde_json::from_value(json)?;
        assert_eq!(back, record);
        Ok(())
    }

    #[test]
    fn classification_labels_round_trip() {
        assert_eq!(Classification::from_label("liability"), Classification::Liability);
        assert_eq!(Classification::from_label("asset"), Classification::Asset);
        // Unknown labels read as assets.
        assert_eq!(Classification::from_label("garbage"), Classification::Asset);
        assert_eq!(Classification::Liability.as_str(), "liability");
    }
}
