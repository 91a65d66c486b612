use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The closed set of statuses a user can filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Successful,
    Failed,
    Pending,
}

impl Status {
    /// Authoring order used by the status picker.
    pub const ALL: [Status; 3] = [Self::Successful, Self::Failed, Self::Pending];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Successful => "successful",
            Self::Failed => "failed",
            Self::Pending => "pending",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Successful => "Successful",
            Self::Failed => "Failed",
            Self::Pending => "Pending",
        }
    }

    /// Lenient match for user input: surrounding space and case are ignored.
    pub fn parse(value: &str) -> Option<Self> {
        Self::from_wire(&value.trim().to_ascii_lowercase())
    }

    /// Exact match against the wire names a feed carries.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status as it appears on a feed record.
///
/// An absent status is `Completed`, which sits outside the filterable set:
/// any active status filter excludes it. Only the exact lowercase wire names
/// are `Known`; `"Failed"` or a number stays `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<Value>", into = "String")]
pub enum TransactionStatus {
    Known(Status),
    #[default]
    Completed,
    Unrecognized(String),
}

impl TransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Completed => "completed",
            Self::Unrecognized(value) => value.as_str(),
        }
    }

    pub fn known(&self) -> Option<Status> {
        match self {
            Self::Known(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<Option<String>> for TransactionStatus {
    fn from(value: Option<String>) -> Self {
        let Some(raw) = value else {
            return Self::Completed;
        };
        if let Some(status) = Status::from_wire(&raw) {
            return Self::Known(status);
        }
        if raw == "completed" {
            return Self::Completed;
        }
        Self::Unrecognized(raw)
    }
}

impl From<Option<Value>> for TransactionStatus {
    fn from(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Completed,
            Some(Value::String(raw)) => Self::from(Some(raw)),
            Some(other) => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<TransactionStatus> for String {
    fn from(value: TransactionStatus) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Payment,
    Withdrawal,
}

impl TransactionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Withdrawal => "withdrawal",
        }
    }
}

/// Display-only details; the filter engine never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, rename = "payment_reference", alias = "reference")]
    pub reference: Option<String>,
    pub amount: Decimal,
    /// Raw occurrence time; parsed on demand so a malformed value only
    /// affects the date gate. Missing or null reads as empty, and other
    /// non-string values keep their JSON text.
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: String,
    #[serde(default)]
    pub status: TransactionStatus,
    #[serde(default, rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

fn lenient_date<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(raw)) => raw,
        Some(other) => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Status, Transaction, TransactionKind, TransactionStatus};

    #[test]
    fn deserializes_feed_records_with_defaults() {
        let parsed = serde_json::from_value::<Transaction>(json!({
            "amount": 75,
            "date": "2025-10-25T16:45:00Z",
            "type": "withdrawal",
        }));
        assert!(parsed.is_ok());
        if let Ok(transaction) = parsed {
            assert_eq!(transaction.reference, None);
            assert_eq!(transaction.status, TransactionStatus::Completed);
            assert_eq!(transaction.kind, TransactionKind::Withdrawal);
            assert_eq!(transaction.amount.to_string(), "75");
        }
    }

    #[test]
    fn string_amounts_keep_their_scale() {
        let parsed = serde_json::from_value::<Transaction>(json!({
            "payment_reference": "TXN002",
            "amount": "250.50",
            "date": "2025-10-22T14:30:00Z",
            "status": "pending",
            "metadata": { "product_name": "Product B", "name": "Jane Smith" },
        }));
        assert!(parsed.is_ok());
        if let Ok(transaction) = parsed {
            assert_eq!(transaction.amount.to_string(), "250.50");
            assert_eq!(transaction.status.known(), Some(Status::Pending));
            assert_eq!(transaction.kind, TransactionKind::Payment);
        }
    }

    #[test]
    fn null_and_unknown_statuses_are_kept_apart() {
        assert_eq!(TransactionStatus::from(None::<String>), TransactionStatus::Completed);
        assert_eq!(
            TransactionStatus::from(Some("reversed".to_string())),
            TransactionStatus::Unrecognized("reversed".to_string())
        );
        assert_eq!(
            TransactionStatus::from(Some("failed".to_string())),
            TransactionStatus::Known(Status::Failed)
        );
    }

    #[test]
    fn feed_statuses_match_wire_names_exactly() {
        assert_eq!(
            TransactionStatus::from(Some("Failed".to_string())),
            TransactionStatus::Unrecognized("Failed".to_string())
        );
        assert_eq!(
            TransactionStatus::from(Some(" pending ".to_string())),
            TransactionStatus::Unrecognized(" pending ".to_string())
        );
        assert_eq!(
            TransactionStatus::from(Some(json!(3))),
            TransactionStatus::Unrecognized("3".to_string())
        );
        assert_eq!(TransactionStatus::from(Some(json!(null))), TransactionStatus::Completed);
        assert_eq!(Status::parse(" Failed "), Some(Status::Failed));
        assert_eq!(Status::from_wire("Failed"), None);
    }

    #[test]
    fn non_string_dates_do_not_reject_the_record() {
        let missing =
            serde_json::from_value::<Transaction>(json!({"amount": "1", "status": "pending"}));
        assert!(missing.is_ok());
        if let Ok(transaction) = missing {
            assert_eq!(transaction.date, "");
        }

        let null = serde_json::from_value::<Transaction>(json!({"amount": "1", "date": null}));
        assert!(null.is_ok());
        if let Ok(transaction) = null {
            assert_eq!(transaction.date, "");
        }

        let numeric =
            serde_json::from_value::<Transaction>(json!({"amount": "1", "date": 1760954400000_i64}));
        assert!(numeric.is_ok());
        if let Ok(transaction) = numeric {
            assert_eq!(transaction.date, "1760954400000");
        }
    }

    #[test]
    fn statuses_serialize_back_to_their_wire_names() {
        let value = serde_json::to_value(TransactionStatus::Unrecognized("reversed".to_string()));
        assert!(value.is_ok());
        if let Ok(rendered) = value {
            assert_eq!(rendered, json!("reversed"));
        }
    }
}
