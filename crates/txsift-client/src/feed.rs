use std::collections::HashMap;
use std::fs;
use std::io::{IsTerminal, Read};
use std::str::FromStr;

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, warn};

use crate::filter::date::parse_instant;
use crate::filter::types::{Metadata, Transaction, TransactionKind, TransactionStatus};
use crate::{ClientError, ClientResult};

const STDIN_SOURCE: &str = "-";
const CSV_REQUIRED_HEADERS: [&str; 2] = ["amount", "date"];
const CSV_OPTIONAL_HEADERS: [&str; 7] = [
    "payment_reference",
    "reference",
    "status",
    "type",
    "product_name",
    "name",
    "metadata_type",
];

/// Raw feed text together with where it came from.
#[derive(Debug, Clone)]
pub struct FeedSource {
    pub label: String,
    pub content: String,
}

/// Reads a feed from `path`, or from stdin when `path` is `-` or absent.
pub fn read_source(path: Option<&str>, stdin_override: Option<String>) -> ClientResult<FeedSource> {
    match path {
        Some(value) if value != STDIN_SOURCE => {
            let content = fs::read_to_string(value)
                .map_err(|error| ClientError::feed_unreadable(value, &error.to_string()))?;
            Ok(FeedSource {
                label: value.to_string(),
                content,
            })
        }
        _ => {
            let Some(content) = read_stdin(stdin_override)? else {
                return Err(ClientError::feed_unreadable(
                    "stdin",
                    "no input was piped. Pass a file path or pipe a feed into stdin.",
                ));
            };
            Ok(FeedSource {
                label: "stdin".to_string(),
                content,
            })
        }
    }
}

pub fn load_transactions(source: &FeedSource) -> ClientResult<Vec<Transaction>> {
    let transactions = parse_feed(&source.content)?;
    debug!(
        source = %source.label,
        rows = transactions.len(),
        "loaded transaction feed"
    );
    for (index, transaction) in transactions.iter().enumerate() {
        report_suspect_fields(index, transaction);
    }
    Ok(transactions)
}

pub fn parse_feed(content: &str) -> ClientResult<Vec<Transaction>> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ClientError::feed_invalid("Transaction feed is empty.", "empty"));
    }

    if trimmed.starts_with('[') {
        return parse_json_array(trimmed);
    }

    if serde_json::from_str::<Value>(trimmed).is_ok() {
        return Err(ClientError::feed_invalid(
            "JSON feed must be a top-level array of transaction objects.",
            "json_non_array",
        ));
    }

    if looks_like_csv(trimmed) {
        return parse_csv(trimmed);
    }

    Err(ClientError::feed_invalid(
        "Unsupported feed format. Provide a JSON array or CSV with headers.",
        "unknown",
    ))
}

fn parse_json_array(content: &str) -> ClientResult<Vec<Transaction>> {
    let parsed = serde_json::from_str::<Vec<Value>>(content).map_err(|_| {
        ClientError::feed_invalid("Invalid JSON feed. Provide a valid JSON array.", "json")
    })?;

    let mut rows = Vec::with_capacity(parsed.len());
    for (index, item) in parsed.into_iter().enumerate() {
        if !item.is_object() {
            return Err(ClientError::feed_invalid(
                "JSON array entries must all be transaction objects.",
                "json_array",
            ));
        }
        let transaction = serde_json::from_value::<Transaction>(item).map_err(|error| {
            ClientError::feed_invalid(
                &format!("Transaction {} is malformed: {error}", index + 1),
                "json_array",
            )
            .with_data(serde_json::json!({
                "received_format": "json_array",
                "row": index + 1,
            }))
        })?;
        rows.push(transaction);
    }

    Ok(rows)
}

fn parse_csv(content: &str) -> ClientResult<Vec<Transaction>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| ClientError::feed_invalid("CSV header row is missing or unreadable.", "csv"))?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    if !headers_are_valid(&headers) {
        return Err(ClientError::feed_invalid(
            "CSV headers do not match the feed fields.",
            "csv",
        )
        .with_data(serde_json::json!({
            "received_format": "csv",
            "required_headers": CSV_REQUIRED_HEADERS,
            "optional_headers": CSV_OPTIONAL_HEADERS,
            "actual_headers": headers,
        })));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>();

    let mut rows = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let record = result_row.map_err(|_| {
            ClientError::feed_invalid("CSV rows are malformed or not UTF-8.", "csv")
        })?;
        let row_number = row_index + 1;

        let raw_amount = value_for(&record, &index_by_name, "amount").unwrap_or_default();
        let amount = Decimal::from_str(raw_amount.trim()).map_err(|_| {
            ClientError::feed_invalid(
                &format!("CSV row {row_number} has a non-numeric amount `{raw_amount}`."),
                "csv",
            )
        })?;

        let kind = match value_for(&record, &index_by_name, "type").as_deref() {
            None | Some("") | Some("payment") => TransactionKind::Payment,
            Some("withdrawal") => TransactionKind::Withdrawal,
            Some(other) => {
                return Err(ClientError::feed_invalid(
                    &format!("CSV row {row_number} has unsupported type `{other}`."),
                    "csv",
                ));
            }
        };

        let metadata = Metadata {
            product_name: value_for(&record, &index_by_name, "product_name"),
            name: value_for(&record, &index_by_name, "name"),
            kind: value_for(&record, &index_by_name, "metadata_type"),
        };

        rows.push(Transaction {
            reference: value_for(&record, &index_by_name, "payment_reference")
                .or_else(|| value_for(&record, &index_by_name, "reference")),
            amount,
            date: value_for(&record, &index_by_name, "date").unwrap_or_default(),
            status: TransactionStatus::from(value_for(&record, &index_by_name, "status")),
            kind,
            metadata: (metadata != Metadata::default()).then_some(metadata),
        });
    }

    Ok(rows)
}

/// Empty cells read as absent.
fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn headers_are_valid(actual_headers: &[String]) -> bool {
    let has_required = CSV_REQUIRED_HEADERS
        .iter()
        .all(|required| actual_headers.iter().any(|header| header == required));
    let all_known = actual_headers.iter().all(|header| {
        CSV_REQUIRED_HEADERS.contains(&header.as_str())
            || CSV_OPTIONAL_HEADERS.contains(&header.as_str())
    });
    has_required && all_known
}

fn looks_like_csv(content: &str) -> bool {
    let Some(first_line) = content.lines().find(|line| !line.trim().is_empty()) else {
        return false;
    };
    first_line.contains(',')
}

fn report_suspect_fields(index: usize, transaction: &Transaction) {
    if parse_instant(&transaction.date, &Utc).is_none() {
        warn!(
            row = index + 1,
            date = %transaction.date,
            "transaction date is unparseable; it will never match a date filter"
        );
    }
    if let TransactionStatus::Unrecognized(value) = &transaction.status {
        warn!(
            row = index + 1,
            status = %value,
            "transaction status is unrecognized; it will never match a status filter"
        );
    }
}

fn read_stdin(stdin_override: Option<String>) -> ClientResult<Option<String>> {
    if let Some(value) = stdin_override {
        return Ok(Some(value).filter(|body| !body.trim().is_empty()));
    }

    if std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|error| ClientError::feed_unreadable("stdin", &error.to_string()))?;

    if buffer.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(buffer))
}
