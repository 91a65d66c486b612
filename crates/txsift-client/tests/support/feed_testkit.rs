#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::{Builder, TempDir};
use txsift_client::commands::transactions::{self, TransactionsRunOptions};
use txsift_client::config::resolve_config_from;
use txsift_client::filter::Transaction;

pub fn temp_dir_in_tmp(prefix: &str) -> std::io::Result<TempDir> {
    Builder::new().prefix(prefix).tempdir_in("/tmp")
}

/// The four-row feed used across the scenario tests: three payments and a
/// withdrawal dated 2025-10-15 through 2025-10-25.
pub fn dashboard_feed() -> Vec<Value> {
    vec![
        json!({
            "payment_reference": "TXN001",
            "amount": "100.00",
            "date": "2025-10-20T10:00:00Z",
            "status": "successful",
            "type": "payment",
            "metadata": { "product_name": "Product A", "name": "John Doe" },
        }),
        json!({
            "payment_reference": "TXN002",
            "amount": "250.50",
            "date": "2025-10-22T14:30:00Z",
            "status": "pending",
            "type": "payment",
            "metadata": { "product_name": "Product B", "name": "Jane Smith" },
        }),
        json!({
            "payment_reference": "TXN003",
            "amount": "50.00",
            "date": "2025-10-15T09:15:00Z",
            "status": "failed",
            "type": "payment",
            "metadata": { "product_name": "Product C", "name": "Bob Johnson" },
        }),
        json!({
            "payment_reference": "TXN004",
            "amount": "75.00",
            "date": "2025-10-25T16:45:00Z",
            "status": "successful",
            "type": "withdrawal",
            "metadata": {},
        }),
    ]
}

pub fn dashboard_transactions() -> Vec<Transaction> {
    let parsed = serde_json::from_value::<Vec<Transaction>>(Value::Array(dashboard_feed()));
    assert!(parsed.is_ok());
    parsed.unwrap_or_default()
}

pub fn references(rows: &[&Transaction]) -> Vec<String> {
    rows.iter()
        .map(|row| row.reference.clone().unwrap_or_default())
        .collect()
}

pub fn write_fixture_json(base: &Path, name: &str, rows: &[Value]) -> std::io::Result<PathBuf> {
    let path = base.join(name);
    let body = serde_json::to_string_pretty(rows).map_err(std::io::Error::other)?;
    fs::write(&path, body)?;
    Ok(path)
}

/// Runs the transactions command over `rows` in UTC with a fixed today of
/// 2025-10-26 and returns the serialized envelope.
pub fn transactions_payload(rows: &[Value], options: TransactionsRunOptions) -> Value {
    let temp = temp_dir_in_tmp("txsift-feed-fixture");
    assert!(temp.is_ok());
    let config = resolve_config_from(Some("USD"), Some("utc"));
    assert!(config.is_ok());
    if let (Ok(dir), Ok(config)) = (temp, config) {
        let fixture = write_fixture_json(dir.path(), "transactions.json", rows);
        assert!(fixture.is_ok());
        if let Ok(path) = fixture {
            let result = transactions::run_with_options(TransactionsRunOptions {
                path: Some(path.display().to_string()),
                today: options.today.or(Some("2025-10-26".to_string())),
                config_override: Some(options.config_override.unwrap_or(config)),
                ..options
            });
            assert!(result.is_ok());
            if let Ok(success) = result {
                let payload = serde_json::to_value(success);
                assert!(payload.is_ok());
                if let Ok(value) = payload {
                    return value;
                }
            }
        }
    }
    Value::Null
}

pub fn row_references(payload: &Value) -> Vec<String> {
    payload["data"]["rows"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .iter()
        .filter_map(|row| row.get("reference").and_then(Value::as_str))
        .map(std::string::ToString::to_string)
        .collect()
}
