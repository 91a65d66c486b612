use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const FEED_HELP_COMMAND: &str = "txsift transactions --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `txsift {cmd} --help` for usage."),
            None => "Run `txsift --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn unknown_preset(received: &str, command: &str) -> Self {
        Self::invalid_argument_for_command(
            &format!(
                "Unknown date range preset `{received}`. Use one of: today, last-7-days, this-month, last-3-months."
            ),
            Some(command),
        )
        .with_data(json!({
            "command_hint": command,
            "received": received,
            "supported_presets": ["today", "last-7-days", "this-month", "last-3-months"],
        }))
    }

    pub fn unknown_status(received: &str, command: &str) -> Self {
        Self::invalid_argument_for_command(
            &format!("Unknown status `{received}`. Use one of: successful, failed, pending."),
            Some(command),
        )
        .with_data(json!({
            "command_hint": command,
            "received": received,
            "supported_statuses": ["successful", "failed", "pending"],
        }))
    }

    pub fn feed_unreadable(source: &str, detail: &str) -> Self {
        Self::new(
            "feed_unreadable",
            &format!("Could not read transaction feed `{source}`: {detail}"),
            vec![
                "Verify the path exists and is readable.".to_string(),
                "Or pipe the feed through stdin using `-` as the path.".to_string(),
            ],
        )
        .with_data(json!({
            "source": source,
            "help_command": FEED_HELP_COMMAND,
        }))
    }

    pub fn feed_invalid(message: &str, received_format: &str) -> Self {
        Self::new(
            "feed_invalid",
            message,
            vec![
                "Provide a JSON array of transaction objects or a CSV file with headers."
                    .to_string(),
                format!("Run `{FEED_HELP_COMMAND}` to review the feed fields."),
            ],
        )
        .with_data(json!({
            "received_format": received_format,
            "supported_formats": ["json_array", "csv"],
        }))
    }

    pub fn wallet_invalid(source: &str, detail: &str) -> Self {
        Self::new(
            "wallet_invalid",
            &format!("Wallet summary `{source}` is not a valid wallet object: {detail}"),
            vec![
                "Provide a JSON object with balance, ledger_balance, total_payout, total_revenue and pending_payout."
                    .to_string(),
            ],
        )
    }

    pub fn config_invalid(variable: &str, value: &str, expected: &str) -> Self {
        Self::new(
            "config_invalid",
            &format!("Environment variable `{variable}` has unsupported value `{value}`."),
            vec![format!("Set `{variable}` to {expected}, or unset it.")],
        )
        .with_data(json!({
            "variable": variable,
            "received": value,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
