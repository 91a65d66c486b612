use tracing::debug;

use crate::ClientResult;
use crate::commands::common::load_config;
use crate::config::ClientConfig;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{WalletCardRow, WalletData};
use crate::feed::read_source;
use crate::wallet::Wallet;

const COMMAND: &str = "wallet";

#[derive(Debug, Default)]
pub struct WalletRunOptions {
    pub path: Option<String>,
    pub stdin_override: Option<String>,
    pub config_override: Option<ClientConfig>,
}

pub fn run(path: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(WalletRunOptions {
        path: path.map(std::string::ToString::to_string),
        ..WalletRunOptions::default()
    })
}

#[doc(hidden)]
pub fn run_with_options(options: WalletRunOptions) -> ClientResult<SuccessEnvelope> {
    let config = load_config(options.config_override)?;
    let source = read_source(options.path.as_deref(), options.stdin_override)?;
    let wallet = Wallet::from_json(&source.content, &source.label)?;
    debug!(source = %source.label, "loaded wallet summary");

    let data = WalletData {
        source: source.label.clone(),
        available_balance: wallet.available_balance(&config.currency),
        cards: wallet
            .cards(&config.currency)
            .into_iter()
            .map(|card| WalletCardRow {
                label: card.label,
                value: card.value,
            })
            .collect(),
    };

    success(COMMAND, data)
}

#[cfg(test)]
mod tests {
    use super::{WalletRunOptions, run_with_options};
    use crate::config::resolve_config_from;

    #[test]
    fn renders_wallet_cards_with_configured_currency() {
        let config = resolve_config_from(Some("NGN"), Some("utc"));
        assert!(config.is_ok());
        if let Ok(value) = config {
            let result = run_with_options(WalletRunOptions {
                path: Some("-".to_string()),
                stdin_override: Some(r#"{"balance": 120500.5, "pending_payout": 0}"#.to_string()),
                config_override: Some(value),
            });
            assert!(result.is_ok());
            if let Ok(envelope) = result {
                assert_eq!(envelope.data["available_balance"], "NGN 120,500.50");
                assert_eq!(envelope.data["cards"][3]["label"], "Pending Payout");
                assert_eq!(envelope.data["cards"][3]["value"], "NGN 0");
            }
        }
    }
}
