use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{ClientError, ClientResult};

const BALANCE_FRACTION_DIGITS: u32 = 2;
const CARD_MAX_FRACTION_DIGITS: u32 = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default)]
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub ledger_balance: Option<Decimal>,
    #[serde(default)]
    pub total_payout: Option<Decimal>,
    #[serde(default)]
    pub total_revenue: Option<Decimal>,
    #[serde(default)]
    pub pending_payout: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletCard {
    pub label: String,
    pub value: String,
}

impl Wallet {
    pub fn from_json(content: &str, source: &str) -> ClientResult<Self> {
        serde_json::from_str::<Wallet>(content)
            .map_err(|error| ClientError::wallet_invalid(source, &error.to_string()))
    }

    /// Headline balance, always with two fraction digits.
    pub fn available_balance(&self, currency: &str) -> String {
        let value = self.balance.unwrap_or(Decimal::ZERO);
        format!(
            "{currency} {}",
            format_grouped(&value, BALANCE_FRACTION_DIGITS, BALANCE_FRACTION_DIGITS)
        )
    }

    pub fn cards(&self, currency: &str) -> Vec<WalletCard> {
        [
            ("Ledger Balance", self.ledger_balance),
            ("Total Payout", self.total_payout),
            ("Total Revenue", self.total_revenue),
            ("Pending Payout", self.pending_payout),
        ]
        .into_iter()
        .map(|(label, value)| WalletCard {
            label: label.to_string(),
            value: format!(
                "{currency} {}",
                format_grouped(&value.unwrap_or(Decimal::ZERO), 0, CARD_MAX_FRACTION_DIGITS)
            ),
        })
        .collect()
    }
}

/// en-US style grouping: comma thousands separators, half-away-from-zero
/// rounding to `max_fraction` digits, at least `min_fraction` digits kept.
pub fn format_grouped(value: &Decimal, min_fraction: u32, max_fraction: u32) -> String {
    let rounded =
        value.round_dp_with_strategy(max_fraction, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut fraction = fraction.trim_end_matches('0').to_string();
    while fraction.len() < min_fraction as usize {
        fraction.push('0');
    }

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}
