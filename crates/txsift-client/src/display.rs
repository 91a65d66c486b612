use rust_decimal::Decimal;

use crate::filter::{EmptyState, FilterSpecification};
use crate::filter::types::{Status, Transaction, TransactionKind};

const WITHDRAWAL_TITLE: &str = "Cash withdrawal";
const FALLBACK_TITLE: &str = "Payment";
const EMPTY_STATE_TITLE: &str = "No transactions found";

pub fn heading(count: usize) -> String {
    format!("{count} Transactions")
}

pub fn subtitle(spec: &FilterSpecification) -> &'static str {
    if spec.interval.is_some() {
        "Your transactions for the selected date range"
    } else {
        "Your transactions for the last 7 days"
    }
}

/// Headline and explanation for an empty feed.
pub fn empty_state_text(state: EmptyState) -> (&'static str, &'static str) {
    let detail = match state {
        EmptyState::NoTransactions => "You don't have any transactions yet.",
        EmptyState::NoMatches => {
            "No transactions match your current filters. Try changing or clearing them."
        }
    };
    (EMPTY_STATE_TITLE, detail)
}

pub fn title(transaction: &Transaction) -> String {
    if transaction.kind == TransactionKind::Withdrawal {
        return WITHDRAWAL_TITLE.to_string();
    }
    transaction
        .metadata
        .as_ref()
        .and_then(|metadata| {
            non_empty(metadata.product_name.as_deref()).or(non_empty(metadata.kind.as_deref()))
        })
        .unwrap_or(FALLBACK_TITLE)
        .to_string()
}

/// Counterparty name; withdrawals never show one.
pub fn recipient(transaction: &Transaction) -> String {
    if transaction.kind == TransactionKind::Withdrawal {
        return String::new();
    }
    transaction
        .metadata
        .as_ref()
        .and_then(|metadata| non_empty(metadata.name.as_deref()))
        .unwrap_or_default()
        .to_string()
}

/// Second line under the title: the status for pending and successful
/// rows, the recipient for everything else.
pub fn status_line(transaction: &Transaction) -> String {
    match transaction.status.known() {
        Some(status @ (Status::Pending | Status::Successful)) => status.label().to_string(),
        _ => recipient(transaction),
    }
}

pub fn amount(currency: &str, value: &Decimal) -> String {
    format!("{currency} {value}")
}

/// Stable row key: the reference when present, else the position.
pub fn row_key(transaction: &Transaction, index: usize) -> String {
    match non_empty(transaction.reference.as_deref()) {
        Some(reference) => reference.to_string(),
        None => index.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
