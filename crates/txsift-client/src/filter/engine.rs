use chrono::{Local, TimeZone};
use serde::Serialize;
use tracing::debug;

use crate::filter::date::{DateInterval, local_day, start_of_day};
use crate::filter::spec::{FilterSpecification, StatusSet};
use crate::filter::types::Transaction;

/// Why a filtered feed came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    NoTransactions,
    NoMatches,
}

impl EmptyState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoTransactions => "no_transactions",
            Self::NoMatches => "no_matches",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterOutcome<'a> {
    pub rows: Vec<&'a Transaction>,
    pub total: usize,
    pub is_filtered: bool,
}

impl FilterOutcome<'_> {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Count shown on the filter button; absent while nothing is filtered.
    pub fn badge_count(&self) -> Option<usize> {
        self.is_filtered.then_some(self.rows.len())
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.rows.is_empty() {
            return None;
        }
        if self.total == 0 {
            Some(EmptyState::NoTransactions)
        } else {
            Some(EmptyState::NoMatches)
        }
    }
}

/// Filters in the process-local time zone.
pub fn apply<'a, I>(transactions: I, spec: &FilterSpecification) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    apply_in(transactions, spec, &Local)
}

/// Stable filter: keeps every transaction passing both the date gate and the
/// status gate, in input order. Day boundaries are taken in `tz`.
pub fn apply_in<'a, I, Tz>(transactions: I, spec: &FilterSpecification, tz: &Tz) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
    Tz: TimeZone,
{
    let interval = spec.interval.as_ref().map(DateInterval::normalized);
    transactions
        .into_iter()
        .filter(|transaction| passes_date_gate(transaction, interval.as_ref(), tz))
        .filter(|transaction| passes_status_gate(transaction, &spec.statuses))
        .collect()
}

pub fn filter_transactions<'a, Tz: TimeZone>(
    transactions: &'a [Transaction],
    spec: &FilterSpecification,
    tz: &Tz,
) -> FilterOutcome<'a> {
    let rows = apply_in(transactions, spec, tz);
    let outcome = FilterOutcome {
        rows,
        total: transactions.len(),
        is_filtered: spec.is_filtered(),
    };
    debug!(
        total = outcome.total,
        matched = outcome.count(),
        is_filtered = outcome.is_filtered,
        "applied transaction filter"
    );
    outcome
}

/// `interval` must already be normalized to whole days.
fn passes_date_gate<Tz: TimeZone>(
    transaction: &Transaction,
    interval: Option<&DateInterval>,
    tz: &Tz,
) -> bool {
    let Some(bounds) = interval else {
        return true;
    };
    let Some(day) = local_day(&transaction.date, tz) else {
        return false;
    };
    let probe = start_of_day(day);
    probe >= bounds.start && probe <= bounds.end
}

fn passes_status_gate(transaction: &Transaction, statuses: &StatusSet) -> bool {
    if statuses.is_empty() {
        return true;
    }
    transaction
        .status
        .known()
        .is_some_and(|status| statuses.contains(status))
}
