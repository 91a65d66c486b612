use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::filter::date::DateInterval;
use crate::filter::types::Status;

const SELECTION_TEXT_LIMIT: usize = 50;
const EMPTY_SELECTION_TEXT: &str = "Select an option";

/// Accepted statuses. Empty means every status passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusSet(BTreeSet<Status>);

impl StatusSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, status: Status) -> bool {
        self.0.contains(&status)
    }

    pub fn iter(&self) -> impl Iterator<Item = Status> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Status> for StatusSet {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Checkbox state of the status picker, keyed by status identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFlags {
    pub successful: bool,
    pub failed: bool,
    pub pending: bool,
}

impl StatusFlags {
    pub fn is_set(&self, status: Status) -> bool {
        match status {
            Status::Successful => self.successful,
            Status::Failed => self.failed,
            Status::Pending => self.pending,
        }
    }

    pub fn set(&mut self, status: Status, selected: bool) {
        match status {
            Status::Successful => self.successful = selected,
            Status::Failed => self.failed = selected,
            Status::Pending => self.pending = selected,
        }
    }

    pub fn toggle(&mut self, status: Status) {
        let current = self.is_set(status);
        self.set(status, !current);
    }

    pub fn selected(&self) -> impl Iterator<Item = Status> + '_ {
        Status::ALL
            .into_iter()
            .filter(|status| self.is_set(*status))
    }

    pub fn to_status_set(&self) -> StatusSet {
        self.selected().collect()
    }

    /// Summary shown on the collapsed status picker.
    pub fn selection_text(&self) -> String {
        let selected = self
            .selected()
            .map(Status::label)
            .collect::<Vec<&str>>()
            .join(", ");

        if selected.is_empty() {
            return EMPTY_SELECTION_TEXT.to_string();
        }
        if selected.chars().count() > SELECTION_TEXT_LIMIT {
            let truncated = selected.chars().take(SELECTION_TEXT_LIMIT).collect::<String>();
            return format!("{truncated}...");
        }
        selected
    }
}

impl FromIterator<Status> for StatusFlags {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        let mut flags = Self::default();
        for status in iter {
            flags.set(status, true);
        }
        flags
    }
}

/// Active constraints on the transaction feed. Replaced wholesale on every
/// apply or clear; never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSpecification {
    pub interval: Option<DateInterval>,
    pub statuses: StatusSet,
}

impl FilterSpecification {
    pub fn new(interval: Option<DateInterval>, statuses: StatusSet) -> Self {
        Self { interval, statuses }
    }

    pub fn is_filtered(&self) -> bool {
        self.interval.is_some() || !self.statuses.is_empty()
    }
}

/// Builds the `FilterSpecification` committed by "Apply".
///
/// A half-set range carries no date constraint. Inverted bounds are kept
/// as given.
pub fn build_apply(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    flags: &StatusFlags,
) -> FilterSpecification {
    let interval = match (start, end) {
        (Some(start), Some(end)) => Some(DateInterval::new(start, end)),
        _ => None,
    };
    FilterSpecification::new(interval, flags.to_status_set())
}

/// Builds the `FilterSpecification` committed by "Clear".
pub fn build_clear() -> FilterSpecification {
    FilterSpecification::default()
}

/// Whether the date picker offers `date` when today is `today`.
pub fn is_selectable(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}
