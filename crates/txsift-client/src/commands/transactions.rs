use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::commands::common::{filter_in_zone, interval_data, load_config, resolve_today};
use crate::config::ClientConfig;
use crate::contracts::envelope::{EnvelopeWarning, SuccessEnvelope, success_with_warnings};
use crate::contracts::types::{TransactionRow, TransactionsData};
use crate::display;
use crate::feed::{load_transactions, read_source};
use crate::filter::date::{end_of_day, parse_instant, parse_iso_date, start_of_day};
use crate::filter::spec::is_selectable;
use crate::filter::{
    DateRangePreset, FilterSpecification, Status, StatusFlags, Transaction, TransactionStatus,
    build_apply,
};
use crate::{ClientError, ClientResult};

const COMMAND: &str = "transactions";

#[derive(Debug, Default)]
pub struct TransactionsRunOptions {
    pub path: Option<String>,
    pub preset: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub statuses: Vec<String>,
    pub today: Option<String>,
    pub stdin_override: Option<String>,
    pub config_override: Option<ClientConfig>,
}

pub fn run(
    path: Option<&str>,
    preset: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    statuses: &[String],
) -> ClientResult<SuccessEnvelope> {
    run_with_options(TransactionsRunOptions {
        path: path.map(std::string::ToString::to_string),
        preset: preset.map(std::string::ToString::to_string),
        from: from.map(std::string::ToString::to_string),
        to: to.map(std::string::ToString::to_string),
        statuses: statuses.to_vec(),
        ..TransactionsRunOptions::default()
    })
}

#[doc(hidden)]
pub fn run_with_options(options: TransactionsRunOptions) -> ClientResult<SuccessEnvelope> {
    let config = load_config(options.config_override)?;
    let today = resolve_today(options.today.as_deref(), &config.zone, COMMAND)?;

    let preset = match options.preset.as_deref() {
        Some(value) => Some(
            DateRangePreset::parse(value)
                .ok_or_else(|| ClientError::unknown_preset(value, COMMAND))?,
        ),
        None => None,
    };
    let (start, end) = resolve_bounds(preset, options.from.as_deref(), options.to.as_deref(), today)?;
    let flags = parse_status_flags(&options.statuses)?;
    let spec = build_apply(start.map(start_of_day), end.map(end_of_day), &flags);
    debug!(
        preset = preset.map(DateRangePreset::slug),
        has_interval = spec.interval.is_some(),
        statuses = spec.statuses.len(),
        "built filter specification"
    );

    let source = read_source(options.path.as_deref(), options.stdin_override)?;
    let transactions = load_transactions(&source)?;
    let outcome = filter_in_zone(&config.zone, &transactions, &spec);

    let rows = outcome
        .rows
        .iter()
        .enumerate()
        .map(|(index, transaction)| transaction_row(transaction, index, &config.currency))
        .collect::<Vec<TransactionRow>>();

    let data = TransactionsData {
        source: source.label.clone(),
        heading: display::heading(outcome.count()),
        subtitle: display::subtitle(&spec).to_string(),
        count: outcome.count(),
        total: outcome.total,
        is_filtered: outcome.is_filtered,
        badge_count: outcome.badge_count(),
        empty_state: outcome
            .empty_state()
            .map(|state| state.as_str().to_string()),
        preset: preset.map(|value| value.slug().to_string()),
        interval: spec.interval.as_ref().map(interval_data),
        statuses: spec
            .statuses
            .iter()
            .map(|status| status.as_str().to_string())
            .collect(),
        status_selection: flags.selection_text(),
        time_zone: config.zone.describe(),
        rows,
    };

    success_with_warnings(COMMAND, data, feed_warnings(&transactions, &spec))
}

/// Preset bounds first, explicit dates override them. Once any explicit
/// date is given both bounds must end up present.
fn resolve_bounds(
    preset: Option<DateRangePreset>,
    from: Option<&str>,
    to: Option<&str>,
    today: NaiveDate,
) -> ClientResult<(Option<NaiveDate>, Option<NaiveDate>)> {
    let (mut start, mut end) = match preset {
        Some(value) => {
            let interval = value.resolve_on(today);
            (Some(interval.start_date()), Some(interval.end_date()))
        }
        None => (None, None),
    };

    if let Some(value) = from {
        start = Some(parse_selectable_date(value, "from", today)?);
    }
    if let Some(value) = to {
        end = Some(parse_selectable_date(value, "to", today)?);
    }

    if start.is_some() != end.is_some() {
        return Err(ClientError::invalid_argument_for_command(
            "A date range needs both `--from` and `--to` (or a `--preset` to fill the other bound).",
            Some(COMMAND),
        ));
    }

    Ok((start, end))
}

fn parse_selectable_date(value: &str, field_name: &str, today: NaiveDate) -> ClientResult<NaiveDate> {
    let date = parse_iso_date(value, field_name, COMMAND)?;
    if !is_selectable(date, today) {
        return Err(ClientError::invalid_argument_for_command(
            &format!("`{field_name}` cannot be after today ({today})."),
            Some(COMMAND),
        ));
    }
    Ok(date)
}

fn parse_status_flags(values: &[String]) -> ClientResult<StatusFlags> {
    let mut flags = StatusFlags::default();
    for value in values {
        let status =
            Status::parse(value).ok_or_else(|| ClientError::unknown_status(value, COMMAND))?;
        flags.set(status, true);
    }
    Ok(flags)
}

fn transaction_row(transaction: &Transaction, index: usize, currency: &str) -> TransactionRow {
    TransactionRow {
        key: display::row_key(transaction, index),
        reference: transaction.reference.clone(),
        title: display::title(transaction),
        status_line: display::status_line(transaction),
        recipient: display::recipient(transaction),
        status: transaction.status.as_str().to_string(),
        kind: transaction.kind.as_str().to_string(),
        amount: transaction.amount.to_string(),
        amount_display: display::amount(currency, &transaction.amount),
        date: transaction.date.clone(),
    }
}

/// Warns about rows the active filter can never include.
fn feed_warnings(transactions: &[Transaction], spec: &FilterSpecification) -> Vec<EnvelopeWarning> {
    let mut warnings = Vec::new();

    if spec.interval.is_some() {
        let undated = transactions
            .iter()
            .filter(|transaction| parse_instant(&transaction.date, &Utc).is_none())
            .count();
        if undated > 0 {
            warnings.push(EnvelopeWarning::new(
                "unparseable_dates_excluded",
                &format!("{undated} transaction(s) have unparseable dates and were excluded by the date range."),
            ));
        }
    }

    if !spec.statuses.is_empty() {
        let outside = transactions
            .iter()
            .filter(|transaction| !matches!(transaction.status, TransactionStatus::Known(_)))
            .count();
        if outside > 0 {
            warnings.push(EnvelopeWarning::new(
                "unfilterable_statuses_excluded",
                &format!("{outside} transaction(s) have a completed or unrecognized status and were excluded by the status filter."),
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{parse_status_flags, resolve_bounds};
    use crate::filter::{DateRangePreset, Status};

    fn today() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 10, 23)
    }

    #[test]
    fn explicit_dates_override_preset_bounds() {
        assert!(today().is_some());
        if let Some(value) = today() {
            let bounds =
                resolve_bounds(Some(DateRangePreset::ThisMonth), Some("2025-10-10"), None, value);
            assert!(bounds.is_ok());
            if let Ok((start, end)) = bounds {
                assert_eq!(start, NaiveDate::from_ymd_opt(2025, 10, 10));
                assert_eq!(end, today());
            }
        }
    }

    #[test]
    fn lone_explicit_bound_is_rejected() {
        assert!(today().is_some());
        if let Some(value) = today() {
            let bounds = resolve_bounds(None, None, Some("2025-10-20"), value);
            assert!(bounds.is_err());
            if let Err(error) = bounds {
                assert_eq!(error.code, "invalid_argument");
            }
        }
    }

    #[test]
    fn future_explicit_dates_are_rejected() {
        assert!(today().is_some());
        if let Some(value) = today() {
            let bounds = resolve_bounds(None, Some("2025-10-20"), Some("2025-10-24"), value);
            assert!(bounds.is_err());
            if let Err(error) = bounds {
                assert!(error.message.contains("after today"));
            }
        }
    }

    #[test]
    fn no_dates_means_no_bounds() {
        assert!(today().is_some());
        if let Some(value) = today() {
            let bounds = resolve_bounds(None, None, None, value);
            assert!(matches!(bounds, Ok((None, None))));
        }
    }

    #[test]
    fn status_flags_reject_unknown_values() {
        let flags = parse_status_flags(&["pending".to_string(), "Failed".to_string()]);
        assert!(flags.is_ok());
        if let Ok(value) = flags {
            assert!(value.is_set(Status::Pending));
            assert!(value.is_set(Status::Failed));
            assert!(!value.is_set(Status::Successful));
        }

        let unknown = parse_status_flags(&["completed".to_string()]);
        assert!(unknown.is_err());
    }
}
