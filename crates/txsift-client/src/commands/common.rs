use chrono::{Local, NaiveDate, Utc};

use crate::ClientResult;
use crate::config::{ClientConfig, ZoneSetting, resolve_config};
use crate::contracts::types::IntervalData;
use crate::filter::date::{format_iso_date, format_picker_date, parse_iso_date};
use crate::filter::{
    DateInterval, FilterOutcome, FilterSpecification, Transaction, filter_transactions,
};

pub(crate) fn load_config(config_override: Option<ClientConfig>) -> ClientResult<ClientConfig> {
    match config_override {
        Some(config) => Ok(config),
        None => resolve_config(),
    }
}

/// "Today" for a command: the `--today` override when given, else the
/// current day in the configured zone.
pub(crate) fn resolve_today(
    today_override: Option<&str>,
    zone: &ZoneSetting,
    command: &str,
) -> ClientResult<NaiveDate> {
    match today_override {
        Some(value) => parse_iso_date(value, "today", command),
        None => Ok(zone.today()),
    }
}

pub(crate) fn filter_in_zone<'a>(
    zone: &ZoneSetting,
    transactions: &'a [Transaction],
    spec: &FilterSpecification,
) -> FilterOutcome<'a> {
    match zone {
        ZoneSetting::Local => filter_transactions(transactions, spec, &Local),
        ZoneSetting::Utc => filter_transactions(transactions, spec, &Utc),
        ZoneSetting::Fixed(offset) => filter_transactions(transactions, spec, offset),
    }
}

pub(crate) fn interval_data(interval: &DateInterval) -> IntervalData {
    let from = interval.start_date();
    let to = interval.end_date();
    IntervalData {
        from: format_iso_date(&from),
        to: format_iso_date(&to),
        from_label: format_picker_date(&from),
        to_label: format_picker_date(&to),
        inverted: interval.is_inverted(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{interval_data, resolve_today};
    use crate::config::ZoneSetting;
    use crate::filter::DateInterval;

    #[test]
    fn today_override_must_be_a_real_date() {
        assert!(resolve_today(Some("2025-13-01"), &ZoneSetting::Utc, "preset").is_err());
        assert_eq!(
            resolve_today(Some("2025-10-23"), &ZoneSetting::Utc, "preset").ok(),
            NaiveDate::from_ymd_opt(2025, 10, 23)
        );
    }

    #[test]
    fn interval_data_reports_picker_labels() {
        let start = NaiveDate::from_ymd_opt(2025, 10, 23);
        let end = NaiveDate::from_ymd_opt(2025, 10, 20);
        assert!(start.is_some() && end.is_some());
        if let (Some(start), Some(end)) = (start, end) {
            let data = interval_data(&DateInterval::from_dates(start, end));
            assert_eq!(data.from, "2025-10-23");
            assert_eq!(data.to_label, "20 Oct 2025");
            assert!(data.inverted);
        }
    }
}
