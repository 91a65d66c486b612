use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};

use crate::filter::date::{DateInterval, months_before};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRangePreset {
    Today,
    Last7Days,
    ThisMonth,
    Last3Months,
}

impl DateRangePreset {
    pub const ALL: [DateRangePreset; 4] = [
        Self::Today,
        Self::Last7Days,
        Self::ThisMonth,
        Self::Last3Months,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Last7Days => "Last 7 days",
            Self::ThisMonth => "This month",
            Self::Last3Months => "Last 3 months",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Last7Days => "last-7-days",
            Self::ThisMonth => "this-month",
            Self::Last3Months => "last-3-months",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let wanted = value.trim();
        Self::ALL.into_iter().find(|preset| {
            preset.slug().eq_ignore_ascii_case(wanted) || preset.label().eq_ignore_ascii_case(wanted)
        })
    }

    /// Range covered by this preset when today is `today`. Always inclusive
    /// of `today`.
    pub fn resolve_on(self, today: NaiveDate) -> DateInterval {
        let start = match self {
            Self::Today => today,
            Self::Last7Days => today.checked_sub_days(Days::new(6)).unwrap_or(NaiveDate::MIN),
            Self::ThisMonth => today.with_day(1).unwrap_or(today),
            Self::Last3Months => months_before(today, 3),
        };
        DateInterval::from_dates(start, today)
    }
}

impl fmt::Display for DateRangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DateRangePreset {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            "preset must be one of: today, last-7-days, this-month, last-3-months".to_string()
        })
    }
}

/// Resolves `preset` against the calendar day of `now` in its own zone.
pub fn resolve<Tz: TimeZone>(preset: DateRangePreset, now: &DateTime<Tz>) -> DateInterval {
    preset.resolve_on(now.date_naive())
}
