use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use crate::{ClientError, ClientResult};

/// An inclusive range of local wall-clock instants.
///
/// Construction never reorders or rejects the bounds: an inverted interval
/// simply matches nothing once the engine normalizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Full-day interval covering `start` through `end`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start_of_day(start),
            end: end_of_day(end),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn is_inverted(&self) -> bool {
        self.start_date() > self.end_date()
    }

    /// Widens both bounds to whole days: 00:00:00.000 and 23:59:59.999.
    pub fn normalized(&self) -> Self {
        Self::from_dates(self.start_date(), self.end_date())
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        let normalized = self.normalized();
        let probe = start_of_day(day);
        probe >= normalized.start && probe <= normalized.end
    }

    pub fn day_count(&self) -> i64 {
        (self.end_date() - self.start_date()).num_days() + 1
    }
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last_millisecond = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last_millisecond)
}

/// Reads a feed timestamp as an instant in `tz`.
///
/// RFC 3339 values keep their offset, offset-less date-times are wall-clock
/// time in `tz`, and bare dates are UTC midnight. Anything else is `None`.
pub fn parse_instant<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(tz));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    if looks_like_iso_date(trimmed) {
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()?;
        return Some(Utc.from_utc_datetime(&start_of_day(date)).with_timezone(tz));
    }

    None
}

/// Calendar day of a feed timestamp as seen from `tz`.
pub fn local_day<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<NaiveDate> {
    parse_instant(value, tz).map(|instant| instant.date_naive())
}

pub fn parse_iso_date(value: &str, field_name: &str, command: &str) -> ClientResult<NaiveDate> {
    looks_like_iso_date(value)
        .then(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
        .flatten()
        .ok_or_else(|| {
            ClientError::invalid_argument_for_command(
                &format!("`{field_name}` must be a real calendar date in YYYY-MM-DD form."),
                Some(command),
            )
        })
}

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Date picker label, e.g. `20 Oct 2025`.
pub fn format_picker_date(date: &NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Same day `months` earlier, clamped to the end of a shorter month.
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(NaiveDate::MIN)
}

/// `YYYY-MM-DD` with zero padding; chrono alone would accept `2025-1-5`.
pub(crate) fn looks_like_iso_date(value: &str) -> bool {
    value.len() == 10
        && value.char_indices().all(|(index, ch)| match index {
            4 | 7 => ch == '-',
            _ => ch.is_ascii_digit(),
        })
}
