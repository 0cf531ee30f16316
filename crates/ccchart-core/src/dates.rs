//! Date extraction and default bounds
//!
//! Turns the `date` fields (or `daily` keys) of a classified report into
//! calendar days, and derives the range a chart opens on: the most recent
//! month of data, or all of it when the report spans less than a month.

use crate::shape::ReportShape;
use crate::types::DateRange;
use chrono::{DateTime, Months, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde_json::Value;

/// Naive layouts accepted after RFC 3339 and plain dates
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Calendar day of a date string
///
/// Timestamps with an offset are moved into `tz` before the date is taken.
/// Plain dates and naive timestamps are used as written.
///
/// # Examples
/// ```
/// use ccchart_core::dates::parse_day_str;
/// use chrono::NaiveDate;
/// use chrono_tz::Tz;
///
/// let day = parse_day_str("2024-01-01T23:30:00-05:00", &Tz::UTC);
/// assert_eq!(day, NaiveDate::from_ymd_opt(2024, 1, 2));
///
/// let day = parse_day_str("2024-01-01", &Tz::UTC);
/// assert_eq!(day, NaiveDate::from_ymd_opt(2024, 1, 1));
///
/// assert_eq!(parse_day_str("yesterday", &Tz::UTC), None);
/// ```
pub fn parse_day_str(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).date_naive());
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// Calendar day of a JSON date value
///
/// Strings go through [`parse_day_str`]; integers are read as Unix epoch
/// milliseconds. Anything else has no day.
pub fn parse_day(value: &Value, tz: &Tz) -> Option<NaiveDate> {
    match value {
        Value::String(raw) => parse_day_str(raw, tz),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.with_timezone(tz).date_naive()),
        _ => None,
    }
}

/// Calendar day of a record's `date` field
pub(crate) fn record_day(record: &Value, tz: &Tz) -> Option<NaiveDate> {
    record.get("date").and_then(|date| parse_day(date, tz))
}

impl ReportShape<'_> {
    /// Every calendar day the report references
    ///
    /// Records without a usable `date` are skipped. The result is in source
    /// order and may contain duplicates.
    pub fn extract_dates(&self, tz: &Tz) -> Vec<NaiveDate> {
        match self {
            Self::List(records) | Self::DailyArray(records) | Self::Sessions(records) => records
                .iter()
                .filter_map(|record| record_day(record, tz))
                .collect(),
            Self::DailyMap(days) => days.keys().filter_map(|key| parse_day_str(key, tz)).collect(),
            Self::Unrecognized(_) => Vec::new(),
        }
    }

    /// Range the chart opens on, `None` when the report has no dates
    pub fn default_range(&self, tz: &Tz) -> Option<DateRange> {
        default_range(&self.extract_dates(tz))
    }
}

/// Default bounds for a set of dates
///
/// `end` is the latest date and `start` is one month before it, or the
/// earliest date when that is later.
///
/// # Examples
/// ```
/// use ccchart_core::dates::default_range;
/// use chrono::NaiveDate;
///
/// let dates = [
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
/// ];
/// let range = default_range(&dates).unwrap();
/// assert_eq!(range.start(), NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
/// assert_eq!(range.end(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
///
/// assert!(default_range(&[]).is_none());
/// ```
pub fn default_range(dates: &[NaiveDate]) -> Option<DateRange> {
    let earliest = *dates.iter().min()?;
    let latest = *dates.iter().max()?;

    let month_back = latest
        .checked_sub_months(Months::new(1))
        .unwrap_or(earliest);
    let start = earliest.max(month_back);

    DateRange::new(start, latest).ok()
}
