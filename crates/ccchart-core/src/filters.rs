//! Shape-preserving date range filtering
//!
//! Filtering returns a new report of the same layout holding only the
//! records whose day falls inside an inclusive [`DateRange`]. The source is
//! never modified, so callers can keep it around to reset a filter.
//!
//! Days are compared at calendar-day granularity in the configured
//! timezone: `2024-01-31T23:00:00Z` is inside a range ending on
//! `2024-01-31`. Kept records are copied unchanged, time-of-day included.
//!
//! # Examples
//!
//! ```
//! use ccchart_core::shape::{classify, ShapeKind};
//! use ccchart_core::types::DateRange;
//! use chrono::NaiveDate;
//! use chrono_tz::Tz;
//! use serde_json::json;
//!
//! let report = json!({"daily": {
//!     "2024-01-01": {"totalCost": 10},
//!     "2024-01-02": {"totalCost": 20},
//! }});
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!
//! let filtered = classify(&report).filter_by_range(&DateRange::single_day(day), &Tz::UTC);
//! assert_eq!(filtered, json!({"daily": {"2024-01-01": {"totalCost": 10}}}));
//! assert_eq!(classify(&filtered).kind(), ShapeKind::DailyMap);
//! ```

use crate::dates::{parse_day_str, record_day};
use crate::shape::ReportShape;
use crate::types::DateRange;
use chrono_tz::Tz;
use serde_json::{Map, Value, json};
use tracing::debug;

/// Range filter bound to a day-boundary timezone
#[derive(Debug, Clone, Copy)]
pub struct RangeFilter<'a> {
    range: &'a DateRange,
    tz: &'a Tz,
}

impl<'a> RangeFilter<'a> {
    /// Create a filter for `range`, taking days in `tz`
    pub fn new(range: &'a DateRange, tz: &'a Tz) -> Self {
        Self { range, tz }
    }

    /// Check if a record's `date` falls within the range
    ///
    /// Records without a parseable date never match.
    pub fn matches(&self, record: &Value) -> bool {
        record_day(record, self.tz).is_some_and(|day| self.range.contains(&day))
    }

    /// Check if a `daily` map key falls within the range
    pub fn matches_key(&self, key: &str) -> bool {
        parse_day_str(key, self.tz).is_some_and(|day| self.range.contains(&day))
    }

    /// Matching records, cloned, in source order
    pub fn retain(&self, records: &[Value]) -> Vec<Value> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }

    /// Matching `daily` entries, cloned
    pub fn retain_keys(&self, days: &Map<String, Value>) -> Map<String, Value> {
        days.iter()
            .filter(|(key, _)| self.matches_key(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl ReportShape<'_> {
    /// New report of the same layout holding only in-range entries
    ///
    /// - `List` → array of matching records
    /// - `DailyArray` → `{"daily": [...]}`
    /// - `DailyMap` → `{"daily": {...}}` with matching keys
    /// - `Sessions` → `{"sessions": [...]}`
    /// - `Unrecognized` → an unchanged copy
    ///
    /// Top-level fields other than `daily` / `sessions` are not carried over.
    pub fn filter_by_range(&self, range: &DateRange, tz: &Tz) -> Value {
        let filter = RangeFilter::new(range, tz);

        let filtered = match self {
            Self::List(records) => Value::Array(filter.retain(records)),
            Self::DailyArray(records) => json!({ "daily": filter.retain(records) }),
            Self::DailyMap(days) => json!({ "daily": filter.retain_keys(days) }),
            Self::Sessions(records) => json!({ "sessions": filter.retain(records) }),
            Self::Unrecognized(value) => (*value).clone(),
        };

        debug!("Filtered {} report to {}", self.kind(), range);
        filtered
    }
}
