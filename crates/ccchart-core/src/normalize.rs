//! Series normalization
//!
//! Reduces any classified report to a [`Series`] of (day, cost) points.
//! Per-record problems never fail the conversion: a record without a `date`
//! or `totalCost` key is dropped, and a cost that is not a number counts as
//! zero.

use crate::dates::{parse_day_str, record_day};
use crate::shape::ReportShape;
use crate::types::{DatedCost, Series};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Cost of a JSON value, zero unless it is a number
fn cost_of(value: &Value) -> f64 {
    value.as_f64().unwrap_or(0.0)
}

/// Day and cost of a record carrying both keys
fn dated_record(record: &Value, tz: &Tz) -> Option<(NaiveDate, f64)> {
    let cost = record.get("totalCost")?;
    let day = record_day(record, tz)?;
    Some((day, cost_of(cost)))
}

impl ReportShape<'_> {
    /// Normalize the report into a cost series
    ///
    /// - `List` and `DailyArray` keep one point per record, in source order,
    ///   without merging records that share a day.
    /// - `DailyMap` yields one point per key in ascending day order; a
    ///   missing `totalCost` counts as zero.
    /// - `Sessions` are summed per calendar day, ascending.
    /// - `Unrecognized` is empty.
    ///
    /// # Examples
    /// ```
    /// use ccchart_core::shape::classify;
    /// use chrono_tz::Tz;
    /// use serde_json::json;
    ///
    /// let report = json!({"sessions": [
    ///     {"date": "2024-02-01T09:00:00Z", "totalCost": 5},
    ///     {"date": "2024-02-01T18:00:00Z", "totalCost": 7},
    /// ]});
    /// let series = classify(&report).normalize(&Tz::UTC);
    /// assert_eq!(series.len(), 1);
    /// assert_eq!(series.points()[0].cost, 12.0);
    /// ```
    pub fn normalize(&self, tz: &Tz) -> Series {
        let series: Series = match self {
            Self::List(records) | Self::DailyArray(records) => records
                .iter()
                .filter_map(|record| dated_record(record, tz))
                .map(|(day, cost)| DatedCost::new(day, cost))
                .collect(),
            Self::DailyMap(days) => normalize_daily_map(days, tz),
            Self::Sessions(sessions) => normalize_sessions(sessions, tz),
            Self::Unrecognized(_) => Series::new(),
        };

        let dropped = self.record_count().saturating_sub(series.len());
        if dropped > 0 && !matches!(self, Self::Sessions(_)) {
            debug!("Dropped {} {} records while normalizing", dropped, self.kind());
        }
        series
    }
}

fn normalize_daily_map(days: &serde_json::Map<String, Value>, tz: &Tz) -> Series {
    let mut entries: Vec<(NaiveDate, &String, f64)> = days
        .iter()
        .filter_map(|(key, day_record)| {
            let Some(day) = parse_day_str(key, tz) else {
                debug!("Skipping daily key that is not a date: {}", key);
                return None;
            };
            let cost = day_record.get("totalCost").map(cost_of).unwrap_or(0.0);
            Some((day, key, cost))
        })
        .collect();

    // keys with offsets can map to a day that sorts differently from the raw string
    entries.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    entries
        .into_iter()
        .map(|(day, _, cost)| DatedCost::new(day, cost))
        .collect()
}

fn normalize_sessions(sessions: &[Value], tz: &Tz) -> Series {
    let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for (day, cost) in sessions.iter().filter_map(|s| dated_record(s, tz)) {
        *per_day.entry(day).or_insert(0.0) += cost;
    }

    debug!(
        "Grouped {} sessions into {} days",
        sessions.len(),
        per_day.len()
    );

    per_day
        .into_iter()
        .map(|(day, cost)| DatedCost::new(day, cost))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::classify;
    use crate::test_utils::{record, sample_reports};
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn points(series: &Series) -> Vec<(NaiveDate, f64)> {
        series.iter().map(|p| (*p.date.inner(), p.cost)).collect()
    }

    #[test]
    fn test_normalize_every_layout_covers_same_days() {
        for report in sample_reports() {
            let series = classify(&report).normalize(&Tz::UTC);
            assert_eq!(
                points(&series),
                vec![
                    (day(2024, 1, 1), 1.0),
                    (day(2024, 1, 2), 2.0),
                    (day(2024, 1, 3), 3.0)
                ],
                "{report}"
            );
        }
    }

    #[test]
    fn test_normalize_list_drops_incomplete_records() {
        let report = json!([
            record("2024-01-01", 1.0),
            { "date": "2024-01-02" },
            { "totalCost": 5.0 },
            record("2024-01-03", 3.0),
        ]);
        let series = classify(&report).normalize(&Tz::UTC);
        assert_eq!(
            points(&series),
            vec![(day(2024, 1, 1), 1.0), (day(2024, 1, 3), 3.0)]
        );
    }

    #[test]
    fn test_normalize_list_keeps_same_day_records_apart() {
        let report = json!({
            "daily": [
                record("2024-01-02", 2.0),
                record("2024-01-01", 1.0),
                record("2024-01-02", 4.0),
            ]
        });
        let series = classify(&report).normalize(&Tz::UTC);
        assert_eq!(
            points(&series),
            vec![
                (day(2024, 1, 2), 2.0),
                (day(2024, 1, 1), 1.0),
                (day(2024, 1, 2), 4.0)
            ]
        );
    }

    #[test]
    fn test_normalize_non_numeric_cost_is_zero() {
        let report = json!([
            { "date": "2024-01-01", "totalCost": "12.50" },
            { "date": "2024-01-02", "totalCost": null },
            { "date": "2024-01-03", "totalCost": -4.0 },
        ]);
        let series = classify(&report).normalize(&Tz::UTC);
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|p| p.cost == 0.0));
    }

    #[test]
    fn test_normalize_daily_map_sorts_keys_and_defaults_cost() {
        let report = json!({
            "daily": {
                "2024-01-03": { "totalCost": 3 },
                "2024-01-01": { "inputTokens": 100 },
                "2024-01-02": { "totalCost": 2.5 },
            }
        });
        let series = classify(&report).normalize(&Tz::UTC);
        assert_eq!(
            points(&series),
            vec![
                (day(2024, 1, 1), 0.0),
                (day(2024, 1, 2), 2.5),
                (day(2024, 1, 3), 3.0)
            ]
        );
    }

    #[test]
    fn test_normalize_daily_map_skips_non_date_keys() {
        let report = json!({
            "daily": {
                "2024-01-01": { "totalCost": 1 },
                "total": { "totalCost": 1 },
            }
        });
        let series = classify(&report).normalize(&Tz::UTC);
        assert_eq!(points(&series), vec![(day(2024, 1, 1), 1.0)]);
    }

    #[test]
    fn test_normalize_daily_map_orders_by_day_not_key() {
        let report = json!({
            "daily": {
                "2024-01-01T23:00:00-05:00": { "totalCost": 2.0 },
                "2024-01-02T01:00:00+05:00": { "totalCost": 1.0 },
            }
        });

        // the first key falls on Jan 2 in UTC, the second on Jan 1
        let series = classify(&report).normalize(&Tz::UTC);
        assert_eq!(
            points(&series),
            vec![(day(2024, 1, 1), 1.0), (day(2024, 1, 2), 2.0)]
        );
    }

    #[test]
    fn test_normalize_sessions_sums_per_day() {
        let report = json!({
            "sessions": [
                record("2024-02-02T10:00:00Z", 1.0),
                record("2024-02-01T09:00:00Z", 5.0),
                record("2024-02-01T18:00:00Z", 7.0),
                { "date": "2024-02-03T10:00:00Z" },
            ]
        });
        let series = classify(&report).normalize(&Tz::UTC);
        assert_eq!(
            points(&series),
            vec![(day(2024, 2, 1), 12.0), (day(2024, 2, 2), 1.0)]
        );
    }

    #[test]
    fn test_normalize_sessions_groups_in_configured_timezone() {
        let report = json!({
            "sessions": [
                record("2024-02-01T22:00:00Z", 1.0),
                record("2024-02-02T02:00:00Z", 2.0),
            ]
        });

        let utc = classify(&report).normalize(&Tz::UTC);
        assert_eq!(
            points(&utc),
            vec![(day(2024, 2, 1), 1.0), (day(2024, 2, 2), 2.0)]
        );

        let new_york = classify(&report).normalize(&chrono_tz::America::New_York);
        assert_eq!(points(&new_york), vec![(day(2024, 2, 1), 3.0)]);
    }

    #[test]
    fn test_normalize_unrecognized_is_empty() {
        let report = json!({"weekly": [record("2024-01-01", 1.0)]});
        assert!(classify(&report).normalize(&Tz::UTC).is_empty());
    }
}
