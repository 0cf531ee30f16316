//! Common test utilities and helpers for ccchart tests
//!
//! Report builders for each recognized layout, plus helpers for writing
//! reports to disk and comparing costs.

use chrono::NaiveDate;
use serde_json::{Map, Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

/// Builder for ccusage-style reports
///
/// Entries are collected as (date, cost) pairs and rendered into whichever
/// layout the test needs.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    entries: Vec<(String, Option<f64>)>,
}

impl ReportBuilder {
    /// Create an empty builder
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry dated `date` costing `cost`
    #[allow(dead_code)]
    pub fn with_entry(mut self, date: &str, cost: f64) -> Self {
        self.entries.push((date.to_string(), Some(cost)));
        self
    }

    /// Add an entry that has a date but no `totalCost`
    #[allow(dead_code)]
    pub fn with_costless_entry(mut self, date: &str) -> Self {
        self.entries.push((date.to_string(), None));
        self
    }

    /// Add one entry per day from `start` for `days` days
    #[allow(dead_code)]
    pub fn with_days(mut self, start: NaiveDate, days: u32, cost: impl Fn(u32) -> f64) -> Self {
        for (i, day) in start.iter_days().take(days as usize).enumerate() {
            let i = i as u32;
            self = self.with_entry(&day.format("%Y-%m-%d").to_string(), cost(i));
        }
        self
    }

    #[allow(dead_code)]
    fn records(&self) -> Vec<Value> {
        self.entries
            .iter()
            .map(|(date, cost)| match cost {
                Some(cost) => json!({ "date": date, "totalCost": cost }),
                None => json!({ "date": date }),
            })
            .collect()
    }

    /// Top-level array of records
    #[allow(dead_code)]
    pub fn list(&self) -> Value {
        Value::Array(self.records())
    }

    /// `{"daily": [...]}` with a `totals` block, as `ccusage daily --json` emits
    #[allow(dead_code)]
    pub fn daily_array(&self) -> Value {
        let total: f64 = self.entries.iter().filter_map(|(_, c)| *c).sum();
        json!({ "daily": self.records(), "totals": { "totalCost": total } })
    }

    /// `{"daily": {"YYYY-MM-DD": {...}}}`
    #[allow(dead_code)]
    pub fn daily_map(&self) -> Value {
        let days: Map<String, Value> = self
            .entries
            .iter()
            .map(|(date, cost)| {
                let record = match cost {
                    Some(cost) => json!({ "totalCost": cost }),
                    None => json!({}),
                };
                (date.clone(), record)
            })
            .collect();
        json!({ "daily": days })
    }

    /// `{"sessions": [...]}`
    #[allow(dead_code)]
    pub fn sessions(&self) -> Value {
        json!({ "sessions": self.records() })
    }

    /// The same entries in all four layouts
    #[allow(dead_code)]
    pub fn all_layouts(&self) -> Vec<Value> {
        vec![self.list(), self.daily_array(), self.daily_map(), self.sessions()]
    }
}

/// Shorthand for a calendar day
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Write `report` into a fresh temp directory, returning the directory and file path
#[allow(dead_code)]
pub async fn write_report(report: &Value) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    fs::write(&path, serde_json::to_vec_pretty(report).unwrap())
        .await
        .unwrap();
    (dir, path)
}

/// Path of a file under `tests/fixtures`
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Assert two costs are equal within `tolerance`
#[allow(dead_code)]
pub fn assert_approx_eq(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() <= tolerance,
        "Values not approximately equal: {a} vs {b} (tolerance: {tolerance})"
    );
}
