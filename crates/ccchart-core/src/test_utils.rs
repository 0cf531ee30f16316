//! Shared test utilities for unit tests
//!
//! Integration tests in `tests/` cannot see this module (it is
//! `#[cfg(test)]`), so they keep their own fixtures in `tests/common/mod.rs`.

use once_cell::sync::Lazy;
use serde_json::{Value, json};
use std::env;
use std::sync::Mutex;

// Global mutex to serialize environment variable modifications in tests
pub static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// RAII guard for environment variable manipulation in tests
///
/// Restores every touched variable on drop, even if the test panics.
pub struct EnvVarGuard {
    vars: Vec<(String, Option<String>)>,
}

impl EnvVarGuard {
    /// Create a new environment variable guard
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Set an environment variable and save its original value for restoration
    pub fn set(&mut self, key: &str, value: &str) {
        let original = env::var(key).ok();
        self.vars.push((key.to_string(), original));
        // Note: env::set_var is unsafe in Rust 1.82+ due to thread-safety concerns
        unsafe {
            env::set_var(key, value);
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.vars.iter().rev() {
            unsafe {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }
    }
}

impl Default for EnvVarGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// A `{date, totalCost}` record
pub fn record(date: &str, cost: f64) -> Value {
    json!({ "date": date, "totalCost": cost })
}

/// One report of each recognized layout covering 2024-01-01..=2024-01-03
pub fn sample_reports() -> Vec<Value> {
    vec![
        json!([
            record("2024-01-01", 1.0),
            record("2024-01-02", 2.0),
            record("2024-01-03", 3.0),
        ]),
        json!({
            "daily": [
                record("2024-01-01", 1.0),
                record("2024-01-02", 2.0),
                record("2024-01-03", 3.0),
            ],
            "totals": { "totalCost": 6.0 }
        }),
        json!({
            "daily": {
                "2024-01-01": { "totalCost": 1.0 },
                "2024-01-02": { "totalCost": 2.0 },
                "2024-01-03": { "totalCost": 3.0 },
            }
        }),
        json!({
            "sessions": [
                record("2024-01-01T08:00:00Z", 0.5),
                record("2024-01-01T20:00:00Z", 0.5),
                record("2024-01-02T12:00:00Z", 2.0),
                record("2024-01-03T12:00:00Z", 3.0),
            ]
        }),
    ]
}
