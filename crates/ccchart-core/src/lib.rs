//! Core report pipeline for ccchart
//!
//! This crate classifies `ccusage` cost reports by layout, extracts their
//! dates, filters them to an inclusive day range without changing their
//! layout, normalizes them into a per-day cost series and summarizes that
//! series. None of these steps perform I/O or fail on malformed records.
//!
//! # Examples
//!
//! ```
//! use ccchart_core::{aggregation::summarize, shape::classify, timezone::TimezoneConfig};
//! use serde_json::json;
//!
//! let report = json!({"daily": [
//!     {"date": "2024-01-01", "totalCost": 1.25},
//!     {"date": "2024-01-02", "totalCost": 2.75},
//! ]});
//! let tz = TimezoneConfig::default().tz;
//!
//! let shape = classify(&report);
//! let range = shape.default_range(&tz).unwrap();
//! let filtered = shape.filter_by_range(&range, &tz);
//! let series = classify(&filtered).normalize(&tz);
//! let stats = summarize(&series);
//!
//! assert_eq!(stats.total, 4.0);
//! assert_eq!(stats.average, 2.0);
//! ```

pub mod aggregation;
pub mod dates;
pub mod error;
pub mod filters;
pub mod normalize;
pub mod shape;
pub mod timezone;
pub mod types;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use aggregation::summarize;
pub use error::{CcchartError, Result};
pub use shape::{ReportShape, ShapeKind, classify};
pub use types::{ChartView, DailyDate, DateRange, DatedCost, Series, SummaryStats};
