//! ccchart - Chart cost trends from ccusage JSON reports
//!
//! This library provides functionality to:
//! - Load reports from files, stdin or a `ccusage` run
//! - Parse `--since` / `--until` bounds
//! - Keep a chart session that filters a report and re-charts it
//!
//! The report pipeline itself lives in `ccchart-core` and the formatters in
//! `ccchart-terminal`.
//!
//! # Examples
//!
//! ```no_run
//! use ccchart::{
//!     dashboard::ChartSession,
//!     data_loader::{FileSource, ReportSource},
//!     timezone::TimezoneConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> ccchart::Result<()> {
//!     let report = FileSource::new("usage.json").load().await?;
//!     let tz = TimezoneConfig::default().tz;
//!
//!     let mut session = ChartSession::new(&report, tz);
//!     let view = session.apply_default()?;
//!     println!("{} days, ${:.2}", view.stats.points, view.stats.total);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod dashboard;
pub mod data_loader;

// Re-export the core pipeline
pub use ccchart_core::{
    aggregation, dates, error, filters, normalize, shape, timezone, types,
};
pub use ccchart_core::{
    CcchartError, ChartView, DailyDate, DateRange, DatedCost, ReportShape, Result, Series,
    ShapeKind, SummaryStats, classify, summarize,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
