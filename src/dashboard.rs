//! Chart session
//!
//! Holds a loaded report together with the range currently applied to it.
//! The report is classified once when the session is created; every filter
//! change re-filters that original report, so resetting never needs to
//! reload anything.
//!
//! The session is also where user-supplied bounds are validated: a start
//! date after the end date is rejected here, before any filtering happens,
//! and the session is left as it was.
//!
//! # Examples
//!
//! ```
//! use ccchart::dashboard::ChartSession;
//! use chrono::NaiveDate;
//! use chrono_tz::Tz;
//! use serde_json::json;
//!
//! let report = json!({"daily": {
//!     "2024-01-01": {"totalCost": 10},
//!     "2024-01-02": {"totalCost": 20},
//! }});
//! let mut session = ChartSession::new(&report, Tz::UTC);
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let view = session.apply_filter(day, day).unwrap();
//! assert_eq!(view.stats.total, 10.0);
//! ```

use ccchart_core::error::{CcchartError, Result};
use ccchart_core::{ChartView, DateRange, ReportShape, ShapeKind, classify, summarize};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde_json::Value;
use tracing::{debug, info, warn};

/// A report being charted and the filter currently applied to it
#[derive(Debug, Clone)]
pub struct ChartSession<'a> {
    report: &'a Value,
    source: ReportShape<'a>,
    filtered: Option<Value>,
    range: Option<DateRange>,
    tz: Tz,
}

impl<'a> ChartSession<'a> {
    /// Start a session over `report`, taking calendar days in `tz`
    pub fn new(report: &'a Value, tz: Tz) -> Self {
        let source = classify(report);
        if !source.is_recognized() {
            warn!("Report layout not recognized; nothing will be charted");
        }
        Self {
            report,
            source,
            filtered: None,
            range: None,
            tz,
        }
    }

    /// Layout of the loaded report
    pub fn shape(&self) -> ShapeKind {
        self.source.kind()
    }

    /// Range currently applied, `None` before any filter
    pub fn range(&self) -> Option<DateRange> {
        self.range
    }

    /// The report as currently filtered, or the original before any filter
    pub fn current(&self) -> &Value {
        self.filtered.as_ref().unwrap_or(self.report)
    }

    /// Range the chart opens on, `None` when the report has no dates
    pub fn default_range(&self) -> Option<DateRange> {
        self.source.default_range(&self.tz)
    }

    /// Fill missing bounds from the default range
    ///
    /// Returns `None` when a bound is missing and the report has no dates
    /// to derive it from. A filled-in bound never crosses the one that was
    /// given, so only two user-supplied bounds can come back reversed.
    pub fn bounds_with_defaults(
        &self,
        since: Option<NaiveDate>,
        until: Option<NaiveDate>,
    ) -> Option<(NaiveDate, NaiveDate)> {
        if let (Some(start), Some(end)) = (since, until) {
            return Some((start, end));
        }
        let defaults = self.default_range()?;
        Some(match (since, until) {
            (Some(start), _) => (start, defaults.end().max(start)),
            (_, Some(end)) => (defaults.start().min(end), end),
            (None, None) => (defaults.start(), defaults.end()),
        })
    }

    /// Validate user bounds and filter the report to them
    ///
    /// Fails with [`CcchartError::InvalidRange`] when `start > end`, leaving
    /// the session unchanged.
    pub fn apply_filter(&mut self, start: NaiveDate, end: NaiveDate) -> Result<ChartView> {
        let range = DateRange::new(start, end)?;
        self.apply_range(range)
    }

    /// Filter the original report to `range` and chart the result
    pub fn apply_range(&mut self, range: DateRange) -> Result<ChartView> {
        self.filtered = Some(self.source.filter_by_range(&range, &self.tz));
        self.range = Some(range);
        info!("Filter applied: {}", range);
        self.view()
    }

    /// Filter to the default range
    ///
    /// Fails with [`CcchartError::NoChartableData`] when the report has no
    /// usable dates; no filter is applied in that case.
    pub fn apply_default(&mut self) -> Result<ChartView> {
        let range = self.default_range().ok_or_else(|| {
            warn!("No dates found in {} report", self.shape());
            CcchartError::NoChartableData
        })?;
        self.apply_range(range)
    }

    /// Drop the current filter and return to the default range
    pub fn reset(&mut self) -> Result<ChartView> {
        self.filtered = None;
        self.range = None;
        debug!("Filter reset");
        self.apply_default()
    }

    /// Chart the report as currently filtered
    pub fn view(&self) -> Result<ChartView> {
        let series = match &self.filtered {
            Some(filtered) => classify(filtered).normalize(&self.tz),
            None => self.source.normalize(&self.tz),
        };

        if series.is_empty() {
            warn!("No chartable points in {} report", self.shape());
            return Err(CcchartError::NoChartableData);
        }

        let stats = summarize(&series);
        debug!(
            "Charting {} points, total ${:.2}",
            stats.points, stats.total
        );

        Ok(ChartView {
            shape: self.shape(),
            range: self.range,
            series,
            stats,
        })
    }
}
