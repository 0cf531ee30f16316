//! Core domain types for ccchart
//!
//! These types describe the normalized side of the pipeline: calendar days,
//! the (day, cost) points a report is reduced to, the inclusive range used
//! to filter it, and the statistics derived from the result.

use crate::error::{CcchartError, Result};
use crate::shape::ShapeKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar date without time information
///
/// All filtering and grouping in ccchart happens at day granularity; this
/// wrapper keeps that explicit in signatures.
///
/// # Examples
/// ```
/// use ccchart_core::types::DailyDate;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let daily = DailyDate::new(date);
///
/// assert_eq!(daily.format("%Y-%m-%d"), "2024-01-15");
/// assert_eq!(daily.format("%B %d, %Y"), "January 15, 2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DailyDate(NaiveDate);

impl DailyDate {
    /// Create a new DailyDate
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the inner NaiveDate
    pub fn inner(&self) -> &NaiveDate {
        &self.0
    }

    /// Format with a chrono format string
    pub fn format(&self, fmt: &str) -> String {
        self.0.format(fmt).to_string()
    }
}

impl From<NaiveDate> for DailyDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DailyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A single point of a cost series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedCost {
    /// Day the cost belongs to
    pub date: DailyDate,
    /// Cost in USD, never negative
    #[serde(rename = "totalCost")]
    pub cost: f64,
}

impl DatedCost {
    /// Create a point, clamping negative or non-finite costs to zero
    pub fn new(date: impl Into<DailyDate>, cost: f64) -> Self {
        let cost = if cost.is_finite() && cost > 0.0 { cost } else { 0.0 };
        Self {
            date: date.into(),
            cost,
        }
    }
}

/// Normalized cost series
///
/// The uniform representation every report shape is reduced to before it is
/// charted or summarized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<DatedCost>);

impl Series {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Points in series order
    pub fn points(&self) -> &[DatedCost] {
        &self.0
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over points
    pub fn iter(&self) -> std::slice::Iter<'_, DatedCost> {
        self.0.iter()
    }

    /// Largest single cost, or 0 for an empty series
    pub fn max_cost(&self) -> f64 {
        self.0.iter().map(|p| p.cost).fold(0.0, f64::max)
    }
}

impl From<Vec<DatedCost>> for Series {
    fn from(points: Vec<DatedCost>) -> Self {
        Self(points)
    }
}

impl FromIterator<DatedCost> for Series {
    fn from_iter<I: IntoIterator<Item = DatedCost>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DatedCost;
    type IntoIter = std::slice::Iter<'a, DatedCost>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Inclusive range of calendar days
///
/// Constructing a range is where `start <= end` is checked; filtering code
/// can then rely on it.
///
/// # Examples
/// ```
/// use ccchart_core::types::DateRange;
/// use chrono::NaiveDate;
///
/// let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let feb = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
///
/// let range = DateRange::new(jan, feb).unwrap();
/// assert!(range.contains(&jan));
/// assert!(range.contains(&feb));
///
/// assert!(DateRange::new(feb, jan).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(CcchartError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range covering exactly one day
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// First day of the range
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check whether a day falls within the range (both ends inclusive)
    pub fn contains(&self, day: &NaiveDate) -> bool {
        self.start <= *day && *day <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Summary statistics over a series
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Sum of all costs in USD
    pub total: f64,
    /// Mean cost per point, 0 for an empty series
    pub average: f64,
    /// Number of points the average was taken over
    pub points: usize,
}

/// Everything a presentation layer needs to draw one chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    /// Layout of the source report
    pub shape: ShapeKind,
    /// Range the report was filtered to, if any
    pub range: Option<DateRange>,
    /// Normalized points of the filtered report
    pub series: Series,
    /// Statistics over `series`
    pub stats: SummaryStats,
}
