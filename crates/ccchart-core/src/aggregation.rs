//! Summary statistics over a normalized series
//!
//! # Examples
//!
//! ```
//! use ccchart_core::aggregation::summarize;
//! use ccchart_core::types::{DatedCost, Series};
//! use chrono::NaiveDate;
//!
//! let series: Series = vec![
//!     DatedCost::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 10.0),
//!     DatedCost::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 20.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let stats = summarize(&series);
//! assert_eq!(stats.total, 30.0);
//! assert_eq!(stats.average, 15.0);
//! ```

use crate::types::{Series, SummaryStats};

/// Total and average cost of a series
///
/// The average is taken per point and is 0 for an empty series.
pub fn summarize(series: &Series) -> SummaryStats {
    SummaryStats::from_series(series)
}

impl SummaryStats {
    /// Compute totals from a series
    pub fn from_series(series: &Series) -> Self {
        let mut stats = Self::default();
        for point in series {
            stats.total += point.cost;
            stats.points += 1;
        }
        if stats.points > 0 {
            stats.average = stats.total / stats.points as f64;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DatedCost;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_summarize_empty() {
        let stats = summarize(&Series::new());
        assert_eq!(stats.total, 0.0);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.points, 0);
    }

    #[test]
    fn test_summarize_single_point() {
        let series: Series = vec![DatedCost::new(day(1), 10.0)].into();
        let stats = summarize(&series);
        assert_eq!(stats.total, 10.0);
        assert_eq!(stats.average, 10.0);
        assert_eq!(stats.points, 1);
    }

    #[test]
    fn test_summarize_counts_zero_cost_points() {
        let series: Series = vec![
            DatedCost::new(day(1), 9.0),
            DatedCost::new(day(2), 0.0),
            DatedCost::new(day(3), 0.0),
        ]
        .into();
        let stats = summarize(&series);
        assert_eq!(stats.total, 9.0);
        assert_eq!(stats.average, 3.0);
    }

    #[test]
    fn test_summarize_same_day_points_count_separately() {
        let series: Series = vec![DatedCost::new(day(1), 1.0), DatedCost::new(day(1), 3.0)].into();
        let stats = summarize(&series);
        assert_eq!(stats.total, 4.0);
        assert_eq!(stats.average, 2.0);
        assert_eq!(stats.points, 2);
    }
}
