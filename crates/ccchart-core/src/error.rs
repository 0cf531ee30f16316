//! Error types for ccchart
//!
//! The report pipeline itself never fails: malformed records are skipped or
//! zeroed and unknown layouts degrade to an empty series. Errors only come
//! from the collaborators around it (reading input, running `ccusage`,
//! validating user-supplied bounds), and they all share this enum.
//!
//! # Example
//!
//! ```
//! use ccchart_core::error::{CcchartError, Result};
//!
//! fn example_function() -> Result<()> {
//!     // This will automatically convert io::Error to CcchartError
//!     let _file = std::fs::read_to_string("nonexistent.json")?;
//!     Ok(())
//! }
//! ```

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for ccchart operations
#[derive(Error, Debug)]
pub enum CcchartError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Invalid JSON file: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed JSON is not something a report can be built from
    #[error("{0}")]
    InvalidReport(String),

    /// Invalid date format
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Invalid timezone
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Range whose start falls after its end
    #[error("Start date must be before end date ({start} > {end})")]
    InvalidRange {
        /// Requested first day
        start: NaiveDate,
        /// Requested last day
        end: NaiveDate,
    },

    /// The report held nothing that could be charted
    #[error("No valid data found for charting")]
    NoChartableData,

    /// External reporting tool failed
    #[error("ccusage command failed: {0}")]
    Command(String),

    /// External reporting tool did not finish in time
    #[error("ccusage command timed out after {0:?}")]
    CommandTimeout(std::time::Duration),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in ccchart
///
/// # Example
///
/// ```
/// use ccchart_core::Result;
///
/// fn process_data() -> Result<String> {
///     Ok("Processed successfully".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, CcchartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CcchartError::NoChartableData;
        assert_eq!(error.to_string(), "No valid data found for charting");

        let error = CcchartError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Start date must be before end date (2024-02-01 > 2024-01-01)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ccchart_error: CcchartError = io_error.into();
        assert!(matches!(ccchart_error, CcchartError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let ccchart_error: CcchartError = json_error.into();
        assert!(matches!(ccchart_error, CcchartError::Json(_)));
        assert!(ccchart_error.to_string().starts_with("Invalid JSON file"));
    }
}
