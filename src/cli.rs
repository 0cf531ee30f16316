//! CLI interface for ccchart
//!
//! # Example
//!
//! ```bash
//! # Chart a saved report, opening on its most recent month
//! ccchart usage.json
//!
//! # Pipe a report in and restrict it to January 2024
//! ccusage daily --json | ccchart --since 2024-01-01 --until 2024-01-31
//!
//! # Let ccchart run ccusage itself and print JSON
//! ccchart --ccusage session --json
//! ```

use crate::data_loader::{CcusageCommand, CcusageReport, FileSource, ReportSource, StdinSource};
use ccchart_core::error::{CcchartError, Result};
use chrono::{Months, NaiveDate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Chart cost trends from ccusage JSON reports
#[derive(Parser, Debug, Clone)]
#[command(name = "ccchart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Report file to chart ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Run `ccusage <REPORT> --json` instead of reading a report
    #[arg(long, value_enum, value_name = "REPORT", conflicts_with = "input")]
    pub ccusage: Option<CcusageReport>,

    /// ccusage executable to run
    #[arg(long, env = "CCUSAGE_BIN", default_value = "ccusage")]
    pub ccusage_bin: String,

    /// Seconds to wait for ccusage before giving up
    #[arg(long, env = "CCCHART_COMMAND_TIMEOUT", default_value = "60")]
    pub command_timeout: u64,

    /// First day to chart (YYYY-MM-DD or YYYY-MM)
    #[arg(long)]
    pub since: Option<String>,

    /// Last day to chart (YYYY-MM-DD or YYYY-MM)
    #[arg(long)]
    pub until: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Timezone in which calendar days start (e.g. "America/New_York", "Asia/Tokyo")
    /// Defaults to UTC
    #[arg(long, short = 'z', env = "CCCHART_TIMEZONE")]
    pub timezone: Option<String>,

    /// Use the system's local timezone for day boundaries
    #[arg(long)]
    pub local: bool,

    /// Width of the trend bars (defaults to fit the terminal)
    #[arg(long)]
    pub width: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Only show errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Source the report should be read from
    pub fn report_source(&self) -> Box<dyn ReportSource> {
        if let Some(report) = self.ccusage {
            return Box::new(
                CcusageCommand::new(&self.ccusage_bin, report)
                    .with_timeout(Duration::from_secs(self.command_timeout)),
            );
        }

        match &self.input {
            Some(path) if path.as_os_str() != "-" => Box::new(FileSource::new(path)),
            _ => Box::new(StdinSource),
        }
    }

    /// Reject option values clap accepts but ccchart cannot use
    pub fn validate(&self) -> Result<()> {
        if self.width == Some(0) {
            return Err(CcchartError::InvalidArgument(
                "--width must be at least 1".to_string(),
            ));
        }
        if self.ccusage.is_some() && self.command_timeout == 0 {
            return Err(CcchartError::InvalidArgument(
                "--command-timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    /// Parsed `--since` / `--until` bounds
    pub fn bounds(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>)> {
        let since = self.since.as_deref().map(parse_date_filter).transpose()?;
        let until = self.until.as_deref().map(parse_until_filter).transpose()?;
        Ok((since, until))
    }
}

/// Parse a date filter argument
///
/// Accepts `YYYY-MM-DD`, or `YYYY-MM` for the first day of that month.
///
/// # Examples
///
/// ```
/// use ccchart::cli::parse_date_filter;
/// use chrono::Datelike;
///
/// let date = parse_date_filter("2024-01-15").unwrap();
/// assert_eq!(date.day(), 15);
///
/// let date = parse_date_filter("2024-01").unwrap();
/// assert_eq!(date.month(), 1);
/// assert_eq!(date.day(), 1);
/// ```
pub fn parse_date_filter(date_str: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return Ok(date);
    }

    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() == 2 {
        let year = parts[0]
            .parse::<i32>()
            .map_err(|_| CcchartError::InvalidDate(format!("Invalid year in '{date_str}'")))?;
        let month = parts[1]
            .parse::<u32>()
            .map_err(|_| CcchartError::InvalidDate(format!("Invalid month in '{date_str}'")))?;

        if !(1..=12).contains(&month) {
            return Err(CcchartError::InvalidDate(format!(
                "Month must be between 1-12, got {month}"
            )));
        }

        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| CcchartError::InvalidDate(format!("Invalid date: {date_str}")))
    } else {
        Err(CcchartError::InvalidDate(format!(
            "Invalid date format '{}', expected YYYY-MM-DD or YYYY-MM",
            date_str
        )))
    }
}

/// Parse an end-of-range argument
///
/// Like [`parse_date_filter`], except that `YYYY-MM` means the last day of
/// that month, so `--until 2024-02` includes all of February.
pub fn parse_until_filter(date_str: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return Ok(date);
    }

    parse_date_filter(date_str)?
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| CcchartError::InvalidDate(format!("Invalid date: {date_str}")))
}
