//! Report sources
//!
//! A report reaches ccchart as JSON text from a file, from stdin, or from
//! the stdout of `ccusage <report> --json`. Every source is parsed the same
//! way: the text must be JSON and its top level must be an object or an
//! array. Anything past that (which layout it is, whether its records are
//! complete) is left to the lenient pipeline in `ccchart-core`.
//!
//! # Examples
//!
//! ```no_run
//! use ccchart::data_loader::{FileSource, ReportSource};
//!
//! # async fn example() -> ccchart::Result<()> {
//! let report = FileSource::new("usage.json").load().await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use ccchart_core::error::{CcchartError, Result};
use clap::ValueEnum;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Default time allowed for `ccusage` to produce its report
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(60);

/// Parse report text into a JSON value
///
/// Rejects payloads whose top level is not an object or an array.
///
/// # Examples
/// ```
/// use ccchart::data_loader::parse_report;
///
/// assert!(parse_report(br#"{"daily": []}"#).is_ok());
/// assert!(parse_report(b"[]").is_ok());
/// assert!(parse_report(b"42").is_err());
/// assert!(parse_report(b"{oops").is_err());
/// ```
pub fn parse_report(bytes: &[u8]) -> Result<Value> {
    let value: Value = serde_json::from_slice(bytes)?;
    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        _ => Err(CcchartError::InvalidReport("Invalid JSON format".to_string())),
    }
}

/// Trait for anything a report can be read from
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Short description used in status messages
    fn describe(&self) -> String;

    /// Raw report bytes
    async fn read(&self) -> Result<Vec<u8>>;

    /// Read and parse the report
    async fn load(&self) -> Result<Value> {
        let bytes = self.read().await?;
        debug!("Read {} bytes from {}", bytes.len(), self.describe());
        let report = parse_report(&bytes)?;
        info!("Loaded report from {}", self.describe());
        Ok(report)
    }
}

/// Report stored in a file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ReportSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}

/// Report piped through standard input
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

#[async_trait]
impl ReportSource for StdinSource {
    fn describe(&self) -> String {
        "stdin".to_string()
    }

    async fn read(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        tokio::io::stdin().read_to_end(&mut bytes).await?;
        Ok(bytes)
    }
}

/// `ccusage` reports that ccchart can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CcusageReport {
    /// Per-day costs (`ccusage daily --json`)
    Daily,
    /// Per-session costs (`ccusage session --json`)
    Session,
}

impl CcusageReport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Session => "session",
        }
    }
}

/// Report produced by running the `ccusage` tool
#[derive(Debug, Clone)]
pub struct CcusageCommand {
    program: String,
    report: CcusageReport,
    timeout: Duration,
}

impl CcusageCommand {
    pub fn new(program: impl Into<String>, report: CcusageReport) -> Self {
        Self {
            program: program.into(),
            report,
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    /// Set how long to wait for the command before giving up
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ReportSource for CcusageCommand {
    fn describe(&self) -> String {
        format!("`{} {} --json`", self.program, self.report.as_str())
    }

    async fn read(&self) -> Result<Vec<u8>> {
        let mut command = tokio::process::Command::new(&self.program);
        command
            .arg(self.report.as_str())
            .arg("--json")
            .kill_on_drop(true);

        debug!("Running {}", self.describe());
        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| CcchartError::CommandTimeout(self.timeout))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CcchartError::Command(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}
