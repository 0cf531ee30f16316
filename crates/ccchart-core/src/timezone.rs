//! Day-boundary timezone handling
//!
//! Reports mix bare dates (`2024-01-15`) with full timestamps
//! (`2024-01-15T23:30:00-05:00`). To bucket both into calendar days the
//! pipeline needs one timezone in which days begin and end. ccchart uses
//! UTC unless the user asks for another zone or for the system's local one.
//! Timestamps without an offset are taken as written.

use crate::error::{CcchartError, Result};
use chrono_tz::Tz;
use std::str::FromStr;
use tracing::debug;

/// Configuration for day-boundary timezone handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneConfig {
    /// The timezone in which calendar days are taken
    pub tz: Tz,
    /// Whether the timezone is UTC
    pub is_utc: bool,
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        Self::utc()
    }
}

impl TimezoneConfig {
    /// UTC day boundaries
    pub fn utc() -> Self {
        Self {
            tz: Tz::UTC,
            is_utc: true,
        }
    }

    /// Day boundaries in the given timezone
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            is_utc: tz == Tz::UTC,
        }
    }

    /// Resolve `--timezone` / `--local`
    ///
    /// An explicit timezone wins over `use_local`; with neither, UTC is used.
    pub fn from_cli(timezone: Option<&str>, use_local: bool) -> Result<Self> {
        match (timezone, use_local) {
            (Some(name), _) => Tz::from_str(name).map(Self::new).map_err(|_| {
                CcchartError::InvalidTimezone(format!(
                    "'{name}'. Use an IANA name such as 'Europe/Berlin' or 'UTC'"
                ))
            }),
            (None, true) => Ok(Self::new(get_local_timezone())),
            (None, false) => Ok(Self::utc()),
        }
    }

    /// Get the display name for the configured timezone
    pub fn display_name(&self) -> &str {
        if self.is_utc { "UTC" } else { self.tz.name() }
    }
}

/// Detect the system's local timezone
///
/// Looks at `TZ` first, then asks the platform. Falls back to UTC.
pub fn get_local_timezone() -> Tz {
    let from_env = std::env::var("TZ")
        .ok()
        .and_then(|name| Tz::from_str(&name).ok());
    if let Some(tz) = from_env {
        debug!("Day boundaries from TZ: {}", tz.name());
        return tz;
    }

    match iana_time_zone::get_timezone() {
        Ok(name) => Tz::from_str(&name).unwrap_or_else(|_| {
            debug!("Unknown system timezone '{}', using UTC", name);
            Tz::UTC
        }),
        Err(e) => {
            debug!("System timezone unavailable ({:?}), using UTC", e);
            Tz::UTC
        }
    }
}
