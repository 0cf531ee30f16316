//! Report shape detection
//!
//! `ccusage` and the tools around it emit cost reports in a handful of JSON
//! layouts. A report is classified once into a [`ReportShape`], and every
//! later step (date extraction, range filtering, normalization) matches on
//! that variant instead of probing fields again.
//!
//! | Layout | Example |
//! |---|---|
//! | [`ReportShape::List`] | `[{"date": "2024-01-01", "totalCost": 1.0}]` |
//! | [`ReportShape::DailyArray`] | `{"daily": [{"date": "2024-01-01", "totalCost": 1.0}]}` |
//! | [`ReportShape::DailyMap`] | `{"daily": {"2024-01-01": {"totalCost": 1.0}}}` |
//! | [`ReportShape::Sessions`] | `{"sessions": [{"date": "2024-01-01T09:00:00Z", "totalCost": 1.0}]}` |
//!
//! # Examples
//!
//! ```
//! use ccchart_core::shape::{classify, ShapeKind};
//! use serde_json::json;
//!
//! let report = json!({"daily": {"2024-01-01": {"totalCost": 10}}});
//! assert_eq!(classify(&report).kind(), ShapeKind::DailyMap);
//!
//! let report = json!({"something": "else"});
//! assert_eq!(classify(&report).kind(), ShapeKind::Unrecognized);
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

/// A classified report, borrowing the payload it was classified from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportShape<'a> {
    /// Top-level array of records
    List(&'a [Value]),
    /// `daily` field holding an array of records
    DailyArray(&'a [Value]),
    /// `daily` field holding a date-keyed object
    DailyMap(&'a Map<String, Value>),
    /// `sessions` field holding an array of records
    Sessions(&'a [Value]),
    /// Anything else; treated as an empty report downstream
    Unrecognized(&'a Value),
}

/// Name of a [`ReportShape`] variant without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    List,
    DailyArray,
    DailyMap,
    Sessions,
    Unrecognized,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::DailyArray => write!(f, "daily (array)"),
            Self::DailyMap => write!(f, "daily (map)"),
            Self::Sessions => write!(f, "sessions"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

impl ReportShape<'_> {
    /// The variant's name
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::List(_) => ShapeKind::List,
            Self::DailyArray(_) => ShapeKind::DailyArray,
            Self::DailyMap(_) => ShapeKind::DailyMap,
            Self::Sessions(_) => ShapeKind::Sessions,
            Self::Unrecognized(_) => ShapeKind::Unrecognized,
        }
    }

    /// Whether the report matched one of the known layouts
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Number of raw records (or date keys) the report holds
    pub fn record_count(&self) -> usize {
        match self {
            Self::List(records) | Self::DailyArray(records) | Self::Sessions(records) => {
                records.len()
            }
            Self::DailyMap(days) => days.len(),
            Self::Unrecognized(_) => 0,
        }
    }
}

/// Classify a parsed JSON value into a report shape
///
/// Checked in order, first match wins:
/// 1. the value is an array
/// 2. `daily` is an array
/// 3. `daily` is an object
/// 4. `sessions` is an array
///
/// Anything else is [`ReportShape::Unrecognized`]. Never fails.
pub fn classify(value: &Value) -> ReportShape<'_> {
    let shape = match value {
        Value::Array(records) => ReportShape::List(records),
        Value::Object(fields) => match (fields.get("daily"), fields.get("sessions")) {
            (Some(Value::Array(days)), _) => ReportShape::DailyArray(days),
            (Some(Value::Object(days)), _) => ReportShape::DailyMap(days),
            (_, Some(Value::Array(sessions))) => ReportShape::Sessions(sessions),
            _ => ReportShape::Unrecognized(value),
        },
        _ => ReportShape::Unrecognized(value),
    };

    debug!(
        "Classified report as {} with {} records",
        shape.kind(),
        shape.record_count()
    );
    shape
}
