//! Output formatting for cost charts
//!
//! Two formatters render a [`ChartView`]:
//! - [`TableFormatter`] draws a table with a proportional bar per point, so
//!   the cost trend can be read straight from the terminal
//! - [`JsonFormatter`] emits the same data for scripts and other tools
//!
//! # Examples
//!
//! ```
//! use ccchart_core::{ChartView, DatedCost, ShapeKind, Series, summarize};
//! use ccchart_terminal::output::get_formatter;
//! use chrono::NaiveDate;
//!
//! let series: Series = vec![
//!     DatedCost::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 1.5),
//! ]
//! .into();
//! let view = ChartView {
//!     shape: ShapeKind::DailyArray,
//!     range: None,
//!     stats: summarize(&series),
//!     series,
//! };
//!
//! let table = get_formatter(false, 20).format_chart(&view);
//! assert!(table.contains("$1.50"));
//!
//! let json = get_formatter(true, 20).format_chart(&view);
//! assert!(json.contains("\"series\""));
//! ```

use ccchart_core::ChartView;
use prettytable::{Cell, Row, Table, format, row};
use serde_json::json;

/// Bar width used when the terminal size cannot be detected
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Columns taken by the date and cost columns plus table borders
const TABLE_OVERHEAD: usize = 32;

/// Trait for chart output formatters
pub trait OutputFormatter {
    /// Format a chart view
    fn format_chart(&self, view: &ChartView) -> String;
}

/// Table formatter for human-readable output
pub struct TableFormatter {
    /// Width in columns of the bar for the largest cost
    pub bar_width: usize,
}

impl TableFormatter {
    /// Create a new TableFormatter
    pub fn new(bar_width: usize) -> Self {
        Self {
            bar_width: bar_width.max(1),
        }
    }

    /// Format currency with dollar sign
    fn format_currency(amount: f64) -> String {
        format!("${amount:.2}")
    }

    /// Bar proportional to `cost / max`
    fn format_bar(&self, cost: f64, max: f64) -> String {
        if max <= 0.0 || cost <= 0.0 {
            return String::new();
        }
        let len = ((cost / max) * self.bar_width as f64).round() as usize;
        // keep non-zero costs visible
        "█".repeat(len.clamp(1, self.bar_width))
    }
}

impl OutputFormatter for TableFormatter {
    fn format_chart(&self, view: &ChartView) -> String {
        let mut output = String::new();

        output.push_str("Cost Trends Over Time");
        if let Some(range) = &view.range {
            output.push_str(&format!(" ({range})"));
        }
        output.push('\n');

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
        table.set_titles(row![b -> "Date", b -> "Cost (USD)", b -> "Trend"]);

        let max = view.series.max_cost();
        for point in &view.series {
            table.add_row(row![
                point.date.format("%Y-%m-%d"),
                r -> Self::format_currency(point.cost),
                self.format_bar(point.cost, max)
            ]);
        }

        table.add_row(Row::new(vec![Cell::new(""); 3]));
        table.add_row(row![
            b -> "TOTAL",
            br -> Self::format_currency(view.stats.total),
            ""
        ]);
        table.add_row(row![
            b -> "AVERAGE",
            br -> Self::format_currency(view.stats.average),
            ""
        ]);

        output.push_str(&table.to_string());
        output
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_chart(&self, view: &ChartView) -> String {
        let output = json!({
            "shape": view.shape,
            "range": view.range.map(|r| json!({
                "start": r.start().format("%Y-%m-%d").to_string(),
                "end": r.end().format("%Y-%m-%d").to_string(),
            })),
            "series": view.series.iter().map(|p| json!({
                "date": p.date.format("%Y-%m-%d"),
                "totalCost": p.cost,
            })).collect::<Vec<_>>(),
            "summary": {
                "total": view.stats.total,
                "average": view.stats.average,
                "points": view.stats.points,
            }
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| output.to_string())
    }
}

/// Bar width for a terminal of the given column count
pub fn bar_width_for(columns: usize) -> usize {
    columns.saturating_sub(TABLE_OVERHEAD).clamp(10, 80)
}

/// Bar width for the current terminal, or [`DEFAULT_BAR_WIDTH`] when stdout
/// is not a terminal
pub fn detect_bar_width() -> usize {
    match terminal_size::terminal_size() {
        Some((terminal_size::Width(w), _)) => bar_width_for(w as usize),
        None => {
            tracing::debug!("Terminal size unavailable, using default bar width");
            DEFAULT_BAR_WIDTH
        }
    }
}

/// Get the appropriate formatter based on output preference
pub fn get_formatter(json: bool, bar_width: usize) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter::new(bar_width))
    }
}
