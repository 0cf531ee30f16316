//! Terminal output for ccchart
//!
//! This crate provides the table and JSON chart formatters and the
//! coloured status lines shown while a report is processed.

pub mod output;
pub mod status;

pub use output::{JsonFormatter, OutputFormatter, TableFormatter, get_formatter};
pub use status::{StatusKind, print_status};
