//! Transaction parsing and schema definitions.
//!
//! This module handles:
//! - Normalizing raw input into lines
//! - Parsing each line into a typed transaction
//! - Defining the output schema

pub mod schema;
pub mod transaction;

// Re-export main types
pub use schema::{
    AnalysisReport, DayValue, DayVolume, HourVolume, LineItem, LineWarning, MetricsSnapshot,
    ProductVolume, SavedAnalytics, StaffSales, Transaction,
};
pub use transaction::{normalize_input, parse_line, parse_line_items, parse_timestamp};
