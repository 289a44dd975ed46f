//! Output writers for analysis results.
//!
//! This module handles:
//! - JSON reports (write and read back)
//! - Text summaries
//! - The saved-analytics store

pub mod json;
pub mod store;
pub mod summary;

// Re-export main functions
pub use json::{read_report, report_to_string, to_report, write_report};
pub use store::{new_saved_analytics, AnalyticsStore};
pub use summary::{format_hour, render_summary};
