//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod saved;
pub mod utils;

// Re-export main command functions
pub use analyze::{execute_analyze, parse_utc_offset, validate_args, AnalyzeArgs};
pub use saved::{list_saved, remove_saved};
pub use utils::{display_format_guide, display_version, validate_report_file};
