use crate::output::{read_report, render_summary};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Generated: {}", report.generated_at);
    println!("  Transactions: {}", report.transactions_processed);
    println!("  Lines Skipped: {}", report.lines_skipped);
    println!();
    print!("{}", render_summary(&report.metrics, &report.warnings));

    if report.version != SCHEMA_VERSION {
        log::warn!(
            "Report schema v{} differs from current v{}",
            report.version,
            SCHEMA_VERSION
        );
    }

    Ok(())
}

/// Display the expected input format
pub fn display_format_guide() {
    println!("Expected Format (CSV/TXT):");
    println!("salesStaffId,timestamp,[product1:quantity|product2:quantity...],amount");
    println!();
    println!("Example:");
    println!("8,2025-01-01T14:56:52,[149543:7|649302:7|45995:8|231096:2],30160.973");
    println!();
    println!("Where:");
    println!("  salesStaffId: Staff ID");
    println!("  timestamp:    ISO format (YYYY-MM-DDTHH:mm:ss)");
    println!("  products:     productId:quantity pairs in square brackets, separated by |");
    println!("  amount:       Sale amount (decimal number)");
    println!();
    println!("Blank lines are ignored. Malformed lines are skipped and reported.");
}

/// Display version information
pub fn display_version() {
    println!("Sales Metrics v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Transaction log parsing and sales metrics aggregation.");
}
