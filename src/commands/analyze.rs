//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads the transaction file
//! 2. Parses and aggregates it
//! 3. Writes the JSON report
//! 4. Optionally prints a summary and saves the snapshot

use crate::aggregator::{aggregate_with, Aggregation, AggregatorConfig};
use crate::output::{new_saved_analytics, render_summary, to_report, write_report, AnalyticsStore};
use crate::session::UploadSession;
use crate::utils::config::{DEFAULT_REPORT_PATH, DEFAULT_STORE_PATH};
use crate::utils::error::AnalyticsError;
use anyhow::{Context, Result};
use chrono::{FixedOffset, Offset, Utc};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Transaction log to analyze
    pub input: PathBuf,

    /// Output path for the JSON report (None = no report file)
    pub output_json: Option<PathBuf>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Save the snapshot under this label
    pub save_label: Option<String>,

    /// Saved-analytics store
    pub store_path: PathBuf,

    /// Timezone naive timestamps are expressed in
    pub timezone: FixedOffset,

    /// Fail if any line was skipped
    pub strict: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_json: Some(PathBuf::from(DEFAULT_REPORT_PATH)),
            print_summary: false,
            save_label: None,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            timezone: Utc.fix(),
            strict: false,
        }
    }
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable input file
/// * Empty input
/// * Report or store write failures
/// * Skipped lines when `strict` is set
pub fn execute_analyze(args: &AnalyzeArgs) -> Result<Aggregation> {
    let start_time = Instant::now();
    let config = AggregatorConfig::new().with_timezone(args.timezone);
    let mut session = UploadSession::new();

    info!("Analyzing transactions from: {}", args.input.display());

    // Step 1: Read input
    session.begin_read()?;
    let raw_text = match std::fs::read_to_string(&args.input) {
        Ok(text) => text,
        Err(e) => {
            session.fail(e.to_string())?;
            return Err(AnalyticsError::UnreadableInput(e))
                .with_context(|| format!("Failed to read {}", args.input.display()));
        }
    };
    debug!("Read {} bytes", raw_text.len());

    // Step 2: Parse and aggregate
    session.finish_read()?;
    let aggregation = match aggregate_with(&raw_text, &config) {
        Ok(aggregation) => aggregation,
        Err(e) => {
            session.fail(e.to_string())?;
            return Err(e.into());
        }
    };
    session.complete(Ok(aggregation.clone()))?;

    info!(
        "Processed {} transactions ({} lines skipped)",
        aggregation.transactions_processed,
        aggregation.lines_skipped()
    );

    if args.strict && !aggregation.warnings.is_empty() {
        anyhow::bail!(
            "{} line(s) could not be processed (strict mode)",
            aggregation.lines_skipped()
        );
    }

    // Step 3: Write report
    if let Some(output) = &args.output_json {
        let report = to_report(&args.input.display().to_string(), &aggregation);
        write_report(&report, output).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", output.display());
    }

    // Step 4: Summary and save
    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("SALES SUMMARY");
        println!("{}", "=".repeat(60));
        println!("Source: {}", args.input.display());
        println!("Transactions: {}", aggregation.transactions_processed);
        println!();
        print!(
            "{}",
            render_summary(&aggregation.snapshot, &aggregation.warnings)
        );
        println!("{}", "=".repeat(60));
    }

    if let Some(label) = &args.save_label {
        let store = AnalyticsStore::open(&args.store_path);
        let record = new_saved_analytics(&args.input, &aggregation.snapshot, label);
        let id = record.id.clone();
        store
            .save(record)
            .with_context(|| format!("Failed to save analytics to {}", store.path().display()))?;
        info!("✓ Analytics saved as \"{}\" ({})", label, id);
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(aggregation)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input file cannot be empty");
    }

    if let Some(label) = &args.save_label {
        if label.trim().is_empty() {
            anyhow::bail!("Save label cannot be empty");
        }
    }

    if args.save_label.is_some() && args.store_path.as_os_str().is_empty() {
        anyhow::bail!("Store path cannot be empty");
    }

    if let Some(output) = &args.output_json {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}

/// Parse a UTC offset such as `Z`, `+01:00` or `-0530`
///
/// **Public** - value parser for `--utc-offset`
///
/// `Z` and `utc` are accepted as aliases; everything else goes through
/// chrono's `FixedOffset` parser.
pub fn parse_utc_offset(raw: &str) -> Result<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }

    raw.parse::<FixedOffset>()
        .with_context(|| format!("Invalid UTC offset: {}", raw))
}
