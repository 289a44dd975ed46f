//! Sales Metrics CLI
//!
//! Computes headline sales metrics from a transaction log and manages
//! saved snapshots.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use sales_metrics::commands::{
    display_format_guide, display_version, execute_analyze, list_saved, parse_utc_offset,
    remove_saved, validate_args, validate_report_file, AnalyzeArgs,
};
use sales_metrics::utils::config::{DEFAULT_REPORT_PATH, DEFAULT_STORE_PATH, STORE_PATH_ENV};

/// Sales Metrics - transaction log analytics
#[derive(Parser, Debug)]
#[command(name = "sales-metrics")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a transaction log
    Analyze {
        /// Transaction file (CSV/TXT)
        #[arg(short, long)]
        file: PathBuf,

        /// Output path for JSON report
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,

        /// Skip writing the JSON report
        #[arg(long)]
        no_report: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Save the snapshot under this label
        #[arg(long, value_name = "LABEL")]
        save: Option<String>,

        /// Saved-analytics store
        #[arg(long, env = STORE_PATH_ENV, default_value = DEFAULT_STORE_PATH)]
        store: PathBuf,

        /// UTC offset of naive timestamps (e.g. +01:00)
        #[arg(long, default_value = "Z", allow_hyphen_values = true)]
        utc_offset: String,

        /// Fail if any line cannot be processed
        #[arg(long)]
        strict: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Manage saved analytics
    Saved {
        #[command(subcommand)]
        action: SavedAction,

        /// Saved-analytics store
        #[arg(long, env = STORE_PATH_ENV, default_value = DEFAULT_STORE_PATH)]
        store: PathBuf,
    },

    /// Display the expected input format
    Format,

    /// Display version information
    Version,
}

#[derive(Subcommand, Debug)]
enum SavedAction {
    /// List saved snapshots
    List,

    /// Remove a saved snapshot
    Remove {
        /// Snapshot id (analytics-...)
        id: String,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            file,
            output,
            no_report,
            summary,
            save,
            store,
            utc_offset,
            strict,
        } => {
            let args = AnalyzeArgs {
                input: file,
                output_json: if no_report { None } else { Some(output) },
                print_summary: summary,
                save_label: save,
                store_path: store,
                timezone: parse_utc_offset(&utc_offset)?,
                strict,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(&args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Saved { action, store } => match action {
            SavedAction::List => list_saved(&store)?,
            SavedAction::Remove { id } => remove_saved(&store, &id)?,
        },

        Commands::Format => {
            display_format_guide();
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
