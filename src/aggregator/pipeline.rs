//! Single-pass parse-and-aggregate pipeline.
//!
//! Each call owns its accumulators; nothing is shared between runs.

use super::accumulators::Accumulators;
use super::metrics::build_snapshot;
use crate::parser::schema::{LineWarning, MetricsSnapshot};
use crate::parser::transaction::{normalize_input, parse_line};
use crate::utils::error::AnalyticsError;
use chrono::{FixedOffset, Offset, Utc};
use log::{debug, warn};

/// Aggregation settings
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Timezone naive timestamps are expressed in; also used for hours
    pub timezone: FixedOffset,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            timezone: Utc.fix(),
        }
    }
}

impl AggregatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timezone(mut self, timezone: FixedOffset) -> Self {
        self.timezone = timezone;
        self
    }
}

/// Result of one aggregation run
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub snapshot: MetricsSnapshot,

    /// One entry per skipped line, in input order
    pub warnings: Vec<LineWarning>,

    /// Lines that parsed and contributed to the snapshot
    pub transactions_processed: usize,
}

impl Aggregation {
    pub fn lines_skipped(&self) -> usize {
        self.warnings.len()
    }
}

/// Aggregate raw transaction text with default settings (UTC)
///
/// **Public** - main entry point of the engine
///
/// # Errors
/// * `AnalyticsError::EmptyInput` - input has no non-blank lines
pub fn aggregate(raw_text: &str) -> Result<Aggregation, AnalyticsError> {
    aggregate_with(raw_text, &AggregatorConfig::default())
}

/// Aggregate raw transaction text
///
/// **Public** - configurable entry point
///
/// # Algorithm
/// 1. Normalize input into trimmed, non-blank lines
/// 2. Parse each line; a failing line becomes a warning and is skipped
/// 3. Fold each valid transaction into the accumulators
/// 4. Reduce the accumulators into a snapshot
pub fn aggregate_with(
    raw_text: &str,
    config: &AggregatorConfig,
) -> Result<Aggregation, AnalyticsError> {
    let lines = normalize_input(raw_text)?;
    debug!("Aggregating {} lines", lines.len());

    let mut acc = Accumulators::new();
    let mut warnings = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        match parse_line(line, &config.timezone) {
            Ok(tx) => acc.record(&tx),
            Err(e) => {
                warn!("Skipping line {}: {}", line_number, e);
                warnings.push(LineWarning {
                    line_number,
                    kind: e.kind(),
                    message: e.to_string(),
                });
            }
        }
    }

    debug!(
        "Aggregated {} transactions, skipped {} lines",
        acc.transactions,
        warnings.len()
    );

    Ok(Aggregation {
        snapshot: build_snapshot(&acc),
        warnings,
        transactions_processed: acc.transactions,
    })
}
