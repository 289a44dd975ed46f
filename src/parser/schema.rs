//! Transaction model and output JSON schema definitions.
//!
//! Output field names are camelCase so reports read the same as the
//! dashboard payloads they replace. Schema is versioned to allow future
//! evolution.

use crate::utils::error::LineErrorKind;
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// One product/quantity pair within a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub product_id: String,
    pub quantity: u64,
}

/// One parsed sale record
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Opaque staff identifier
    pub staff_id: String,

    /// Sale time, expressed in the configured timezone
    pub timestamp: DateTime<FixedOffset>,

    /// Valid line items only (malformed pairs are dropped while parsing)
    pub line_items: Vec<LineItem>,

    /// Sale amount
    pub amount: f64,
}

impl Transaction {
    /// Calendar day key (`YYYY-MM-DD`) taken from the UTC date
    pub fn date_key(&self) -> String {
        self.timestamp
            .with_timezone(&Utc)
            .date_naive()
            .format("%Y-%m-%d")
            .to_string()
    }

    /// Hour of day (0-23) in the configured timezone
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Sum of valid line-item quantities, saturating at `u64::MAX`
    pub fn total_quantity(&self) -> u64 {
        self.line_items
            .iter()
            .fold(0u64, |total, item| total.saturating_add(item.quantity))
    }
}

/// Day with the highest quantity sold
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayVolume {
    pub date: String,
    pub volume: u64,
}

/// Day with the highest sale value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayValue {
    pub date: String,
    pub value: f64,
}

/// Product with the highest cumulative quantity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductVolume {
    pub id: String,
    pub volume: u64,
}

/// Staff member with the highest cumulative sales
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffSales {
    pub id: String,
    pub sales: f64,
}

/// Hour of day with the most transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourVolume {
    pub hour: u32,
    pub volume: u64,
}

/// The five aggregate metrics of one run
///
/// `Default` is the all-zero seed reported when nothing survived parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub highest_sales_volume: DayVolume,
    pub highest_sales_value: DayValue,
    pub most_sold_product: ProductVolume,
    pub highest_sales_staff: StaffSales,
    pub highest_hour: HourVolume,
}

/// A skipped input line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineWarning {
    /// 1-based position among non-blank lines
    pub line_number: usize,
    pub kind: LineErrorKind,
    pub message: String,
}

/// Top-level report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input the report was computed from
    pub source: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    pub transactions_processed: usize,

    pub lines_skipped: usize,

    pub metrics: MetricsSnapshot,

    #[serde(default)]
    pub warnings: Vec<LineWarning>,
}

/// A snapshot saved under a user label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAnalytics {
    pub id: String,

    /// Source filename without extension
    pub filename: String,

    pub metrics: MetricsSnapshot,

    pub saved_at: String,

    /// User-supplied label
    pub prefix: String,
}
