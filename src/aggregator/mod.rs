//! Aggregation of parsed transactions into sales metrics.
//!
//! This module transforms parsed transactions into:
//! - Per-day, per-product, per-staff and per-hour running totals
//! - The five headline metrics of a run

pub mod accumulators;
pub mod metrics;
pub mod pipeline;

// Re-export main types and functions
pub use accumulators::{Accumulators, DailyBucket};
pub use metrics::{build_snapshot, strict_max};
pub use pipeline::{aggregate, aggregate_with, Aggregation, AggregatorConfig};
