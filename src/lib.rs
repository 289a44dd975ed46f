//! Sales Metrics
//!
//! Parses delimited sales transaction logs and computes headline
//! metrics: busiest day by volume and by value, best-selling product,
//! top staff member and peak sales hour.
//!
//! This crate provides the engine and the `sales-metrics` CLI.
//!
//! ## Getting Started
//!
//! ```
//! let result = sales_metrics::aggregate(
//!     "8,2025-01-01T14:56:52,[149543:7|649302:7],100.50",
//! ).unwrap();
//! assert_eq!(result.snapshot.most_sold_product.volume, 7);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod session;
pub mod utils;

pub use aggregator::{aggregate, aggregate_with, Aggregation, AggregatorConfig};
pub use parser::{LineWarning, MetricsSnapshot};
pub use utils::{AnalyticsError, LineErrorKind};
