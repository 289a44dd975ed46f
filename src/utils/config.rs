//! Configuration and constants for the engine and CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Transaction line grammar:
// salesStaffId,timestamp,[productId:qty|productId:qty|...],amount
pub const FIELD_SEPARATOR: char = ',';
pub const FIELD_COUNT: usize = 4;
pub const PRODUCT_LIST_OPEN: char = '[';
pub const PRODUCT_LIST_CLOSE: char = ']';
pub const PRODUCT_SEPARATOR: char = '|';
pub const QUANTITY_SEPARATOR: char = ':';

/// Naive timestamp layouts accepted besides RFC 3339, tried in order
pub const NAIVE_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layout (interpreted as midnight UTC)
pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Default output path for the JSON report
pub const DEFAULT_REPORT_PATH: &str = "report.json";

/// Default saved-analytics store
pub const DEFAULT_STORE_PATH: &str = "sales-analytics.json";

/// Environment variable overriding the store path
pub const STORE_PATH_ENV: &str = "SALES_METRICS_STORE";

/// Prefix for saved analytics identifiers
pub const SAVED_ID_PREFIX: &str = "analytics-";
