//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Batch-level errors: abort the whole aggregation run
#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("No transactions found in input")]
    EmptyInput,

    #[error("Failed to read input: {0}")]
    UnreadableInput(#[from] std::io::Error),
}

/// Kind of a recoverable per-line failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineErrorKind {
    InvalidTimestamp,
    InvalidAmount,
    LineProcessingError,
}

impl LineErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineErrorKind::InvalidTimestamp => "InvalidTimestamp",
            LineErrorKind::InvalidAmount => "InvalidAmount",
            LineErrorKind::LineProcessingError => "LineProcessingError",
        }
    }
}

impl fmt::Display for LineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line-level errors: the line is excluded, processing continues
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("Invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("Malformed product list '{0}'")]
    MalformedProductList(String),

    #[error("Total quantity overflows in product list '{0}'")]
    QuantityOverflow(String),
}

impl LineError {
    pub fn kind(&self) -> LineErrorKind {
        match self {
            LineError::InvalidTimestamp(_) => LineErrorKind::InvalidTimestamp,
            LineError::InvalidAmount(_) => LineErrorKind::InvalidAmount,
            LineError::FieldCount { .. }
            | LineError::MalformedProductList(_)
            | LineError::QuantityOverflow(_) => LineErrorKind::LineProcessingError,
        }
    }
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors from the saved-analytics store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Saved analytics not found: {0}")]
    NotFound(String),
}

/// Errors from the upload session state machine
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}
