//! Error types for cleaning operations.

use sweep_model::ModelError;
use thiserror::Error;

/// Errors raised by cleaning operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// Two column names become identical after standardization.
    #[error("columns '{first}' and '{second}' both standardize to '{standardized}'")]
    DuplicateColumnAfterStandardization {
        first: String,
        second: String,
        standardized: String,
    },

    /// A numeric column has no values to compute a fill statistic from.
    #[error("column '{column}' has no values to impute from")]
    NoDataForImputation { column: String },

    /// A requested column does not exist.
    #[error("unknown column '{column}'")]
    UnknownColumn { column: String },

    /// An operation argument could not be parsed.
    #[error("invalid operation '{input}': {reason}")]
    InvalidOperation { input: String, reason: String },

    /// The result would break the dataset's shape invariants.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, TransformError>;
