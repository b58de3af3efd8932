//! Error types for summaries.

use thiserror::Error;

/// Errors raised when a chart cannot be built from the requested columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("column not found: {column}")]
    ColumnNotFound { column: String },

    #[error("column '{column}' is not numeric")]
    ColumnNotNumeric { column: String },
}

/// Result type for summary operations.
pub type Result<T> = std::result::Result<T, SummaryError>;
