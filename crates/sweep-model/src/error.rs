//! Error types for dataset construction.

use thiserror::Error;

/// Errors raised when a [`Dataset`](crate::Dataset) would break its shape invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Two columns share the same name.
    #[error("duplicate column name '{column}'")]
    DuplicateColumn { column: String },

    /// A row does not hold exactly one cell per column.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A replacement column list has the wrong length.
    #[error("expected {expected} column names, got {found}")]
    ColumnCount { expected: usize, found: usize },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::RowWidth {
            row: 3,
            expected: 2,
            found: 1,
        };
        assert_eq!(err.to_string(), "row 3 has 1 cells, expected 2");
    }
}
