//! Error types for export.

use thiserror::Error;

/// Errors that can occur while serializing a dataset.
#[derive(Debug, Error)]
pub enum OutputError {
    // === Content Errors ===
    /// A cell holds a value the target format cannot represent.
    #[error("cannot write cell {cell}: {message}")]
    Serialization { cell: String, message: String },

    /// The dataset exceeds the target format's sheet size.
    #[error("dataset too large for {format}: {message}")]
    TooLarge {
        format: &'static str,
        message: String,
    },

    // === Wrapped Errors ===
    /// CSV writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// XML writing error.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Archive writing error.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OutputError {
    /// Creates a serialization error for the cell at `reference`.
    pub fn serialization(reference: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            cell: reference.into(),
            message: message.into(),
        }
    }

    /// True if the failure comes from the data rather than the writer.
    pub fn is_content_error(&self) -> bool {
        matches!(self, Self::Serialization { .. } | Self::TooLarge { .. })
    }
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, OutputError>;
