//! Error types for data ingestion.

use std::path::PathBuf;

use sweep_model::FileFormat;
use thiserror::Error;

/// Errors that can occur while loading a tabular file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Format Errors ===
    /// The file extension is not CSV or Excel.
    #[error("unsupported file type: {extension}")]
    UnsupportedFormat { extension: String },

    // === Parse Errors ===
    /// The file has no header row.
    #[error("{format} file is empty")]
    EmptyFile { format: FileFormat },

    /// A record has a different number of fields than the header.
    #[error("line {line} has {found} fields, expected {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The workbook contains no worksheet.
    #[error("workbook has no worksheets")]
    NoWorksheet,

    /// The underlying reader rejected the input.
    #[error("failed to parse {format}: {message}")]
    Parse { format: FileFormat, message: String },

    // === File System Errors ===
    /// Failed to read the file from disk.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    /// Returns true for malformed-input errors (as opposed to format or I/O errors).
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyFile { .. } | Self::RaggedRow { .. } | Self::NoWorksheet | Self::Parse { .. }
        )
    }
}

impl From<calamine::XlsxError> for IngestError {
    fn from(err: calamine::XlsxError) -> Self {
        Self::Parse {
            format: FileFormat::Excel,
            message: err.to_string(),
        }
    }
}

impl From<::csv::Error> for IngestError {
    fn from(err: ::csv::Error) -> Self {
        if let ::csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } = err.kind()
        {
            return Self::RaggedRow {
                line: pos.as_ref().map_or(0, ::csv::Position::line),
                expected: *expected_len as usize,
                found: *len as usize,
            };
        }
        Self::Parse {
            format: FileFormat::Csv,
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
