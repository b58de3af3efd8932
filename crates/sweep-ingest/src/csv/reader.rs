//! CSV parsing into a dataset.

use sweep_model::{Cell, Dataset, FileFormat};

use crate::decode::decode_text;
use crate::error::{IngestError, Result};
use crate::header::repair_headers;
use crate::infer::infer_cell;

/// Reads CSV bytes into a dataset.
///
/// The first record is the header. Every record must have as many fields as
/// the header; a ragged record fails with [`IngestError::RaggedRow`].
pub fn read_csv(bytes: &[u8]) -> Result<Dataset> {
    let (text, encoding) = decode_text(bytes);
    tracing::trace!(encoding = encoding.name(), "decoded CSV input");

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyFile {
            format: FileFormat::Csv,
        });
    }
    let columns = repair_headers(headers.iter().map(str::to_string).collect());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<Cell> = record.iter().map(infer_cell).collect();
        rows.push(row);
    }

    Dataset::new(columns, rows).map_err(|e| IngestError::Parse {
        format: FileFormat::Csv,
        message: e.to_string(),
    })
}
