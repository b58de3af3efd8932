//! Format dispatch.

use std::path::Path;

use sweep_model::{Dataset, FileFormat};
use tracing::debug;

use crate::csv::read_csv;
use crate::error::{IngestError, Result};
use crate::excel::read_excel;
use crate::source::SourceFile;

/// Parses uploaded bytes in the given format.
pub fn load(bytes: &[u8], format: FileFormat) -> Result<Dataset> {
    let dataset = match format {
        FileFormat::Csv => read_csv(bytes)?,
        FileFormat::Excel => read_excel(bytes)?,
    };
    debug!(
        format = %format,
        rows = dataset.height(),
        columns = dataset.width(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Reads a file from disk, choosing the format from its extension.
///
/// The format is checked before the file is read, so an unsupported
/// extension never touches the file system.
pub fn load_file(path: &Path) -> Result<(SourceFile, Dataset)> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let format = crate::source::detect_format(&name)?;

    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let source = SourceFile {
        name,
        size_bytes: bytes.len() as u64,
        format,
    };
    let dataset = load(&bytes, format)?;
    Ok((source, dataset))
}
