//! Uploaded file descriptors.

use std::path::Path;

use sweep_model::FileFormat;

use crate::error::{IngestError, Result};

/// Extension of a file name including the dot, lower-cased (`""` if none).
fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default()
}

/// Picks the load format from a file name's extension.
///
/// `.csv` and `.xlsx` are supported (any case); everything else fails with
/// [`IngestError::UnsupportedFormat`].
pub fn detect_format(file_name: &str) -> Result<FileFormat> {
    let extension = extension_of(file_name);
    FileFormat::from_extension(extension.trim_start_matches('.')).ok_or_else(|| {
        IngestError::UnsupportedFormat {
            extension: if extension.is_empty() {
                "(none)".to_string()
            } else {
                extension.clone()
            },
        }
    })
}

/// An uploaded file: its name, size and detected format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name as uploaded (no directory).
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Format chosen from the extension.
    pub format: FileFormat,
}

impl SourceFile {
    /// Describes a file by name and size, detecting its format.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Result<Self> {
        let name = name.into();
        let format = detect_format(&name)?;
        Ok(Self {
            name,
            size_bytes,
            format,
        })
    }

    /// Size in kilobytes, for display.
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }

    /// File name without its extension; the default output name.
    pub fn stem(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name)
    }
}
