//! Format dispatch and file naming.

use std::fs;
use std::path::{Path, PathBuf};

use sweep_model::{Dataset, FileFormat};
use tracing::debug;

use crate::delimited::write_csv;
use crate::error::Result;
use crate::xlsx::write_xlsx;

/// Serializes `ds` in `format`.
pub fn export(ds: &Dataset, format: FileFormat) -> Result<Vec<u8>> {
    let bytes = match format {
        FileFormat::Csv => write_csv(ds)?,
        FileFormat::Excel => write_xlsx(ds)?,
    };
    debug!(
        format = %format,
        rows = ds.height(),
        bytes = bytes.len(),
        "exported dataset"
    );
    Ok(bytes)
}

/// Output file name: `stem` plus the format's extension.
pub fn output_file_name(stem: &str, format: FileFormat) -> String {
    format!("{stem}{}", format.extension())
}

/// Exported bytes together with what a download needs to deliver them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    /// Exports `ds` and names the result after `stem`.
    pub fn build(ds: &Dataset, stem: &str, format: FileFormat) -> Result<Self> {
        Ok(Self {
            file_name: output_file_name(stem, format),
            mime_type: format.mime_type(),
            bytes: export(ds, format)?,
        })
    }

    /// Writes the file into `dir`, creating the directory if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("sales", FileFormat::Csv), "sales.csv");
        assert_eq!(output_file_name("sales.2024", FileFormat::Excel), "sales.2024.xlsx");
    }

    #[test]
    fn test_build_sets_mime_type() {
        let ds = Dataset::new(vec!["a".into()], vec![]).unwrap();
        let file = ExportedFile::build(&ds, "out", FileFormat::Csv).unwrap();
        assert_eq!(file.file_name, "out.csv");
        assert_eq!(file.mime_type, "text/csv");
        assert_eq!(file.bytes, b"a\n");
    }
}
