//! Export of cleaned datasets.
//!
//! # Features
//!
//! - **CSV**: header plus one LF-terminated line per row, standard quoting
//! - **Excel**: a single-sheet `.xlsx` workbook built in memory
//!
//! Both writers produce bytes; callers decide where they go.
//!
//! # Example
//!
//! ```ignore
//! use sweep_model::FileFormat;
//! use sweep_output::ExportedFile;
//!
//! let file = ExportedFile::build(&dataset, "survey", FileFormat::Excel)?;
//! std::fs::write(&file.file_name, &file.bytes)?;
//! ```

pub mod delimited;
pub mod error;
pub mod export;
pub mod xlsx;

// === Error Types ===
pub use error::{OutputError, Result};

// === Writers ===
pub use delimited::write_csv;
pub use export::{ExportedFile, export, output_file_name};
pub use xlsx::{MAX_CELL_CHARS, write_xlsx};
