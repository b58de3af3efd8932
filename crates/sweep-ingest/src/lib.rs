//! Data ingestion for Data Sweeper.
//!
//! This crate turns uploaded bytes into a [`Dataset`](sweep_model::Dataset).
//!
//! # Features
//!
//! - **Format Detection**: Pick CSV or Excel from the file name's extension
//! - **CSV Loading**: Header row plus records, with encoding detection
//! - **Excel Loading**: First worksheet of an `.xlsx` workbook
//! - **Type Inference**: Each cell becomes a number, text, or missing value
//! - **Header Repair**: Blank and repeated header names are made unique
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sweep_ingest::{load, load_file, SourceFile};
//! use sweep_model::FileFormat;
//!
//! // From bytes with an explicit format
//! let ds = load(b"name,age\nAnn,31\n", FileFormat::Csv)?;
//!
//! // From disk, format picked by extension
//! let (source, ds) = load_file(Path::new("data/sales.xlsx"))?;
//! println!("{} ({:.2} KB)", source.name, source.size_kb());
//! ```

mod csv;
mod decode;
mod error;
mod excel;
mod header;
mod infer;
mod loader;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use csv::read_csv;
pub use excel::read_excel;
pub use loader::{load, load_file};

// === Source Files ===
pub use source::{SourceFile, detect_format};

// === Inference ===
pub use decode::decode_text;
pub use header::repair_headers;
pub use infer::{NA_TOKENS, infer_cell, is_na_token};
