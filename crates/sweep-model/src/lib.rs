//! Tabular data model for Data Sweeper.
//!
//! This crate provides the in-memory table every other crate works on:
//! - [`Cell`]: a single typed value (number, text, or missing)
//! - [`Dataset`]: named columns plus positional rows of cells
//! - [`NumericView`]: the read-only subset of columns that hold only numbers
//! - [`FileFormat`]: the CSV and Excel formats files are loaded from and exported to
//!
//! # Example
//!
//! ```
//! use sweep_model::{Cell, Dataset};
//!
//! let ds = Dataset::new(
//!     vec!["name".to_string(), "age".to_string()],
//!     vec![
//!         vec![Cell::text("Ann"), Cell::Number(31.0)],
//!         vec![Cell::text("Bob"), Cell::Missing],
//!     ],
//! )?;
//!
//! assert_eq!(ds.height(), 2);
//! assert_eq!(ds.numeric_view().names(), vec!["age"]);
//! # Ok::<(), sweep_model::ModelError>(())
//! ```

mod cell;
mod dataset;
mod error;
mod format;
mod numeric;

// === Error Types ===
pub use error::{ModelError, Result};

// === Core Types ===
pub use cell::{Cell, CellKey, format_number};
pub use dataset::Dataset;
pub use format::FileFormat;
pub use numeric::{NumericColumn, NumericView};
