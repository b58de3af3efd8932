//! Data cleaning operations.
//!
//! Every operation takes a [`Dataset`](sweep_model::Dataset) by value and
//! returns the cleaned one. Operations are deterministic and independent, so
//! callers may apply any subset in any order:
//!
//! - **columns**: header standardization and column projection
//! - **dedupe**: exact duplicate row removal
//! - **impute**: mean/median/mode filling of missing numeric cells
//! - **outliers**: IQR-based row filtering
//! - **pipeline**: the closed set of named operations ([`CleaningOp`])
//! - **stats**: the descriptive statistics the above rely on

pub mod columns;
pub mod dedupe;
pub mod error;
pub mod impute;
pub mod outliers;
pub mod pipeline;
pub mod stats;

pub use columns::{project_columns, standardize_columns, standardize_name};
pub use dedupe::remove_duplicates;
pub use error::{Result, TransformError};
pub use impute::{FillMethod, FillReport, fill_missing, fill_missing_with_report};
pub use outliers::{OutlierBounds, iqr_bounds, remove_outliers};
pub use pipeline::{CleaningOp, apply};
