//! Summaries of a dataset for charts and previews.
//!
//! Nothing here renders anything. The functions extract the series a chart
//! would plot, and the [`ChartData`] they produce serializes to JSON for
//! whatever front end draws it.
//!
//! # Features
//!
//! - **Bar**: the first two numeric columns as row-indexed series
//! - **Pie**: value frequencies of one column, in first-seen order
//! - **Scatter**: `(x, y)` pairs of two numeric columns
//! - **Histogram**: the raw values of one numeric column
//! - **Profiles**: per-column counts used by previews
//!
//! # Example
//!
//! ```ignore
//! use sweep_summary::{ChartRequest, chart};
//!
//! let data = chart(&dataset, &ChartRequest::Pie { column: "city".into() })?;
//! println!("{}", serde_json::to_string_pretty(&data)?);
//! ```

pub mod chart;
pub mod error;
pub mod profile;

// === Error Types ===
pub use error::{Result, SummaryError};

// === Charts ===
pub use chart::{
    BarSeries, ChartData, ChartRequest, PieSlice, ScatterPlot, bar_series, chart,
    histogram_values, pie_breakdown, scatter_pairs,
};

// === Profiles ===
pub use profile::{ColumnProfile, missing_cells, profile_columns};
