//! Per-column profiles shown alongside a preview.

use std::collections::HashSet;

use serde::Serialize;
use sweep_model::{Cell, Dataset};

/// Counts describing one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    /// True if the column is part of the numeric view.
    pub numeric: bool,
    pub present: usize,
    pub missing: usize,
    /// Distinct non-missing values.
    pub unique: usize,
}

impl ColumnProfile {
    /// Share of cells that are missing, `0.0` for an empty column.
    pub fn missing_ratio(&self) -> f64 {
        let total = self.present + self.missing;
        if total == 0 {
            0.0
        } else {
            self.missing as f64 / total as f64
        }
    }

    /// Distinct values per present value, `0.0` when nothing is present.
    pub fn unique_ratio(&self) -> f64 {
        if self.present == 0 {
            0.0
        } else {
            self.unique as f64 / self.present as f64
        }
    }

    /// Short type label for display.
    pub fn kind(&self) -> &'static str {
        match (self.numeric, self.present) {
            (_, 0) => "empty",
            (true, _) => "number",
            (false, _) => "text",
        }
    }
}

/// Profiles every column of `ds`, in column order.
pub fn profile_columns(ds: &Dataset) -> Vec<ColumnProfile> {
    ds.columns()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let mut unique = HashSet::new();
            let mut missing = 0usize;
            for cell in ds.column_cells(index) {
                if cell.is_missing() {
                    missing += 1;
                } else {
                    unique.insert(cell.key());
                }
            }
            ColumnProfile {
                name: name.clone(),
                numeric: ds.is_numeric_column(index),
                present: ds.height() - missing,
                missing,
                unique: unique.len(),
            }
        })
        .collect()
}

/// Number of missing cells across the whole dataset.
pub fn missing_cells(ds: &Dataset) -> usize {
    ds.rows().iter().flatten().filter(|c| c.is_missing()).count()
}
