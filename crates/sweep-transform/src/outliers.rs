//! Interquartile-range outlier filtering.

use serde::Serialize;
use sweep_model::Dataset;
use tracing::debug;

use crate::stats::quantile;

/// Multiplier applied to the IQR to get the fences.
pub const IQR_FACTOR: f64 = 1.5;

/// Tukey fences for one numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlierBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl OutlierBounds {
    /// Returns true if `value` lies strictly outside the fences.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Computes Q1, Q3 (linear interpolation), the IQR and the fences
/// `[Q1 - 1.5 * IQR, Q3 + 1.5 * IQR]`. Returns `None` for no values.
pub fn iqr_bounds(values: &[f64]) -> Option<OutlierBounds> {
    let q1 = quantile(values, 0.25)?;
    let q3 = quantile(values, 0.75)?;
    let iqr = q3 - q1;
    Some(OutlierBounds {
        q1,
        q3,
        iqr,
        lower: q1 - IQR_FACTOR * iqr,
        upper: q3 + IQR_FACTOR * iqr,
    })
}

/// Drops every row that is an outlier in at least one numeric column.
///
/// Bounds are computed per column from its present values. A missing cell
/// never marks its row as an outlier. Columns are unchanged.
pub fn remove_outliers(ds: Dataset) -> Dataset {
    let mut keep = vec![true; ds.height()];
    {
        let view = ds.numeric_view();
        for col in view.columns() {
            let Some(bounds) = iqr_bounds(&view.present_values(col.index)) else {
                continue;
            };
            let mut flagged = 0usize;
            for (row, value) in view.values(col.index).into_iter().enumerate() {
                if let Some(value) = value
                    && bounds.is_outlier(value)
                {
                    if keep[row] {
                        flagged += 1;
                    }
                    keep[row] = false;
                }
            }
            debug!(
                column = col.name,
                q1 = bounds.q1,
                q3 = bounds.q3,
                lower = bounds.lower,
                upper = bounds.upper,
                flagged,
                "computed outlier bounds"
            );
        }
    }

    let removed = keep.iter().filter(|k| !**k).count();
    debug!(removed, "removed outlier rows");
    ds.retain_rows(&keep)
}
