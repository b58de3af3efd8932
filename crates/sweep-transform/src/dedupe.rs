//! Exact duplicate row removal.

use std::collections::HashSet;

use sweep_model::{CellKey, Dataset};
use tracing::debug;

/// Drops rows whose every cell equals the cell of an earlier row.
///
/// For this comparison `Missing` equals `Missing` and `-0.0` equals `0.0`.
/// The first occurrence is kept and row order is preserved.
pub fn remove_duplicates(ds: Dataset) -> Dataset {
    let mut seen: HashSet<Vec<CellKey>> = HashSet::with_capacity(ds.height());
    let keep: Vec<bool> = ds
        .rows()
        .iter()
        .map(|row| seen.insert(row.iter().map(sweep_model::Cell::key).collect()))
        .collect();

    let removed = keep.iter().filter(|k| !**k).count();
    debug!(removed, "removed duplicate rows");
    ds.retain_rows(&keep)
}
