//! Column renaming and projection.

use std::collections::HashMap;

use sweep_model::Dataset;
use tracing::debug;

use crate::error::{Result, TransformError};

/// Lower-cases a column name and replaces each space with `_`.
pub fn standardize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Renames every column with [`standardize_name`].
///
/// Fails with [`TransformError::DuplicateColumnAfterStandardization`] when two
/// columns map to the same name. The input is only borrowed, so it stays
/// usable after a failure.
pub fn standardize_columns(ds: &Dataset) -> Result<Dataset> {
    let mut origin: HashMap<String, &str> = HashMap::with_capacity(ds.width());
    let mut renamed = Vec::with_capacity(ds.width());

    for column in ds.columns() {
        let standardized = standardize_name(column);
        if let Some(first) = origin.get(&standardized) {
            return Err(TransformError::DuplicateColumnAfterStandardization {
                first: (*first).to_string(),
                second: column.clone(),
                standardized,
            });
        }
        origin.insert(standardized.clone(), column);
        renamed.push(standardized);
    }

    let changed = ds
        .columns()
        .iter()
        .zip(&renamed)
        .filter(|(old, new)| old != new)
        .count();
    debug!(changed, "standardized column names");
    Ok(ds.clone().with_columns(renamed)?)
}

/// Keeps only the named columns, in the given order.
///
/// A name repeated in `keep` is used once, at its first position. Fails with
/// [`TransformError::UnknownColumn`] if any name is absent.
pub fn project_columns<S: AsRef<str>>(ds: &Dataset, keep: &[S]) -> Result<Dataset> {
    let mut indices: Vec<usize> = Vec::with_capacity(keep.len());
    for name in keep {
        let name = name.as_ref();
        let idx = ds
            .column_index(name)
            .ok_or_else(|| TransformError::UnknownColumn {
                column: name.to_string(),
            })?;
        if !indices.contains(&idx) {
            indices.push(idx);
        }
    }
    debug!(
        kept = indices.len(),
        dropped = ds.width() - indices.len(),
        "projected columns"
    );
    Ok(ds.select_indices(&indices)?)
}
