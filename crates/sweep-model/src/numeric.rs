//! Numeric projection of a dataset.

use crate::dataset::Dataset;

/// A column that belongs to a [`NumericView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericColumn<'a> {
    /// Position in the underlying dataset.
    pub index: usize,
    /// Column name.
    pub name: &'a str,
}

/// Read-only view of the columns whose cells are all `Number` or `Missing`.
///
/// A single `Text` cell excludes a column. A column of only `Missing` cells
/// is numeric. The view borrows the dataset and is recomputed on demand.
#[derive(Debug, Clone)]
pub struct NumericView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> NumericView<'a> {
    pub(crate) fn new(dataset: &'a Dataset) -> Self {
        let indices = (0..dataset.width())
            .filter(|&idx| dataset.is_numeric_column(idx))
            .collect();
        Self { dataset, indices }
    }

    /// Dataset positions of the numeric columns, in column order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Numeric columns in column order.
    pub fn columns(&self) -> Vec<NumericColumn<'a>> {
        let dataset = self.dataset;
        self.indices
            .iter()
            .map(|&index| NumericColumn {
                index,
                name: dataset.columns()[index].as_str(),
            })
            .collect()
    }

    /// Names of the numeric columns.
    pub fn names(&self) -> Vec<&'a str> {
        self.columns().into_iter().map(|c| c.name).collect()
    }

    /// Returns true if the dataset column at `index` is in the view.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Number of numeric columns.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if no column is numeric.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Row-aligned values of a column; `None` marks a missing cell.
    pub fn values(&self, index: usize) -> Vec<Option<f64>> {
        self.dataset
            .column_cells(index)
            .map(crate::Cell::as_f64)
            .collect()
    }

    /// Non-missing values of a column, in row order.
    pub fn present_values(&self, index: usize) -> Vec<f64> {
        self.dataset
            .column_cells(index)
            .filter_map(crate::Cell::as_f64)
            .collect()
    }
}
