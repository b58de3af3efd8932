//! The in-memory table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{ModelError, Result};
use crate::numeric::NumericView;

/// Named columns plus rows of cells, stored positionally.
///
/// Every row holds exactly one cell per column and column names are unique.
/// Both invariants are checked on construction and kept by every method.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Creates a dataset, validating column uniqueness and row widths.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        check_unique(&columns)?;
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(ModelError::RowWidth {
                    row: idx,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact (case-sensitive) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterates the cells of one column, top to bottom.
    pub fn column_cells(&self, index: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Returns true if the column holds no `Text` cell.
    pub fn is_numeric_column(&self, index: usize) -> bool {
        self.column_cells(index).all(|cell| !cell.is_text())
    }

    /// Count of `Missing` cells in a column.
    pub fn missing_count(&self, index: usize) -> usize {
        self.column_cells(index).filter(|c| c.is_missing()).count()
    }

    /// Columns restricted to those holding only numbers or missing values.
    pub fn numeric_view(&self) -> NumericView<'_> {
        NumericView::new(self)
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Replaces every column name, keeping the data.
    pub fn with_columns(self, columns: Vec<String>) -> Result<Self> {
        if columns.len() != self.columns.len() {
            return Err(ModelError::ColumnCount {
                expected: self.columns.len(),
                found: columns.len(),
            });
        }
        check_unique(&columns)?;
        Ok(Self {
            columns,
            rows: self.rows,
        })
    }

    /// Keeps the rows whose flag in `keep` is true.
    ///
    /// Rows beyond the end of `keep` are kept.
    pub fn retain_rows(mut self, keep: &[bool]) -> Self {
        let mut idx = 0;
        self.rows.retain(|_| {
            let kept = keep.get(idx).copied().unwrap_or(true);
            idx += 1;
            kept
        });
        self
    }

    /// Builds a dataset from the given column positions, in that order.
    ///
    /// Positions must be in range and distinct.
    pub fn select_indices(&self, indices: &[usize]) -> Result<Self> {
        let columns = indices.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Self::new(columns, rows)
    }

    /// Applies `f` to every cell of one column.
    pub fn map_column(&mut self, index: usize, mut f: impl FnMut(&mut Cell)) {
        for row in &mut self.rows {
            f(&mut row[index]);
        }
    }

    /// Splits into column names and rows.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<Cell>>) {
        (self.columns, self.rows)
    }
}

fn check_unique(columns: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.as_str()) {
            return Err(ModelError::DuplicateColumn {
                column: column.clone(),
            });
        }
    }
    Ok(())
}
