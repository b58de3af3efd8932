//! Chart data extraction.

use std::collections::HashMap;

use serde::Serialize;
use sweep_model::{Cell, CellKey, Dataset};
use tracing::debug;

use crate::error::{Result, SummaryError};

/// Maximum number of series in a bar chart.
const MAX_BAR_SERIES: usize = 2;

/// One numeric column laid out by row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub column: String,
    /// `None` where the cell is missing.
    pub values: Vec<Option<f64>>,
}

/// Frequency of one distinct value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    /// Display form of the value.
    pub label: String,
    pub value: Cell,
    pub count: usize,
}

/// Points of a scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPlot {
    pub x: String,
    pub y: String,
    pub points: Vec<(f64, f64)>,
}

/// A chart the caller wants data for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartRequest {
    Bar,
    Pie { column: String },
    Scatter { x: String, y: String },
    Histogram { column: String },
}

/// Extracted chart data, tagged by chart kind when serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "chart", rename_all = "snake_case")]
pub enum ChartData {
    Bar { series: Vec<BarSeries> },
    Pie { column: String, slices: Vec<PieSlice> },
    Scatter(ScatterPlot),
    Histogram { column: String, values: Vec<f64> },
}

/// Builds the data for `request`.
pub fn chart(ds: &Dataset, request: &ChartRequest) -> Result<ChartData> {
    let data = match request {
        ChartRequest::Bar => ChartData::Bar {
            series: bar_series(ds),
        },
        ChartRequest::Pie { column } => ChartData::Pie {
            column: column.clone(),
            slices: pie_breakdown(ds, column)?,
        },
        ChartRequest::Scatter { x, y } => ChartData::Scatter(scatter_pairs(ds, x, y)?),
        ChartRequest::Histogram { column } => ChartData::Histogram {
            column: column.clone(),
            values: histogram_values(ds, column)?,
        },
    };
    Ok(data)
}

/// Series for the first two numeric columns, in column order.
///
/// Returns fewer series when the dataset has fewer numeric columns.
pub fn bar_series(ds: &Dataset) -> Vec<BarSeries> {
    let view = ds.numeric_view();
    view.columns()
        .into_iter()
        .take(MAX_BAR_SERIES)
        .map(|col| BarSeries {
            column: col.name.to_string(),
            values: view.values(col.index),
        })
        .collect()
}

/// Counts each distinct non-missing value of `column`.
///
/// Slices appear in the order their value first occurs. Numbers and text are
/// both counted; `Number(1)` and `Text("1")` are different values.
pub fn pie_breakdown(ds: &Dataset, column: &str) -> Result<Vec<PieSlice>> {
    let index = column_index(ds, column)?;

    let mut slices: Vec<PieSlice> = Vec::new();
    let mut positions: HashMap<CellKey, usize> = HashMap::new();
    for cell in ds.column_cells(index).filter(|c| !c.is_missing()) {
        match positions.get(&cell.key()) {
            Some(&pos) => slices[pos].count += 1,
            None => {
                positions.insert(cell.key(), slices.len());
                slices.push(PieSlice {
                    label: cell.to_string(),
                    value: cell.clone(),
                    count: 1,
                });
            }
        }
    }

    debug!(column, distinct = slices.len(), "built pie breakdown");
    Ok(slices)
}

/// Pairs of `(x, y)` values; rows missing either value are dropped.
pub fn scatter_pairs(ds: &Dataset, x: &str, y: &str) -> Result<ScatterPlot> {
    let x_index = numeric_index(ds, x)?;
    let y_index = numeric_index(ds, y)?;

    let points = ds
        .column_cells(x_index)
        .zip(ds.column_cells(y_index))
        .filter_map(|(a, b)| Some((a.as_f64()?, b.as_f64()?)))
        .collect();

    Ok(ScatterPlot {
        x: x.to_string(),
        y: y.to_string(),
        points,
    })
}

/// The non-missing values of a numeric column, in row order.
pub fn histogram_values(ds: &Dataset, column: &str) -> Result<Vec<f64>> {
    let index = numeric_index(ds, column)?;
    Ok(ds.column_cells(index).filter_map(Cell::as_f64).collect())
}

fn column_index(ds: &Dataset, column: &str) -> Result<usize> {
    ds.column_index(column)
        .ok_or_else(|| SummaryError::ColumnNotFound {
            column: column.to_string(),
        })
}

fn numeric_index(ds: &Dataset, column: &str) -> Result<usize> {
    let index = column_index(ds, column)?;
    if !ds.is_numeric_column(index) {
        return Err(SummaryError::ColumnNotNumeric {
            column: column.to_string(),
        });
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            vec!["city".into(), "x".into(), "y".into(), "z".into()],
            vec![
                vec![Cell::text("a"), Cell::Number(1.0), Cell::Number(2.0), Cell::Number(0.0)],
                vec![Cell::text("b"), Cell::Missing, Cell::Number(4.0), Cell::Number(0.0)],
                vec![Cell::text("a"), Cell::Number(3.0), Cell::Number(6.0), Cell::Number(0.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_bar_series_takes_first_two_numeric() {
        let series = bar_series(&sample());
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].column, "x");
        assert_eq!(series[0].values, vec![Some(1.0), None, Some(3.0)]);
        assert_eq!(series[1].column, "y");
    }

    #[test]
    fn test_bar_series_without_numeric_columns() {
        let ds = Dataset::new(vec!["t".into()], vec![vec![Cell::text("v")]]).unwrap();
        assert!(bar_series(&ds).is_empty());
    }

    #[test]
    fn test_pie_counts_in_first_occurrence_order() {
        let slices = pie_breakdown(&sample(), "city").unwrap();
        let counts: Vec<(&str, usize)> = slices.iter().map(|s| (s.label.as_str(), s.count)).collect();
        assert_eq!(counts, vec![("a", 2), ("b", 1)]);
    }

    #[test]
    fn test_pie_skips_missing() {
        let slices = pie_breakdown(&sample(), "x").unwrap();
        assert_eq!(slices.iter().map(|s| s.count).sum::<usize>(), 2);
    }

    #[test]
    fn test_scatter_drops_incomplete_rows() {
        let plot = scatter_pairs(&sample(), "x", "y").unwrap();
        assert_eq!(plot.points, vec![(1.0, 2.0), (3.0, 6.0)]);
    }

    #[test]
    fn test_numeric_columns_are_checked() {
        assert_eq!(
            histogram_values(&sample(), "city"),
            Err(SummaryError::ColumnNotNumeric {
                column: "city".into()
            })
        );
        assert_eq!(
            scatter_pairs(&sample(), "x", "nope"),
            Err(SummaryError::ColumnNotFound {
                column: "nope".into()
            })
        );
    }

    #[test]
    fn test_histogram_values() {
        assert_eq!(histogram_values(&sample(), "x").unwrap(), vec![1.0, 3.0]);
    }
}
