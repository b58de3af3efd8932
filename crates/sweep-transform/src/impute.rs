//! Missing-value imputation for numeric columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sweep_model::{Cell, Dataset};
use tracing::{debug, warn};

use crate::error::{Result, TransformError};
use crate::stats;

/// Statistic used to fill missing numeric cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMethod {
    Mean,
    Median,
    Mode,
}

impl FillMethod {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mean => "Mean",
            Self::Median => "Median",
            Self::Mode => "Mode",
        }
    }

    /// Computes this statistic over a column's present values.
    ///
    /// Fails with [`TransformError::NoDataForImputation`] when `values` is empty.
    pub fn statistic(&self, column: &str, values: &[f64]) -> Result<f64> {
        let value = match self {
            Self::Mean => stats::mean(values),
            Self::Median => stats::median(values),
            Self::Mode => stats::mode(values),
        };
        value.ok_or_else(|| TransformError::NoDataForImputation {
            column: column.to_string(),
        })
    }
}

impl fmt::Display for FillMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FillMethod {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            "mode" => Ok(Self::Mode),
            _ => Err(TransformError::InvalidOperation {
                input: s.to_string(),
                reason: "expected mean, median, or mode".to_string(),
            }),
        }
    }
}

/// What a fill pass did, per column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillReport {
    /// `(column, fill value, cells filled)` for every column that had gaps.
    pub filled: Vec<(String, f64, usize)>,
    /// Numeric columns left untouched because they hold no values at all.
    pub skipped: Vec<String>,
}

impl FillReport {
    /// Total number of cells filled.
    pub fn cells_filled(&self) -> usize {
        self.filled.iter().map(|(_, _, count)| count).sum()
    }
}

/// Fills missing cells of every numeric column with the column statistic.
///
/// See [`fill_missing_with_report`].
pub fn fill_missing(ds: Dataset, method: FillMethod) -> Dataset {
    fill_missing_with_report(ds, method).0
}

/// Fills missing cells of every numeric column and reports what changed.
///
/// Columns containing any text are untouched. A numeric column with no
/// values at all keeps its missing cells and is listed in
/// [`FillReport::skipped`].
pub fn fill_missing_with_report(mut ds: Dataset, method: FillMethod) -> (Dataset, FillReport) {
    let mut report = FillReport::default();

    let plan: Vec<(usize, String, Vec<f64>, usize)> = {
        let view = ds.numeric_view();
        view.columns()
            .into_iter()
            .map(|col| {
                (
                    col.index,
                    col.name.to_string(),
                    view.present_values(col.index),
                    ds.missing_count(col.index),
                )
            })
            .filter(|(_, _, _, missing)| *missing > 0)
            .collect()
    };

    for (index, name, values, missing) in plan {
        match method.statistic(&name, &values) {
            Ok(fill) => {
                ds.map_column(index, |cell| {
                    if cell.is_missing() {
                        *cell = Cell::Number(fill);
                    }
                });
                debug!(column = %name, method = %method, fill, missing, "filled missing values");
                report.filled.push((name, fill, missing));
            }
            Err(err) => {
                warn!(column = %name, "{err}; leaving missing values in place");
                report.skipped.push(name);
            }
        }
    }

    (ds, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age_dataset() -> Dataset {
        Dataset::new(
            vec!["name".into(), "age".into()],
            vec![
                vec![Cell::text("a"), Cell::Number(10.0)],
                vec![Cell::text("b"), Cell::Number(20.0)],
                vec![Cell::Missing, Cell::Missing],
                vec![Cell::text("d"), Cell::Number(1000.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_mean_fill() {
        let ds = fill_missing(age_dataset(), FillMethod::Mean);
        let filled = ds.rows()[2][1].as_f64().unwrap();
        assert!((filled - 1030.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_median_fill() {
        let ds = fill_missing(age_dataset(), FillMethod::Median);
        assert_eq!(ds.rows()[2][1], Cell::Number(20.0));
    }

    #[test]
    fn test_mode_fill_tie_takes_smallest() {
        let ds = fill_missing(age_dataset(), FillMethod::Mode);
        assert_eq!(ds.rows()[2][1], Cell::Number(10.0));
    }

    #[test]
    fn test_text_columns_untouched() {
        let ds = fill_missing(age_dataset(), FillMethod::Mean);
        assert_eq!(ds.rows()[2][0], Cell::Missing);
    }

    #[test]
    fn test_all_missing_column_is_skipped() {
        let ds = Dataset::new(
            vec!["empty".into(), "n".into()],
            vec![
                vec![Cell::Missing, Cell::Number(1.0)],
                vec![Cell::Missing, Cell::Missing],
            ],
        )
        .unwrap();

        let (ds, report) = fill_missing_with_report(ds, FillMethod::Median);

        assert_eq!(ds.rows()[0][0], Cell::Missing);
        assert_eq!(ds.rows()[1][0], Cell::Missing);
        assert_eq!(ds.rows()[1][1], Cell::Number(1.0));
        assert_eq!(report.skipped, vec!["empty".to_string()]);
        assert_eq!(report.cells_filled(), 1);
    }

    #[test]
    fn test_statistic_no_data() {
        assert_eq!(
            FillMethod::Mean.statistic("x", &[]),
            Err(TransformError::NoDataForImputation {
                column: "x".to_string()
            })
        );
    }

    #[test]
    fn test_parse_fill_method() {
        assert_eq!("Median".parse::<FillMethod>().unwrap(), FillMethod::Median);
        assert!("average".parse::<FillMethod>().is_err());
    }
}
