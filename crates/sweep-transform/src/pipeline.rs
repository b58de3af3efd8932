//! Named cleaning operations.
//!
//! [`CleaningOp`] is the closed set of operations a caller can request. Each
//! variant maps to one free function in this crate; [`apply`] dispatches.
//!
//! Operations parse from short step strings and deserialize from recipe
//! files:
//!
//! ```
//! use sweep_transform::{CleaningOp, FillMethod};
//!
//! let op: CleaningOp = "fill=median".parse()?;
//! assert_eq!(op, CleaningOp::Fill { method: FillMethod::Median });
//!
//! let op: CleaningOp = "select=name, age".parse()?;
//! assert_eq!(op, CleaningOp::Select { columns: vec!["name".into(), "age".into()] });
//! # Ok::<(), sweep_transform::TransformError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sweep_model::Dataset;
use tracing::info_span;

use crate::columns::{project_columns, standardize_columns};
use crate::dedupe::remove_duplicates;
use crate::error::{Result, TransformError};
use crate::impute::{FillMethod, fill_missing_with_report};
use crate::outliers::remove_outliers;

/// A single cleaning step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CleaningOp {
    /// Lower-case column names and replace spaces with underscores.
    Standardize,
    /// Remove exact duplicate rows.
    Dedupe,
    /// Fill missing numeric cells.
    Fill { method: FillMethod },
    /// Remove rows outside the IQR fences of any numeric column.
    #[serde(alias = "outliers")]
    RemoveOutliers,
    /// Keep only these columns, in this order.
    Select { columns: Vec<String> },
}

impl CleaningOp {
    /// Short step name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standardize => "standardize",
            Self::Dedupe => "dedupe",
            Self::Fill { .. } => "fill",
            Self::RemoveOutliers => "outliers",
            Self::Select { .. } => "select",
        }
    }

    /// Human-readable description for summaries.
    pub fn describe(&self) -> String {
        match self {
            Self::Standardize => "Standardize column names".to_string(),
            Self::Dedupe => "Remove duplicates".to_string(),
            Self::Fill { method } => format!("Fill missing values ({method})"),
            Self::RemoveOutliers => "Remove outliers".to_string(),
            Self::Select { columns } => format!("Select {} column(s)", columns.len()),
        }
    }
}

impl fmt::Display for CleaningOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fill { method } => write!(f, "fill={}", method.label().to_lowercase()),
            Self::Select { columns } => write!(f, "select={}", columns.join(",")),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for CleaningOp {
    type Err = TransformError;

    /// Parses `standardize`, `dedupe`, `fill=<method>`, `outliers` (or
    /// `remove_outliers`), or `select=<col>,<col>,...`.
    fn from_str(s: &str) -> Result<Self> {
        let (name, arg) = match s.split_once('=') {
            Some((name, arg)) => (name.trim(), Some(arg)),
            None => (s.trim(), None),
        };
        let invalid = |reason: &str| TransformError::InvalidOperation {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        match (name.to_ascii_lowercase().as_str(), arg) {
            ("standardize", None) => Ok(Self::Standardize),
            ("dedupe", None) => Ok(Self::Dedupe),
            ("outliers" | "remove_outliers", None) => Ok(Self::RemoveOutliers),
            ("fill", Some(method)) => Ok(Self::Fill {
                method: method.parse()?,
            }),
            ("fill", None) => Err(invalid("fill needs a method, e.g. fill=mean")),
            ("select", Some(columns)) => {
                let columns: Vec<String> = columns
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .collect();
                Ok(Self::Select { columns })
            }
            ("select", None) => Err(invalid("select needs columns, e.g. select=a,b")),
            ("standardize" | "dedupe" | "outliers" | "remove_outliers", Some(_)) => {
                Err(invalid("this step takes no argument"))
            }
            _ => Err(invalid(
                "expected standardize, dedupe, fill=<method>, outliers, or select=<columns>",
            )),
        }
    }
}

/// Applies one cleaning step, returning the cleaned dataset.
///
/// `ds` is borrowed: when the step fails the caller still holds the input and
/// can retry with a corrected step.
pub fn apply(ds: &Dataset, op: &CleaningOp) -> Result<Dataset> {
    let span = info_span!("clean", step = op.name());
    let _guard = span.enter();
    match op {
        CleaningOp::Standardize => standardize_columns(ds),
        CleaningOp::Dedupe => Ok(remove_duplicates(ds.clone())),
        CleaningOp::Fill { method } => Ok(fill_missing_with_report(ds.clone(), *method).0),
        CleaningOp::RemoveOutliers => Ok(remove_outliers(ds.clone())),
        CleaningOp::Select { columns } => project_columns(ds, columns),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweep_model::Cell;

    #[test]
    fn test_parse_steps() {
        assert_eq!("standardize".parse::<CleaningOp>(), Ok(CleaningOp::Standardize));
        assert_eq!(" Dedupe ".parse::<CleaningOp>(), Ok(CleaningOp::Dedupe));
        assert_eq!("outliers".parse::<CleaningOp>(), Ok(CleaningOp::RemoveOutliers));
        assert_eq!(
            "remove_outliers".parse::<CleaningOp>(),
            Ok(CleaningOp::RemoveOutliers)
        );
        assert_eq!(
            "fill=mode".parse::<CleaningOp>(),
            Ok(CleaningOp::Fill {
                method: FillMethod::Mode
            })
        );
    }

    #[test]
    fn test_parse_select_keeps_spaces_inside_names() {
        let op: CleaningOp = "select=First Name, age".parse().unwrap();
        assert_eq!(
            op,
            CleaningOp::Select {
                columns: vec!["First Name".to_string(), "age".to_string()]
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            "sort".parse::<CleaningOp>(),
            Err(TransformError::InvalidOperation { .. })
        ));
        assert!("fill".parse::<CleaningOp>().is_err());
        assert!("dedupe=yes".parse::<CleaningOp>().is_err());
        assert!("fill=average".parse::<CleaningOp>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for step in ["standardize", "dedupe", "fill=median", "outliers", "select=a,b"] {
            let op: CleaningOp = step.parse().unwrap();
            assert_eq!(op.to_string(), step);
        }
    }

    #[test]
    fn test_serde_tagged() {
        let op: CleaningOp = serde_json::from_str(r#"{"op":"fill","method":"median"}"#).unwrap();
        assert_eq!(
            op,
            CleaningOp::Fill {
                method: FillMethod::Median
            }
        );
        let json = serde_json::to_string(&CleaningOp::RemoveOutliers).unwrap();
        assert_eq!(json, r#"{"op":"remove_outliers"}"#);
    }

    #[test]
    fn test_serde_accepts_step_spelling() {
        let op: CleaningOp = serde_json::from_str(r#"{"op":"outliers"}"#).unwrap();
        assert_eq!(op, CleaningOp::RemoveOutliers);
    }

    #[test]
    fn test_apply_dispatch() {
        let ds = Dataset::new(
            vec!["Col A".into()],
            vec![vec![Cell::Number(1.0)], vec![Cell::Number(1.0)]],
        )
        .unwrap();

        let ds = apply(&ds, &CleaningOp::Standardize).unwrap();
        let ds = apply(&ds, &CleaningOp::Dedupe).unwrap();

        assert_eq!(ds.columns(), ["col_a"]);
        assert_eq!(ds.height(), 1);
    }

    #[test]
    fn test_apply_select_unknown_column() {
        let ds = Dataset::new(vec!["a".into()], vec![]).unwrap();
        let err = apply(
            &ds,
            &CleaningOp::Select {
                columns: vec!["b".into()],
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            TransformError::UnknownColumn {
                column: "b".to_string()
            }
        );
    }

    #[test]
    fn test_apply_retry_after_failed_step() {
        let ds = Dataset::new(
            vec!["name".into(), "age".into()],
            vec![vec![Cell::text("Ann"), Cell::Number(30.0)]],
        )
        .unwrap();
        let typo = CleaningOp::Select {
            columns: vec!["Name".into()],
        };
        let fixed = CleaningOp::Select {
            columns: vec!["name".into()],
        };

        assert!(apply(&ds, &typo).is_err());
        let selected = apply(&ds, &fixed).unwrap();

        assert_eq!(selected.columns(), ["name"]);
        assert_eq!(selected.rows(), [vec![Cell::text("Ann")]]);
        assert_eq!(ds.width(), 2);
    }
}
