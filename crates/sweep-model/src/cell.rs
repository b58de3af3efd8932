//! Cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single value in a [`Dataset`](crate::Dataset).
///
/// `PartialEq` is structural (`Missing == Missing`), which is what dataset
/// comparison wants. Statistics never look at `Missing`; use [`Cell::as_f64`]
/// to get at the numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    /// Build a numeric cell, mapping NaN to `Missing`.
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Self::Missing
        } else {
            Self::Number(value)
        }
    }

    /// Build a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns true for `Missing`.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns true for `Text`.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Numeric value, if this is a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Text value, if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Hashable identity used for duplicate detection and frequency counts.
    pub fn key(&self) -> CellKey {
        match self {
            Self::Number(value) => CellKey::Number(number_bits(*value)),
            Self::Text(value) => CellKey::Text(value.clone()),
            Self::Missing => CellKey::Missing,
        }
    }
}

/// Renders the cell the way it is written to CSV: `Missing` is empty.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::Text(value) => f.write_str(value),
            Self::Missing => Ok(()),
        }
    }
}

/// Value identity of a [`Cell`] with `Eq + Hash`.
///
/// Numbers compare by value with `-0.0` folded into `0.0`, and `Missing`
/// equals `Missing`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellKey {
    Missing,
    Number(u64),
    Text(String),
}

fn number_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Formats a number with the shortest decimal text that parses back to the
/// same `f64` (`10`, `0.5`, `343.3333333333333`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
