//! Per-cell type inference.

use sweep_model::Cell;

/// Field values that load as missing.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true if the (trimmed) value is a missing-value marker.
pub fn is_na_token(value: &str) -> bool {
    NA_TOKENS.contains(&value.trim())
}

/// Infers a cell from raw field text.
///
/// Missing markers become `Missing`, anything that parses as a float becomes
/// `Number`, and the rest is kept verbatim as `Text`.
pub fn infer_cell(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if is_na_token(trimmed) {
        return Cell::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => Cell::number(value),
        Err(_) => Cell::Text(raw.to_string()),
    }
}
