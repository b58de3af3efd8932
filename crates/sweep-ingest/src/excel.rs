//! Excel (`.xlsx`) parsing into a dataset.

use std::io::Cursor;

use calamine::{Data, ExcelDateTime, Reader, Xlsx};
use chrono::NaiveTime;
use sweep_model::{Cell, Dataset, FileFormat, format_number};

use crate::error::{IngestError, Result};
use crate::header::repair_headers;
use crate::infer::infer_cell;

/// Reads the first worksheet of an `.xlsx` workbook into a dataset.
///
/// The sheet's first row is the header. Numeric cells become numbers, string
/// cells go through the same inference as CSV fields, booleans become
/// `"True"`/`"False"` text, and empty or error cells are missing. Cells
/// styled as dates become ISO text (`2024-01-15`, or `2024-01-15 08:30:00`
/// when a time of day is present).
pub fn read_excel(bytes: &[u8]) -> Result<Dataset> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IngestError::NoWorksheet)??;

    if range.is_empty() {
        return Err(IngestError::EmptyFile {
            format: FileFormat::Excel,
        });
    }

    let mut sheet_rows = range.rows();
    let header_row = sheet_rows.next().ok_or(IngestError::EmptyFile {
        format: FileFormat::Excel,
    })?;
    let columns = repair_headers(header_row.iter().map(header_text).collect());

    let rows: Vec<Vec<Cell>> = sheet_rows
        .map(|row| row.iter().map(excel_cell).collect())
        .collect();
    tracing::trace!(rows = rows.len(), columns = columns.len(), "read worksheet");

    Dataset::new(columns, rows).map_err(|e| IngestError::Parse {
        format: FileFormat::Excel,
        message: e.to_string(),
    })
}

fn header_text(value: &Data) -> String {
    match value {
        Data::String(s) => s.clone(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Empty => String::new(),
        Data::DateTime(dt) => date_text(dt).unwrap_or_else(|| format_number(dt.as_f64())),
        other => other.to_string(),
    }
}

fn excel_cell(value: &Data) -> Cell {
    match value {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::number(*f),
        Data::String(s) => infer_cell(s),
        Data::Bool(b) => Cell::text(if *b { "True" } else { "False" }),
        Data::Empty | Data::Error(_) => Cell::Missing,
        Data::DateTime(dt) => date_text(dt).map_or_else(|| Cell::number(dt.as_f64()), Cell::Text),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s.as_str()),
    }
}

/// ISO rendering of a date-styled serial. Durations and out-of-range serials
/// yield `None`.
fn date_text(dt: &ExcelDateTime) -> Option<String> {
    if !dt.is_datetime() {
        return None;
    }
    let ts = dt.as_datetime()?;
    let text = if ts.time() == NaiveTime::MIN {
        ts.format("%Y-%m-%d").to_string()
    } else {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    };
    Some(text)
}
