//! CSV serialization.

use std::borrow::Cow;

use csv::{Terminator, WriterBuilder};
use sweep_model::{Cell, Dataset, format_number};

use crate::error::{OutputError, Result};

/// Writes `ds` as CSV: a header line, then one line per row.
///
/// Missing cells are empty fields and numbers use their shortest
/// round-trip form. A dataset without columns produces no output.
pub fn write_csv(ds: &Dataset) -> Result<Vec<u8>> {
    if ds.width() == 0 {
        return Ok(Vec::new());
    }

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(ds.columns())?;
    for row in ds.rows() {
        writer.write_record(row.iter().map(field))?;
    }

    writer
        .into_inner()
        .map_err(|e| OutputError::Io(e.into_error()))
}

fn field(cell: &Cell) -> Cow<'_, [u8]> {
    match cell {
        Cell::Number(n) => Cow::Owned(format_number(*n).into_bytes()),
        Cell::Text(s) => Cow::Borrowed(s.as_bytes()),
        Cell::Missing => Cow::Borrowed(b""),
    }
}
