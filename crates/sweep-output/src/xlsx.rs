//! Minimal Office Open XML workbook writer.
//!
//! The workbook has one worksheet, `Sheet1`. Text is written as inline
//! strings so no shared-string table is needed; numbers are plain numeric
//! cells; missing cells are simply absent.

use std::io::{Cursor, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use sweep_model::{Cell, Dataset, format_number};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{OutputError, Result};

/// Characters an Excel cell can hold.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Rows per worksheet, header included.
const MAX_ROWS: usize = 1_048_576;

/// Columns per worksheet.
const MAX_COLUMNS: usize = 16_384;

/// SpreadsheetML namespace.
const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

/// Writes `ds` as a single-sheet `.xlsx` workbook.
///
/// Fails with [`OutputError::Serialization`] for text containing characters
/// XML 1.0 forbids, text longer than [`MAX_CELL_CHARS`], and non-finite
/// numbers. Fails with [`OutputError::TooLarge`] past Excel's sheet limits.
pub fn write_xlsx(ds: &Dataset) -> Result<Vec<u8>> {
    check_dimensions(ds)?;
    let sheet = sheet_xml(ds)?;

    let parts: [(&str, &[u8]); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
        ("_rels/.rels", ROOT_RELS.as_bytes()),
        ("xl/workbook.xml", WORKBOOK.as_bytes()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.as_bytes()),
        ("xl/worksheets/sheet1.xml", sheet.as_slice()),
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, data) in parts {
        zip.start_file(name, options)?;
        zip.write_all(data)?;
    }
    Ok(zip.finish()?.into_inner())
}

fn check_dimensions(ds: &Dataset) -> Result<()> {
    if ds.width() > MAX_COLUMNS {
        return Err(OutputError::TooLarge {
            format: "Excel",
            message: format!("{} columns, limit is {MAX_COLUMNS}", ds.width()),
        });
    }
    if ds.height() + 1 > MAX_ROWS {
        return Err(OutputError::TooLarge {
            format: "Excel",
            message: format!("{} rows, limit is {}", ds.height(), MAX_ROWS - 1),
        });
    }
    Ok(())
}

fn sheet_xml(ds: &Dataset) -> Result<Vec<u8>> {
    let mut xml = Writer::new(Vec::new());
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut root = BytesStart::new("worksheet");
    root.push_attribute(("xmlns", SPREADSHEET_NS));
    xml.write_event(Event::Start(root))?;
    xml.write_event(Event::Start(BytesStart::new("sheetData")))?;

    start_row(&mut xml, 1)?;
    for (col, name) in ds.columns().iter().enumerate() {
        write_text(&mut xml, &cell_reference(col, 1), name)?;
    }
    xml.write_event(Event::End(BytesEnd::new("row")))?;

    for (idx, row) in ds.rows().iter().enumerate() {
        let row_number = idx + 2;
        start_row(&mut xml, row_number)?;
        for (col, cell) in row.iter().enumerate() {
            let reference = cell_reference(col, row_number);
            match cell {
                Cell::Number(n) => write_number(&mut xml, &reference, *n)?,
                Cell::Text(s) => write_text(&mut xml, &reference, s)?,
                Cell::Missing => {}
            }
        }
        xml.write_event(Event::End(BytesEnd::new("row")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("sheetData")))?;
    xml.write_event(Event::End(BytesEnd::new("worksheet")))?;
    Ok(xml.into_inner())
}

fn start_row(xml: &mut Writer<Vec<u8>>, number: usize) -> Result<()> {
    let number = number.to_string();
    let mut row = BytesStart::new("row");
    row.push_attribute(("r", number.as_str()));
    xml.write_event(Event::Start(row))?;
    Ok(())
}

fn write_text(xml: &mut Writer<Vec<u8>>, reference: &str, text: &str) -> Result<()> {
    check_text(reference, text)?;

    let mut cell = BytesStart::new("c");
    cell.push_attribute(("r", reference));
    cell.push_attribute(("t", "inlineStr"));
    xml.write_event(Event::Start(cell))?;
    xml.write_event(Event::Start(BytesStart::new("is")))?;
    let mut t = BytesStart::new("t");
    t.push_attribute(("xml:space", "preserve"));
    xml.write_event(Event::Start(t))?;
    xml.write_event(Event::Text(BytesText::new(text)))?;
    xml.write_event(Event::End(BytesEnd::new("t")))?;
    xml.write_event(Event::End(BytesEnd::new("is")))?;
    xml.write_event(Event::End(BytesEnd::new("c")))?;
    Ok(())
}

fn write_number(xml: &mut Writer<Vec<u8>>, reference: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(OutputError::serialization(
            reference,
            format!("{value} is not a finite number"),
        ));
    }

    let mut cell = BytesStart::new("c");
    cell.push_attribute(("r", reference));
    xml.write_event(Event::Start(cell))?;
    xml.write_event(Event::Start(BytesStart::new("v")))?;
    xml.write_event(Event::Text(BytesText::new(&format_number(value))))?;
    xml.write_event(Event::End(BytesEnd::new("v")))?;
    xml.write_event(Event::End(BytesEnd::new("c")))?;
    Ok(())
}

fn check_text(reference: &str, text: &str) -> Result<()> {
    if let Some(bad) = text.chars().find(|&c| !is_xml_char(c)) {
        return Err(OutputError::serialization(
            reference,
            format!("character U+{:04X} is not allowed in XML", u32::from(bad)),
        ));
    }
    let length = text.chars().count();
    if length > MAX_CELL_CHARS {
        return Err(OutputError::serialization(
            reference,
            format!("{length} characters, limit is {MAX_CELL_CHARS}"),
        ));
    }
    Ok(())
}

/// XML 1.0 `Char` production, minus surrogates which `char` cannot hold.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

/// A1-style reference for a zero-based column and one-based row.
fn cell_reference(col: usize, row: usize) -> String {
    format!("{}{row}", column_letters(col))
}

fn column_letters(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(char::from(b'A' + (index % 26) as u8));
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}
