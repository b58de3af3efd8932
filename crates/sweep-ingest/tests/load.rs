//! Integration tests for loading files from disk.

use std::io::{Cursor, Write};

use sweep_ingest::{IngestError, load, load_file};
use sweep_model::{Cell, FileFormat};
use tempfile::Builder;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn temp_file(suffix: &str, content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content).unwrap();
    file
}

#[test]
fn test_load_file_csv() {
    let file = temp_file(".csv", b"First Name,Age\nAnn,10\nBob,NA\n");

    let (source, ds) = load_file(file.path()).unwrap();

    assert_eq!(source.format, FileFormat::Csv);
    assert_eq!(source.size_bytes, 29);
    assert_eq!(ds.columns(), ["First Name", "Age"]);
    assert_eq!(ds.rows()[1][1], Cell::Missing);
}

#[test]
fn test_load_file_unsupported_extension() {
    let file = temp_file(".json", b"[]");

    let result = load_file(file.path());

    assert!(matches!(
        result,
        Err(IngestError::UnsupportedFormat { ref extension }) if extension == ".json"
    ));
}

#[test]
fn test_load_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_file(&dir.path().join("absent.csv"));
    assert!(matches!(result, Err(IngestError::FileRead { .. })));
}

#[test]
fn test_load_numeric_inference_per_cell() {
    let ds = load(b"a,b,c\n1,x,\n2.5,3,\n", FileFormat::Csv).unwrap();

    let view = ds.numeric_view();
    // "b" holds one text cell, "c" is entirely missing
    assert_eq!(view.names(), vec!["a", "c"]);
}

#[test]
fn test_load_latin1_csv() {
    let ds = load(b"city\nM\xFCnchen\n", FileFormat::Csv).unwrap();
    assert_eq!(ds.rows()[0][0], Cell::text("München"));
}

#[test]
fn test_load_excel_garbage_is_parse_error() {
    let err = load(b"PK\x03\x04 truncated", FileFormat::Excel).unwrap_err();
    assert!(err.is_parse_error());
}

/// Workbook whose `A2` holds serial 45306 under built-in date format 14.
fn workbook_with_date_cell() -> Vec<u8> {
    const RELS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;
    const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;
    const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;
    const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><cellXfs count="2"><xf numFmtId="0"></xf><xf numFmtId="14" applyNumberFormat="1"></xf></cellXfs></styleSheet>"#;
    const SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData><row r="1"><c r="A1" t="inlineStr"><is><t>visit</t></is></c><c r="B1" t="inlineStr"><is><t>score</t></is></c></row><row r="2"><c r="A2" s="1"><v>45306</v></c><c r="B2"><v>7</v></c></row></sheetData></worksheet>"#;

    let parts = [
        ("_rels/.rels", RELS),
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/styles.xml", STYLES),
        ("xl/worksheets/sheet1.xml", SHEET),
    ];
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in parts {
        zip.start_file(name, SimpleFileOptions::default()).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

#[test]
fn test_load_excel_date_cell_as_iso_text() {
    let ds = load(&workbook_with_date_cell(), FileFormat::Excel).unwrap();

    assert_eq!(ds.columns(), ["visit", "score"]);
    assert_eq!(ds.rows(), [vec![Cell::text("2024-01-15"), Cell::Number(7.0)]]);
}
