//! CSV reading.

mod reader;

pub use reader::read_csv;
