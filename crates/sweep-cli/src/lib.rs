//! Library side of the `data-sweeper` command.
//!
//! Argument parsing and terminal output live in the binary; everything that
//! touches data (loading, cleaning, charting, exporting) is here so it can be
//! tested without a terminal.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
