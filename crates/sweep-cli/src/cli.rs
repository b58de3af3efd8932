//! CLI argument definitions for Data Sweeper.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sweep_model::FileFormat;
use sweep_transform::CleaningOp;

#[derive(Parser)]
#[command(
    name = "data-sweeper",
    version,
    about = "Clean CSV and Excel files: dedupe, fill gaps, drop outliers, convert",
    long_about = "Load CSV or Excel files, apply cleaning steps in the order given,\n\
                  extract chart data, and export the result as CSV or Excel.\n\n\
                  Steps: standardize, dedupe, fill=mean|median|mode, outliers, select=a,b"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show file info, the first rows, and a column profile.
    Preview(PreviewArgs),

    /// Clean files and export the results.
    Process(ProcessArgs),
}

#[derive(Args)]
pub struct PreviewArgs {
    /// CSV or Excel files to inspect.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Number of rows to show.
    #[arg(long = "rows", default_value_t = 5)]
    pub rows: usize,
}

#[derive(Args)]
pub struct ProcessArgs {
    /// CSV or Excel files to clean.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Cleaning step, repeatable; applied in the order given.
    #[arg(long = "step", value_name = "STEP", value_parser = parse_step)]
    pub steps: Vec<CleaningOp>,

    /// TOML recipe whose steps run before any --step.
    #[arg(long = "recipe", value_name = "PATH")]
    pub recipe: Option<PathBuf>,

    /// Export format (default: csv, or the recipe's format).
    #[arg(long = "to", value_enum)]
    pub to: Option<FormatArg>,

    /// Output file name without extension (single input file only).
    #[arg(long = "rename", value_name = "NAME")]
    pub rename: Option<String>,

    /// Directory for cleaned files (default: ./cleaned).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print chart data as JSON.
    #[arg(long = "chart", value_enum)]
    pub chart: Option<ChartKindArg>,

    /// Column for pie and histogram charts.
    #[arg(long = "column", value_name = "COLUMN")]
    pub column: Option<String>,

    /// X column for scatter charts.
    #[arg(long = "x", value_name = "COLUMN")]
    pub x: Option<String>,

    /// Y column for scatter charts.
    #[arg(long = "y", value_name = "COLUMN")]
    pub y: Option<String>,

    /// Clean and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

fn parse_step(value: &str) -> Result<CleaningOp, String> {
    value.parse().map_err(|e: sweep_transform::TransformError| e.to_string())
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Csv,
    Excel,
}

impl From<FormatArg> for FileFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => FileFormat::Csv,
            FormatArg::Excel => FileFormat::Excel,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChartKindArg {
    Bar,
    Pie,
    Scatter,
    Histogram,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
