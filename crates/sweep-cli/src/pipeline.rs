//! Per-file processing: load, clean, chart, export.
//!
//! Every function here handles exactly one file and reports failures through
//! `anyhow` with the file and step named in the context chain. Callers decide
//! whether a failure stops anything else; the commands never let one file
//! abort another.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sweep_ingest::{SourceFile, load_file};
use sweep_model::{Dataset, FileFormat};
use sweep_output::ExportedFile;
use sweep_summary::{ChartData, ChartRequest, chart, missing_cells, profile_columns};
use sweep_transform::{CleaningOp, apply};

use crate::types::{FileOutcome, FilePreview, StepRecord};

/// Where and how to write a cleaned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: FileFormat,
    /// Output stem; defaults to the source file's stem.
    pub rename: Option<String>,
    pub output_dir: PathBuf,
}

/// Everything `process` does to a file after loading it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessOptions {
    pub steps: Vec<CleaningOp>,
    pub chart: Option<ChartRequest>,
    /// `None` for a dry run.
    pub export: Option<ExportOptions>,
}

/// Loads a file, picking the format from its extension.
pub fn ingest(path: &Path) -> Result<(SourceFile, Dataset)> {
    let (source, dataset) = load_file(path).context("load")?;
    info!(
        file = %source.name,
        format = %source.format,
        rows = dataset.height(),
        columns = dataset.width(),
        "loaded file"
    );
    Ok((source, dataset))
}

/// Applies `steps` in order, recording the shape after each one.
pub fn clean(mut dataset: Dataset, steps: &[CleaningOp]) -> Result<(Dataset, Vec<StepRecord>)> {
    let mut records = Vec::with_capacity(steps.len());
    for op in steps {
        dataset = apply(&dataset, op).with_context(|| format!("step '{op}'"))?;
        info!(
            step = %op,
            rows = dataset.height(),
            columns = dataset.width(),
            "applied step"
        );
        records.push(StepRecord {
            op: op.clone(),
            rows: dataset.height(),
            columns: dataset.width(),
        });
    }
    Ok((dataset, records))
}

/// Exports `dataset` and writes it to the configured directory.
pub fn output(dataset: &Dataset, source: &SourceFile, options: &ExportOptions) -> Result<PathBuf> {
    let stem = options.rename.as_deref().unwrap_or_else(|| source.stem());
    let file = ExportedFile::build(dataset, stem, options.format)
        .with_context(|| format!("export {}", options.format))?;
    let path = file
        .write_to(&options.output_dir)
        .with_context(|| format!("write {}", options.output_dir.join(&file.file_name).display()))?;
    info!(path = %path.display(), bytes = file.bytes.len(), "wrote output");
    Ok(path)
}

/// Runs the whole `process` flow for one file.
pub fn process_file(path: &Path, options: &ProcessOptions) -> Result<FileOutcome> {
    let span = info_span!("file", path = %path.display());
    let _guard = span.enter();

    let (source, dataset) = ingest(path)?;
    let rows_before = dataset.height();
    let columns_before = dataset.width();

    let (dataset, steps) = clean(dataset, &options.steps)?;

    let chart_data: Option<ChartData> = options
        .chart
        .as_ref()
        .map(|request| chart(&dataset, request))
        .transpose()
        .context("chart")?;

    let written = options
        .export
        .as_ref()
        .map(|export| output(&dataset, &source, export))
        .transpose()?;

    Ok(FileOutcome {
        source,
        rows_before,
        columns_before,
        steps,
        dataset,
        chart: chart_data,
        output: written,
    })
}

/// Loads a file and gathers what `preview` displays.
pub fn preview_file(path: &Path, rows: usize) -> Result<FilePreview> {
    let span = info_span!("file", path = %path.display());
    let _guard = span.enter();

    let (source, dataset) = ingest(path)?;
    Ok(FilePreview {
        rows: dataset.height(),
        columns: dataset.width(),
        missing_cells: missing_cells(&dataset),
        profiles: profile_columns(&dataset),
        head: dataset.head(rows),
        source,
    })
}
