use std::path::PathBuf;

use sweep_ingest::SourceFile;
use sweep_model::Dataset;
use sweep_summary::{ChartData, ColumnProfile};
use sweep_transform::CleaningOp;

/// Shape of the dataset after one cleaning step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub op: CleaningOp,
    pub rows: usize,
    pub columns: usize,
}

/// Result of processing one file.
#[derive(Debug)]
pub struct FileOutcome {
    pub source: SourceFile,
    pub rows_before: usize,
    pub columns_before: usize,
    pub steps: Vec<StepRecord>,
    pub dataset: Dataset,
    pub chart: Option<ChartData>,
    /// Written file, `None` on a dry run.
    pub output: Option<PathBuf>,
}

impl FileOutcome {
    pub fn rows_after(&self) -> usize {
        self.dataset.height()
    }

    pub fn columns_after(&self) -> usize {
        self.dataset.width()
    }
}

#[derive(Debug, Default)]
pub struct ProcessResult {
    pub files: Vec<FileOutcome>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}

/// What `preview` shows for one file.
#[derive(Debug)]
pub struct FilePreview {
    pub source: SourceFile,
    pub rows: usize,
    pub columns: usize,
    pub missing_cells: usize,
    pub head: Dataset,
    pub profiles: Vec<ColumnProfile>,
}

#[derive(Debug, Default)]
pub struct PreviewResult {
    pub files: Vec<FilePreview>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}
