use std::path::PathBuf;

use anyhow::{Result, bail};
use tracing::{error, info};

use sweep_cli::config::Recipe;
use sweep_cli::pipeline::{ExportOptions, ProcessOptions, preview_file, process_file};
use sweep_cli::types::{PreviewResult, ProcessResult};
use sweep_model::FileFormat;
use sweep_summary::ChartRequest;

use crate::cli::{ChartKindArg, PreviewArgs, ProcessArgs};

/// Default directory for cleaned files.
const DEFAULT_OUTPUT_DIR: &str = "cleaned";

pub fn run_preview(args: &PreviewArgs) -> PreviewResult {
    let mut result = PreviewResult::default();
    for path in &args.files {
        match preview_file(path, args.rows) {
            Ok(preview) => result.files.push(preview),
            Err(err) => {
                error!(path = %path.display(), "{err:#}");
                result.errors.push(format!("{}: {err:#}", path.display()));
            }
        }
    }
    result.has_errors = !result.errors.is_empty();
    result
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let options = process_options(args)?;
    info!(
        files = args.files.len(),
        steps = options.steps.len(),
        dry_run = options.export.is_none(),
        "processing files"
    );

    let mut result = ProcessResult::default();
    for path in &args.files {
        match process_file(path, &options) {
            Ok(outcome) => result.files.push(outcome),
            Err(err) => {
                error!(path = %path.display(), "{err:#}");
                result.errors.push(format!("{}: {err:#}", path.display()));
            }
        }
    }
    result.has_errors = !result.errors.is_empty();
    Ok(result)
}

/// Merges the recipe (if any) with command-line flags; flags win.
fn process_options(args: &ProcessArgs) -> Result<ProcessOptions> {
    let recipe = match &args.recipe {
        Some(path) => Recipe::load(path)?,
        None => Recipe::default(),
    };

    let rename = args.rename.clone().or(recipe.export.rename);
    if rename.is_some() && args.files.len() > 1 {
        bail!("--rename needs exactly one input file, got {}", args.files.len());
    }

    let mut steps = recipe.steps;
    steps.extend(args.steps.iter().cloned());

    let export = (!args.dry_run).then(|| ExportOptions {
        format: args
            .to
            .map(FileFormat::from)
            .or(recipe.export.format)
            .unwrap_or(FileFormat::Csv),
        rename,
        output_dir: args
            .output_dir
            .clone()
            .or(recipe.export.output_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
    });

    Ok(ProcessOptions {
        steps,
        chart: chart_request(args)?,
        export,
    })
}

fn chart_request(args: &ProcessArgs) -> Result<Option<ChartRequest>> {
    let Some(kind) = args.chart else {
        return Ok(None);
    };
    let request = match kind {
        ChartKindArg::Bar => ChartRequest::Bar,
        ChartKindArg::Pie | ChartKindArg::Histogram => {
            let Some(column) = args.column.clone() else {
                bail!("--chart pie and --chart histogram need --column");
            };
            if matches!(kind, ChartKindArg::Pie) {
                ChartRequest::Pie { column }
            } else {
                ChartRequest::Histogram { column }
            }
        }
        ChartKindArg::Scatter => match (args.x.clone(), args.y.clone()) {
            (Some(x), Some(y)) => ChartRequest::Scatter { x, y },
            _ => bail!("--chart scatter needs --x and --y"),
        },
    };
    Ok(Some(request))
}
