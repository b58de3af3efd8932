use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sweep_cli::types::{FileOutcome, FilePreview, PreviewResult, ProcessResult};
use sweep_model::{Cell as DataCell, Dataset};

pub fn print_preview(result: &PreviewResult) {
    for file in &result.files {
        print_file_preview(file);
    }
    print_errors(&result.errors);
}

fn print_file_preview(file: &FilePreview) {
    println!(
        "File: {} ({:.2} KB, {})",
        file.source.name,
        file.source.size_kb(),
        file.source.format
    );
    println!(
        "Shape: {} rows x {} columns, {} missing cells",
        file.rows, file.columns, file.missing_cells
    );
    println!("{}", head_table(&file.head));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Present"),
        header_cell("Missing"),
        header_cell("Unique"),
    ]);
    apply_table_style(&mut table);
    for column in 2..5 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for profile in &file.profiles {
        let missing = if profile.missing > 0 {
            Cell::new(profile.missing).fg(Color::Yellow)
        } else {
            dim_cell(0)
        };
        table.add_row(vec![
            Cell::new(&profile.name),
            dim_cell(profile.kind()),
            Cell::new(profile.present),
            missing,
            Cell::new(profile.unique),
        ]);
    }
    println!("{table}");
}

fn head_table(head: &Dataset) -> Table {
    let mut table = Table::new();
    table.set_header(head.columns().iter().map(|c| header_cell(c)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for row in head.rows() {
        table.add_row(row.iter().map(value_cell).collect::<Vec<_>>());
    }
    table
}

fn value_cell(value: &DataCell) -> Cell {
    match value {
        DataCell::Missing => dim_cell("NA"),
        DataCell::Number(_) => Cell::new(value).set_alignment(CellAlignment::Right),
        DataCell::Text(text) => Cell::new(text),
    }
}

pub fn print_summary(result: &ProcessResult) {
    for file in &result.files {
        if let Some(chart) = &file.chart {
            println!("Chart data for {}:", file.source.name);
            match serde_json::to_string_pretty(chart) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("error: cannot encode chart data: {err}"),
            }
        }
    }

    if !result.files.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("File"),
            header_cell("Rows before"),
            header_cell("Rows after"),
            header_cell("Columns"),
            header_cell("Steps"),
            header_cell("Output"),
        ]);
        apply_summary_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        align_column(&mut table, 2, CellAlignment::Right);
        align_column(&mut table, 3, CellAlignment::Right);
        for file in &result.files {
            table.add_row(outcome_row(file));
        }
        println!("{table}");
    }

    print_errors(&result.errors);
}

fn outcome_row(file: &FileOutcome) -> Vec<Cell> {
    let removed = file.rows_before.saturating_sub(file.rows_after());
    let rows_after = if removed > 0 {
        Cell::new(format!("{} (-{removed})", file.rows_after())).fg(Color::Yellow)
    } else {
        Cell::new(file.rows_after())
    };
    let columns = if file.columns_after() == file.columns_before {
        Cell::new(file.columns_after())
    } else {
        Cell::new(format!("{} -> {}", file.columns_before, file.columns_after()))
    };
    let steps = if file.steps.is_empty() {
        dim_cell("none")
    } else {
        Cell::new(
            file.steps
                .iter()
                .map(|step| step.op.describe())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    };
    let output = match &file.output {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("dry run"),
    };
    vec![
        Cell::new(&file.source.name).add_attribute(Attribute::Bold),
        Cell::new(file.rows_before),
        rows_after,
        columns,
        steps,
        output,
    ]
}

fn print_errors(errors: &[String]) {
    if !errors.is_empty() {
        eprintln!("Errors:");
        for error in errors {
            eprintln!("- {error}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
