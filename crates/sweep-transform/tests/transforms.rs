//! End-to-end behaviour of the cleaning operations on small datasets.

use sweep_model::{Cell, Dataset};
use sweep_transform::{
    CleaningOp, FillMethod, TransformError, apply, fill_missing, fill_missing_with_report,
    iqr_bounds, project_columns, remove_duplicates, remove_outliers, standardize_columns,
};

fn ages() -> Dataset {
    Dataset::new(
        vec!["age".to_string()],
        vec![
            vec![Cell::Number(10.0)],
            vec![Cell::Number(20.0)],
            vec![Cell::Missing],
            vec![Cell::Number(1000.0)],
        ],
    )
    .unwrap()
}

fn age_values(ds: &Dataset) -> Vec<Cell> {
    ds.column_cells(0).cloned().collect()
}

#[test]
fn mean_fill_uses_arithmetic_mean() {
    let ds = fill_missing(ages(), FillMethod::Mean);
    let filled = age_values(&ds)[2].as_f64().unwrap();
    assert!((filled - 1030.0 / 3.0).abs() < 1e-9);
    assert!((filled - 343.33).abs() < 0.01);
}

#[test]
fn median_fill_uses_middle_value() {
    let ds = fill_missing(ages(), FillMethod::Median);
    assert_eq!(
        age_values(&ds),
        vec![
            Cell::Number(10.0),
            Cell::Number(20.0),
            Cell::Number(20.0),
            Cell::Number(1000.0),
        ]
    );
}

#[test]
fn outliers_in_three_values_stay_within_fences() {
    // Q1 = 15, Q3 = 510 so the upper fence sits at 1252.5.
    let bounds = iqr_bounds(&[10.0, 20.0, 1000.0]).unwrap();
    assert_eq!(bounds.q1, 15.0);
    assert_eq!(bounds.q3, 510.0);
    assert_eq!(bounds.upper, 1252.5);

    let ds = remove_outliers(ages());
    assert_eq!(ds.height(), 4);
}

#[test]
fn median_fill_then_outliers_drops_extreme_row() {
    let ds = fill_missing(ages(), FillMethod::Median);
    let ds = remove_outliers(ds);

    assert_eq!(
        age_values(&ds),
        vec![Cell::Number(10.0), Cell::Number(20.0), Cell::Number(20.0)]
    );
}

#[test]
fn standardize_example_headers() {
    let ds = Dataset::new(
        vec!["First Name".to_string(), "Age".to_string()],
        vec![vec![Cell::text("Ann"), Cell::Number(31.0)]],
    )
    .unwrap();

    let ds = standardize_columns(&ds).unwrap();
    assert_eq!(ds.columns(), ["first_name", "age"]);
    assert_eq!(ds.rows()[0], vec![Cell::text("Ann"), Cell::Number(31.0)]);
}

#[test]
fn standardize_collision_is_rejected() {
    let ds = Dataset::new(vec!["First Name".to_string(), "first_name".to_string()], vec![])
        .unwrap();

    let err = standardize_columns(&ds).unwrap_err();
    assert_eq!(
        err,
        TransformError::DuplicateColumnAfterStandardization {
            first: "First Name".to_string(),
            second: "first_name".to_string(),
            standardized: "first_name".to_string(),
        }
    );
}

#[test]
fn text_column_is_never_filled() {
    let ds = Dataset::new(
        vec!["city".to_string(), "score".to_string()],
        vec![
            vec![Cell::text("Oslo"), Cell::Missing],
            vec![Cell::Missing, Cell::Number(4.0)],
            vec![Cell::text("Rome"), Cell::Number(4.0)],
        ],
    )
    .unwrap();

    let (ds, report) = fill_missing_with_report(ds, FillMethod::Mode);

    assert_eq!(ds.rows()[1][0], Cell::Missing);
    assert_eq!(ds.rows()[0][1], Cell::Number(4.0));
    assert_eq!(report.filled, vec![("score".to_string(), 4.0, 1)]);
    assert!(report.skipped.is_empty());
}

#[test]
fn all_missing_numeric_column_is_skipped() {
    let ds = Dataset::new(
        vec!["empty".to_string()],
        vec![vec![Cell::Missing], vec![Cell::Missing]],
    )
    .unwrap();

    let (ds, report) = fill_missing_with_report(ds, FillMethod::Mean);

    assert_eq!(ds.missing_count(0), 2);
    assert_eq!(report.skipped, vec!["empty".to_string()]);
    assert_eq!(report.cells_filled(), 0);
}

#[test]
fn dedupe_treats_missing_as_equal() {
    let ds = Dataset::new(
        vec!["a".to_string(), "b".to_string()],
        vec![
            vec![Cell::Number(1.0), Cell::Missing],
            vec![Cell::text("x"), Cell::Number(2.0)],
            vec![Cell::Number(1.0), Cell::Missing],
            vec![Cell::text("1"), Cell::Missing],
        ],
    )
    .unwrap();

    let ds = remove_duplicates(ds);

    assert_eq!(ds.height(), 3);
    assert_eq!(ds.rows()[2], vec![Cell::text("1"), Cell::Missing]);
}

#[test]
fn projection_reorders_and_rejects_unknown() {
    let ds = Dataset::new(
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
        vec![vec![Cell::Number(1.0), Cell::Number(2.0), Cell::Number(3.0)]],
    )
    .unwrap();

    let projected = project_columns(&ds, &["c", "a"]).unwrap();
    assert_eq!(projected.columns(), ["c", "a"]);
    assert_eq!(projected.rows()[0], vec![Cell::Number(3.0), Cell::Number(1.0)]);

    let err = project_columns(&ds, &["a", "z"]).unwrap_err();
    assert_eq!(
        err,
        TransformError::UnknownColumn {
            column: "z".to_string()
        }
    );
}

#[test]
fn steps_compose_in_any_order() {
    let ds = Dataset::new(
        vec!["Name".to_string(), "Score Value".to_string()],
        vec![
            vec![Cell::text("a"), Cell::Number(1.0)],
            vec![Cell::text("a"), Cell::Number(1.0)],
            vec![Cell::text("b"), Cell::Missing],
            vec![Cell::text("c"), Cell::Number(3.0)],
        ],
    )
    .unwrap();

    let steps: Vec<CleaningOp> = ["dedupe", "standardize", "fill=mean", "select=score_value"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();

    let ds = steps
        .iter()
        .try_fold(ds, |ds, op| apply(&ds, op))
        .unwrap();

    assert_eq!(ds.columns(), ["score_value"]);
    assert_eq!(
        age_values(&ds),
        vec![Cell::Number(1.0), Cell::Number(2.0), Cell::Number(3.0)]
    );
}

#[test]
fn recipe_steps_deserialize_from_toml() {
    #[derive(serde::Deserialize)]
    struct Recipe {
        steps: Vec<CleaningOp>,
    }

    let recipe: Recipe = toml::from_str(
        r#"
        steps = [
            { op = "standardize" },
            { op = "fill", method = "median" },
            { op = "select", columns = ["age"] },
            { op = "outliers" },
            { op = "remove_outliers" },
        ]
        "#,
    )
    .unwrap();

    assert_eq!(
        recipe.steps,
        vec![
            CleaningOp::Standardize,
            CleaningOp::Fill {
                method: FillMethod::Median
            },
            CleaningOp::Select {
                columns: vec!["age".to_string()]
            },
            CleaningOp::RemoveOutliers,
            CleaningOp::RemoveOutliers,
        ]
    );
}

#[test]
fn failed_step_leaves_dataset_usable() {
    let ds = Dataset::new(
        vec!["First Name".to_string(), "first_name".to_string()],
        vec![vec![Cell::text("Ann"), Cell::text("ann")]],
    )
    .unwrap();

    assert!(apply(&ds, &CleaningOp::Standardize).is_err());
    let picked = apply(
        &ds,
        &CleaningOp::Select {
            columns: vec!["First Name".to_string()],
        },
    )
    .unwrap();
    let ds = apply(&picked, &CleaningOp::Standardize).unwrap();

    assert_eq!(ds.columns(), ["first_name"]);
    assert_eq!(ds.rows(), [vec![Cell::text("Ann")]]);
}
