//! Lifecycle tests for the delimited-text exporter
//!
//! These tests cover the file-handle contract (modes, cancellation,
//! open failures) and the carrier-independence of the output: the same
//! logical matrix must export identically whatever type carries it.

use matwrite_rs::cancel::NeverCancel;
use matwrite_rs::export::{
    export_matrix, DelimitedTextExporter, ExportError, ExportOutcome, ExportSpec, Exporter,
    WriteMode,
};
use matwrite_rs::matrix::{MatrixSource, SliceMatrix};
use nalgebra::DMatrix;
use ndarray::Array2;
use std::fs;
use tempfile::tempdir;

mod common;
use common::{read_lines, CancelAfter};

// =================================================================================================
// Carrier independence
// =================================================================================================

#[test]
fn all_carriers_export_identical_bytes() {
    let dir = tempdir().unwrap();

    // logical [[1.5 -2.25 3], [0.125 4 -6.5]]
    let row_major = [1.5, -2.25, 3.0, 0.125, 4.0, -6.5];
    let col_major = [1.5, 0.125, -2.25, 4.0, 3.0, -6.5];

    let carriers: Vec<(&str, Box<dyn MatrixSource>)> = vec![
        (
            "nalgebra",
            Box::new(DMatrix::from_row_slice(2, 3, &row_major)),
        ),
        (
            "ndarray",
            Box::new(Array2::from_shape_vec((2, 3), row_major.to_vec()).unwrap()),
        ),
        (
            "nested",
            Box::new(vec![
                vec![1.5, -2.25, 3.0],
                vec![0.125, 4.0, -6.5],
            ]),
        ),
    ];

    let mut outputs = Vec::new();
    for (name, carrier) in &carriers {
        let path = dir.path().join(format!("{}.csv", name));
        export_matrix(&path, carrier.as_ref(), "%9.4f", ",", WriteMode::Truncate).unwrap();
        outputs.push(fs::read_to_string(&path).unwrap());
    }

    // slice views, both layouts
    for (name, view) in [
        ("slice_rm", SliceMatrix::row_major(&row_major, 2, 3).unwrap()),
        ("slice_cm", SliceMatrix::column_major(&col_major, 2, 3).unwrap()),
    ] {
        let path = dir.path().join(format!("{}.csv", name));
        export_matrix(&path, &view, "%9.4f", ",", WriteMode::Truncate).unwrap();
        outputs.push(fs::read_to_string(&path).unwrap());
    }

    for output in &outputs[1..] {
        assert_eq!(output, &outputs[0]);
    }
}

// =================================================================================================
// Write modes
// =================================================================================================

#[test]
fn fopen_style_mode_strings_drive_open_semantics() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("modes.csv");
    let matrix = vec![vec![7.0]];

    let rewrite: WriteMode = "w+".parse().unwrap();
    let append: WriteMode = "a+".parse().unwrap();

    export_matrix(&path, &matrix, "%.0f", ",", rewrite).unwrap();
    export_matrix(&path, &matrix, "%.0f", ",", append).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "7\n7\n");

    // rewriting discards the accumulated content
    export_matrix(&path, &matrix, "%.0f", ",", rewrite).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "7\n");
}

#[test]
fn append_creates_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fresh.csv");
    let matrix = vec![vec![1.0, 2.0]];

    let outcome = export_matrix(&path, &matrix, "%.1f", ",", WriteMode::Append).unwrap();

    assert_eq!(outcome.rows_written(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "1.0,2.0\n");
}

// =================================================================================================
// Cancellation
// =================================================================================================

#[test]
fn cancelled_file_is_reopenable_and_appendable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.csv");

    let rows = 50;
    let matrix = DMatrix::from_fn(rows, 2, |i, j| (i * 2 + j) as f64);
    let spec = ExportSpec::new(&path, "%.1f", ",", WriteMode::Truncate);

    let outcome = DelimitedTextExporter::default()
        .export(&matrix, &spec, &CancelAfter::rows(7))
        .unwrap();

    assert_eq!(outcome, ExportOutcome::Cancelled { rows_written: 7 });

    // the handle was released: the file reopens for reading and for append
    let lines = read_lines(&path);
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[6], "12.0,13.0");

    let tail = vec![vec![99.0, 99.0]];
    export_matrix(&path, &tail, "%.1f", ",", WriteMode::Append).unwrap();
    assert_eq!(read_lines(&path).len(), 8);
}

#[test]
fn cancellation_on_final_poll_keeps_all_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("full.csv");
    let matrix = DMatrix::from_element(3, 3, 1.0);
    let spec = ExportSpec::new(&path, "%.1f", ",", WriteMode::Truncate);

    // probe fires only after every row is already written
    let outcome = DelimitedTextExporter::default()
        .export(&matrix, &spec, &CancelAfter::rows(3))
        .unwrap();

    // the poll after the final row observes cancellation, so the outcome is
    // Cancelled with all rows present; one poll later and it would complete
    assert_eq!(outcome.rows_written(), 3);
    assert_eq!(read_lines(&path).len(), 3);

    let relaxed = DelimitedTextExporter::default()
        .export(&matrix, &spec, &NeverCancel)
        .unwrap();
    assert_eq!(relaxed, ExportOutcome::Completed { rows_written: 3 });
}

// =================================================================================================
// Open failures
// =================================================================================================

#[test]
fn unreachable_directory_fails_before_any_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir").join("out.csv");
    let matrix = vec![vec![1.0]];

    let err = export_matrix(&path, &matrix, "%.1f", ",", WriteMode::Truncate).unwrap_err();

    match err {
        ExportError::Open { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Open error, got {:?}", other),
    }
    assert!(!path.exists());
    assert!(!dir.path().join("no").exists());
}

#[test]
fn open_failure_under_append_mode_also_reports_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent").join("out.csv");
    let matrix = vec![vec![1.0]];

    let err = export_matrix(&path, &matrix, "%.1f", ",", WriteMode::Append).unwrap_err();
    assert!(matches!(err, ExportError::Open { .. }));
}
