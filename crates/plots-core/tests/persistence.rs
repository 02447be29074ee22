// File: crates/plots-core/tests/persistence.rs
// Purpose: Collision-free figure and raw-data writes.

use plots_core::{Figure, OutputDirs, PlotError};
use tempfile::TempDir;

fn dirs() -> (TempDir, OutputDirs) {
    let tmp = TempDir::new().expect("tempdir");
    let dirs = OutputDirs::create(tmp.path()).expect("create output dirs");
    (tmp, dirs)
}

#[test]
fn repeated_figure_writes_count_up() {
    let (_tmp, dirs) = dirs();
    let fig = Figure::new((3.0, 2.0));

    let first = dirs.safe_figure_write("foo", ".pdf", &fig).unwrap();
    let second = dirs.safe_figure_write("foo", ".pdf", &fig).unwrap();
    let third = dirs.safe_figure_write("foo", ".pdf", &fig).unwrap();

    assert_eq!(first, dirs.figures.join("foo_0.pdf"));
    assert_eq!(second, dirs.figures.join("foo_1.pdf"));
    assert_eq!(third, dirs.figures.join("foo_2.pdf"));
    for p in [&first, &second, &third] {
        let bytes = std::fs::read(p).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "{} is not a PDF", p.display());
    }
}

#[test]
fn existing_file_is_skipped() {
    let (_tmp, dirs) = dirs();
    std::fs::write(dirs.figures.join("foo_0.pdf"), b"keep me").unwrap();

    let written = dirs.safe_figure_write("foo", ".pdf", &Figure::new((3.0, 2.0))).unwrap();
    assert_eq!(written, dirs.figures.join("foo_1.pdf"));
    assert_eq!(std::fs::read(dirs.figures.join("foo_0.pdf")).unwrap(), b"keep me");
}

#[test]
fn gap_after_delete_is_reused() {
    let (_tmp, dirs) = dirs();
    let fig = Figure::new((3.0, 2.0));
    dirs.safe_figure_write("foo", ".png", &fig).unwrap();
    let second = dirs.safe_figure_write("foo", ".png", &fig).unwrap();
    std::fs::remove_file(&second).unwrap();

    // smallest unused modifier wins
    let again = dirs.safe_figure_write("foo", ".png", &fig).unwrap();
    assert_eq!(again, dirs.figures.join("foo_1.png"));
    let bytes = std::fs::read(&again).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn unknown_suffix_writes_nothing() {
    let (_tmp, dirs) = dirs();
    let err = dirs.safe_figure_write("foo", ".svg", &Figure::new((3.0, 2.0))).unwrap_err();
    assert!(matches!(err, PlotError::UnsupportedFormat(_)));
    assert_eq!(std::fs::read_dir(&dirs.figures).unwrap().count(), 0);
}

#[test]
fn raw_writes_land_in_raw_dir() {
    let (_tmp, dirs) = dirs();
    let path = dirs.safe_datapoint_write("metrics", &serde_json::json!({"k": [1, 2]})).unwrap();
    assert_eq!(path, dirs.raw.join("metrics_0.json"));
    let back: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(back, serde_json::json!({"k": [1, 2]}));
}

#[test]
fn unwritable_directory_reports_path() {
    let tmp = TempDir::new().unwrap();
    let dirs = OutputDirs { figures: tmp.path().join("missing/plots"), raw: tmp.path().join("missing/raw") };
    let err = dirs.safe_datapoint_write("x", &Vec::<f64>::new()).unwrap_err();
    match err {
        PlotError::Io { path, .. } => assert!(path.ends_with("x_0.json")),
        other => panic!("expected I/O error, got {other:?}"),
    }
}
