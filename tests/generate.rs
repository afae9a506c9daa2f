//! End-to-end tests for the generator: library pipeline and the
//! compiled binary's exit codes and streams.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use glyphgen::{run, MissingInput};

const FIXTURE: &str = r#"{
    "zebra": { "styles": ["solid"], "unicode": "f001" },
    "apple": { "styles": ["solid", "brands"], "unicode": "23" },
    "circle-arrow-left": { "styles": ["SOLID"], "unicode": "F8E8" },
    "500px": { "styles": ["solid"], "unicode": "26" },
    "pen": { "styles": ["regular"], "unicode": "f304" },
    "ghost": { "styles": ["solid"] },
    "blank": "nope"
}"#;

const EXPECTED: &str = concat!(
    "    APPLE('\\u0023'),\n",
    "    CIRCLE_ARROW_LEFT('\\uf8e8'),\n",
    "    ZEBRA('\\uf001'),\n",
    "    _500PX('\\u0026'),\n",
);

fn fixture_dir(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("icons.json"), contents).unwrap();
    dir
}

fn run_to_string(dir: &Path) -> (usize, String) {
    let mut buf = Vec::new();
    let count = run(dir, &mut buf).unwrap();
    (count, String::from_utf8(buf).unwrap())
}

#[test]
fn pipeline_filters_sorts_and_formats() {
    let dir = fixture_dir(FIXTURE);
    let (count, output) = run_to_string(dir.path());
    assert_eq!(count, 4);
    assert_eq!(output, EXPECTED);
}

#[test]
fn pipeline_is_idempotent() {
    let dir = fixture_dir(FIXTURE);
    let (_, first) = run_to_string(dir.path());
    let (_, second) = run_to_string(dir.path());
    assert_eq!(first, second);
}

#[test]
fn empty_icon_set_yields_empty_output() {
    let dir = fixture_dir("{}");
    let (count, output) = run_to_string(dir.path());
    assert_eq!(count, 0);
    assert_eq!(output, "");
}

#[test]
fn missing_file_reports_missing_input_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut buf = Vec::new();
    let err = run(dir.path(), &mut buf).unwrap_err();
    assert!(err.downcast_ref::<MissingInput>().is_some());
    assert!(buf.is_empty());
}

#[test]
fn binary_prints_sorted_declarations() {
    let dir = fixture_dir(FIXTURE);
    let output = Command::new(env!("CARGO_BIN_EXE_glyphgen"))
        .arg("--icons-dir")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED);
}

#[test]
fn binary_exits_1_with_diagnostic_when_input_is_missing() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_glyphgen"))
        .arg("--icons-dir")
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    let expected_path = dir.path().join("icons.json");
    assert_eq!(
        stderr,
        format!("icons.json not found at: {}\n", expected_path.display())
    );
}

#[test]
fn binary_succeeds_on_zero_qualifying_entries() {
    let dir = fixture_dir(r#"{ "pen": { "styles": ["regular"], "unicode": "f304" } }"#);
    let output = Command::new(env!("CARGO_BIN_EXE_glyphgen"))
        .arg("--icons-dir")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn binary_exits_nonzero_on_malformed_json() {
    let dir = fixture_dir("{ not json");
    let output = Command::new(env!("CARGO_BIN_EXE_glyphgen"))
        .arg("--icons-dir")
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}
