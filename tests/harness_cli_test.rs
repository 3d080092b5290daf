//! Integration tests for the `perf-primer` timing harness binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_harness(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_perf-primer"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to spawn perf-primer")
}

fn elapsed_millis(line: &str) -> Option<u128> {
    line.strip_prefix("Elapsed time was ")?
        .strip_suffix(" ms.")?
        .parse()
        .ok()
}

#[test]
fn test_bound_ten_prints_one_elapsed_line() {
    let dir = tempdir().unwrap();
    let output = run_harness(dir.path(), &["10"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "unexpected stdout: {stdout:?}");
    assert!(elapsed_millis(lines[0]).is_some(), "bad line: {:?}", lines[0]);
}

#[test]
fn test_various_bounds() {
    let dir = tempdir().unwrap();
    for bound in ["0", "1", "2", "5000"] {
        let output = run_harness(dir.path(), &[bound]);
        assert!(output.status.success(), "bound {bound} failed");
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(stdout.lines().count(), 1);
        assert!(elapsed_millis(stdout.trim_end()).is_some());
    }
}

#[test]
fn test_non_numeric_bound_fails() {
    let dir = tempdir().unwrap();
    let output = run_harness(dir.path(), &["abc"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid bound 'abc'"));
}

#[test]
fn test_negative_bound_fails() {
    let dir = tempdir().unwrap();
    let output = run_harness(dir.path(), &["-3"]);

    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Elapsed time"));
}

#[test]
fn test_missing_bound_fails() {
    let dir = tempdir().unwrap();
    let output = run_harness(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("missing bound"));
}

#[test]
fn test_config_file_is_honored() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("perf-primer.toml"),
        r#"
        [logging]
        level = "debug"

        [harness]
        startup_delay_ms = 50
    "#,
    )
    .unwrap();

    let output = run_harness(dir.path(), &["10"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(!String::from_utf8(output.stderr).unwrap().is_empty());
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("perf-primer.toml"), "[harness\n").unwrap();

    let output = run_harness(dir.path(), &["10"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("failed to parse TOML"));
}
