//! Tests that run the built `fitcalc` binary

use std::process::{Command, Output};
use tempfile::tempdir;

fn fitcalc(args: &[&str]) -> Output {
    // Empty HOME so no user config is picked up
    let home = tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_fitcalc"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_unknown_label_reports_once() {
    let output = fitcalc(&["calc", "XYZ", "1", "2", "3"]);
    assert!(output.status.success());

    let stdout = lines(&output.stdout);
    let stderr = lines(&output.stderr);

    assert_eq!(stdout, vec!["Unknown workout type XYZ".to_string()]);
    assert!(stderr.is_empty(), "unexpected stderr: {:?}", stderr);
}

#[test]
fn test_invalid_record_reports_once() {
    let output = fitcalc(&["calc", "RUN", "15000", "1"]);
    assert!(output.status.success());

    assert_eq!(
        lines(&output.stdout),
        vec!["Invalid record: RUN expects 3 values, got 2".to_string()]
    );
    assert!(lines(&output.stderr).is_empty());
}

#[test]
fn test_demo_prints_only_reports() {
    let output = fitcalc(&["demo"]);
    assert!(output.status.success());

    let stdout = lines(&output.stdout);
    assert_eq!(stdout.len(), 3);
    assert!(stdout.iter().all(|line| line.starts_with("Тип тренировки: ")));
    assert!(lines(&output.stderr).is_empty());
}
