#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("restbudget-cli").unwrap()
}

#[test]
fn demo_run_without_arguments() {
    cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("Theoretical minimum total rest days: 410"))
        .stdout(predicate::str::contains("✅ feasible"));
}

#[test]
fn analyze_with_observed_total() {
    cli()
        .args(["analyze", "--observed", "2430"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wasted rest days: 2020"));
}

#[test]
fn analyze_rejects_zero_workers() {
    cli()
        .args(["analyze", "--workers=0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "invalid input: worker_count must be positive",
        ));
}

#[test]
fn targets_listing() {
    cli()
        .args(["targets", "--workers", "3", "--days", "2", "--max-rest", "1"])
        .assert()
        .success()
        .stdout("0 1 1\n1 2 0\n2 2 0\n");
}

fn write_input(dir: &Path) -> String {
    let path = dir.join("input.json");
    fs::write(
        &path,
        r#"{"worker_count": 12, "day_count": 5, "max_rest_days": 7}"#,
    )
    .unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn input_file_wins_over_flags() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path());
    cli()
        .args(["analyze", "--workers", "1", "--input", input.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workers: 12\n"))
        .stdout(predicate::str::contains("Max rest days: 7\n"));
}

#[test]
fn analyze_exports_json() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path());
    let out = dir.path().join("result.json");
    cli()
        .args(["analyze", "--input", input.as_str(), "--out-json"])
        .arg(&out)
        .assert()
        .success();

    let v: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
    assert_eq!(v["input"]["worker_count"], 12);
    assert_eq!(v["base_work_days"], 4);
    assert_eq!(v["workers_at_base"], 7);
    assert_eq!(v["theoretical_min_rest_days"], 7);
    assert_eq!(v["is_feasible"], true);
}

#[test]
fn targets_export_csv() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path());
    let out = dir.path().join("targets.csv");
    cli()
        .args(["targets", "--input", input.as_str(), "--out-csv"])
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "worker,work_days,rest_days");
    assert_eq!(lines[7], "6,4,1");
    assert_eq!(lines[8], "7,5,0");
}
