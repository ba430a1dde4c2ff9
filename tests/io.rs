#![forbid(unsafe_code)]
use restbudget::{analyze, io, AllocationInput};
use std::fs;
use tempfile::tempdir;

#[test]
fn load_input_from_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.json");
    fs::write(
        &path,
        r#"{"worker_count": 12, "day_count": 5, "max_rest_days": 7}"#,
    )
    .unwrap();
    let input = io::load_input_json(&path).unwrap();
    assert_eq!(input, AllocationInput::new(12, 5, 7).unwrap());
}

#[test]
fn load_rejects_invalid_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.json");
    fs::write(
        &path,
        r#"{"worker_count": 0, "day_count": 5, "max_rest_days": 7}"#,
    )
    .unwrap();
    let err = io::load_input_json(&path).unwrap_err();
    assert!(err.to_string().contains("worker_count must be positive"));

    assert!(io::load_input_json(dir.path().join("missing.json")).is_err());
}

#[test]
fn export_result_as_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("result.json");
    let r = analyze(AllocationInput::default()).unwrap();
    io::export_result_json(&path, &r).unwrap();

    let v: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(v["theoretical_min_rest_days"], 410);
    assert_eq!(v["is_feasible"], true);
    assert_eq!(v["input"]["worker_count"], 336);
}

#[test]
fn export_targets_as_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("targets.csv");
    let r = analyze(AllocationInput::default()).unwrap();
    io::export_targets_csv(&path, &r).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 337);
    assert_eq!(lines[0], "worker,work_days,rest_days");
    assert_eq!(lines[1], "0,20,2");
    assert_eq!(lines[336], "335,21,1");
}
