use std::fs;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn run_dashboard(out: &std::path::Path, extra: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("cf-outlook").unwrap();
    cmd.arg("run").arg("--out").arg(out).args(extra);
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn run_writes_requested_files() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("dash");
    let stdout = run_dashboard(&out, &["--json", "--tsv"]);
    assert!(stdout.contains("2035: 1,715 patients, $565,950,000"));
    assert!(stdout.contains("warnings:"));

    let v: Value = serde_json::from_slice(&fs::read(out.join("dashboard.json")).unwrap()).unwrap();
    assert_eq!(v["tool"], "cf-outlook");
    assert_eq!(v["forecast"]["rows"].as_array().unwrap().len(), 10);
    assert!(out.join("states.tsv").exists());
    assert!(out.join("forecast.tsv").exists());
}

#[test]
fn run_without_output_flags_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("dash");
    run_dashboard(&out, &[]);
    assert!(!out.exists());
}

#[test]
fn run_outputs_are_deterministic() {
    let tmp = TempDir::new().unwrap();
    let out1 = tmp.path().join("a");
    let out2 = tmp.path().join("b");
    run_dashboard(&out1, &["--json", "--tsv", "--price", "200000"]);
    run_dashboard(&out2, &["--json", "--tsv", "--price", "200000"]);
    for name in ["dashboard.json", "states.tsv", "forecast.tsv"] {
        assert_eq!(
            fs::read(out1.join(name)).unwrap(),
            fs::read(out2.join(name)).unwrap(),
            "{} differs",
            name
        );
    }
}

#[test]
fn forecast_command_prints_tsv() {
    let mut cmd = Command::cargo_bin("cf-outlook").unwrap();
    cmd.args(["forecast", "--format", "tsv", "--year5", "0", "--year10", "0"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[1..].iter().all(|l| l.ends_with("\t0\t0")));
}

#[test]
fn forecast_command_rejects_invalid_unclamped_input() {
    let mut cmd = Command::cargo_bin("cf-outlook").unwrap();
    cmd.args(["forecast", "--no-clamp", "--year10", "120"]);
    cmd.assert().failure();
}

#[test]
fn states_command_prints_json() {
    let mut cmd = Command::cargo_bin("cf-outlook").unwrap();
    cmd.args(["states", "--format", "json"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let v: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 51);
    assert_eq!(v[0]["state"], "California");
}
