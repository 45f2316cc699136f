//! End-to-end tests for the `gpatracker` binary

use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary with an isolated config directory
fn run(args: &[&str]) -> Output {
    let home = TempDir::new().expect("Failed to create temp dir");
    Command::new(env!("CARGO_BIN_EXE_gpatracker"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("APPDATA", home.path())
        .output()
        .expect("Failed to run gpatracker")
}

#[test]
fn json_query_stdout_is_valid_json() {
    let output = run(&[
        "--log-level",
        "debug",
        "--verbose",
        "query",
        "math",
        "--data",
        "samples/terms.json",
        "--format",
        "json",
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is JSON");
    let courses = value.as_object().expect("keyed object");
    assert_eq!(courses.len(), 2);
    assert!(courses.values().all(|c| c["subject"] == "MATH"));

    // Progress messages still reach stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Loaded 3 term(s)"));
}

#[test]
fn grouped_json_query_stdout_is_valid_json() {
    let output = run(&[
        "--debug",
        "query",
        "",
        "--data",
        "samples/terms.json",
        "--filter",
        "subject",
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let groups = value.as_object().expect("keyed object");
    assert!(groups.contains_key("CMPS"));
    assert!(groups.contains_key("MATH"));
}

#[test]
fn missing_snapshot_fails() {
    let output = run(&["query", "math", "--data", "samples/absent.json"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
