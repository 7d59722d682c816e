//! CLI integration tests

use std::fs;
use std::process::Command;

fn run_cli(args: &[&str]) -> std::process::Output {
    let mut full_args = vec!["run", "-p", "insights-cli", "--"];
    full_args.extend_from_slice(args);
    Command::new("cargo")
        .args(&full_args)
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = run_cli(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(stdout.contains("parse"), "Should show parse command");
    assert!(stdout.contains("summarize"), "Should show summarize command");
    assert!(stdout.contains("watch"), "Should show watch command");
    assert!(stdout.contains("--format"), "Should show format option");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = run_cli(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("cins"), "Should show binary name");
}

/// Test decoding a binary-suffix quantity
#[test]
fn test_parse_quantity() {
    let output = run_cli(&["parse", "2Gi", "--format", "json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Parse should succeed");
    assert!(
        stdout.contains("2147483648"),
        "Should print the decoded value, got: {}",
        stdout
    );
}

/// Test that scientific notation is rejected
#[test]
fn test_parse_rejects_scientific_notation() {
    let output = run_cli(&["parse", "10e3"]);

    assert!(!output.status.success(), "Scientific notation should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cannot decode"),
        "Should explain the failure, got: {}",
        stderr
    );
}

/// Test summarizing a snapshot directory
#[test]
fn test_summarize_snapshot_dir() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(
        dir.path().join("nodes.json"),
        r#"{ "items": [ { "metadata": { "name": "n1" },
             "status": { "allocatable": { "cpu": "2", "memory": "8Gi" },
                         "conditions": [ { "type": "Ready", "status": "True" } ] } } ] }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("node-metrics.json"),
        r#"{ "items": [ { "metadata": { "name": "n1" },
             "usage": { "cpu": "1", "memory": "2Gi" } } ] }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("pods.json"),
        r#"{ "items": [ { "metadata": { "name": "web" },
             "status": { "phase": "Running" } } ] }"#,
    )
    .unwrap();

    let dir_arg = dir.path().to_string_lossy().to_string();
    let output = run_cli(&["summarize", "--dir", &dir_arg, "--format", "json"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Summarize should succeed");
    assert!(stdout.contains("node_count"), "Should emit node counts");
    assert!(stdout.contains("ready"), "Should emit the ready series");
    assert!(stdout.contains("running"), "Should emit the running bucket");
}

/// Test summarize with a missing snapshot directory
#[test]
fn test_summarize_missing_dir() {
    let output = run_cli(&["summarize", "--dir", "/nonexistent/snapshots"]);

    assert!(!output.status.success(), "Missing directory should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("nodes.json"),
        "Should name the missing file, got: {}",
        stderr
    );
}

/// Test invalid command error handling
#[test]
fn test_invalid_command() {
    let output = run_cli(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid"),
        "Should show error message"
    );
}

/// Test missing required argument error handling
#[test]
fn test_missing_argument() {
    let output = run_cli(&["parse"]);

    assert!(!output.status.success(), "Missing argument should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("required") || stderr.contains("error"),
        "Should show error about missing argument"
    );
}
