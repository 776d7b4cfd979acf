//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_args_shows_help() {
    cmd().assert().failure().stderr(
        predicate::str::contains("Usage:").or(predicate::str::contains("Commands:")),
    );
}

// =============================================================================
// Verdict Command (the golden-harness contract)
// =============================================================================

#[test]
fn verdict_balanced_prints_success() {
    cmd()
        .arg("verdict")
        .write_stdin("{[()]}\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("Success\n"));
}

#[test]
fn verdict_empty_line_prints_success() {
    cmd()
        .arg("verdict")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("Success\n"));
}

#[test]
fn verdict_mismatch_prints_closer_position() {
    cmd()
        .arg("verdict")
        .write_stdin("{[}\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("3\n"));
}

#[test]
fn verdict_mismatch_with_filler_text() {
    cmd()
        .arg("verdict")
        .write_stdin("foo(bar[baz)\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("12\n"));
}

#[test]
fn verdict_crossed_pairs_fail_at_first_closer() {
    cmd()
        .arg("verdict")
        .write_stdin("([)]\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("3\n"));
}

#[test]
fn verdict_stranded_openers_report_earliest() {
    cmd()
        .arg("verdict")
        .write_stdin("(foo[bar\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("1\n"));
}

#[test]
fn verdict_handles_missing_newline() {
    cmd()
        .arg("verdict")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::diff("Success\n"));
}

#[test]
fn verdict_handles_crlf() {
    cmd()
        .arg("verdict")
        .write_stdin("{[}\r\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("3\n"));
}

#[test]
fn verdict_json_is_tagged() {
    let output = cmd()
        .args(["verdict", "--json"])
        .write_stdin("([)]\n")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("verdict --json should output valid JSON");
    assert_eq!(json["verdict"], "failure");
    assert_eq!(json["position"], 3);
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn check_balanced_file_passes() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("ok.txt");
    fs::write(&file, "{[()]}\nfn main() {}\nplain text\n").unwrap();

    cmd()
        .args(["check", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS:"))
        .stdout(predicate::str::contains("3 lines"));
}

#[test]
fn check_unbalanced_file_fails_with_locations() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("bad.txt");
    fs::write(&file, "[]\n{[}\nfoo(bar[baz)\n").unwrap();

    cmd()
        .args(["check", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(":2: unbalanced at column 3"))
        .stderr(predicate::str::contains(":3: unbalanced at column 12"))
        .stderr(predicate::str::contains("2 of 3 lines unbalanced"));
}

#[test]
fn check_reads_stdin_with_dash() {
    cmd()
        .args(["check", "-"])
        .write_stdin("(]\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(":1: unbalanced at column 2"));
}

#[test]
fn check_json_reports_failures() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("bad.txt");
    fs::write(&file, "(\n").unwrap();

    let output = cmd()
        .args(["check", "--json", file.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("check --json should output valid JSON");
    assert_eq!(json["pass"], false);
    assert_eq!(json["lines"], 1);
    assert_eq!(json["failures"][0]["line"], 1);
    assert_eq!(json["failures"][0]["position"], 1);
}

#[test]
fn check_json_passes_clean_file() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("ok.txt");
    fs::write(&file, "no brackets at all\n").unwrap();

    let output = cmd()
        .args(["check", "--json", file.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["pass"], true);
    assert!(json["failures"].as_array().unwrap().is_empty());
}

#[test]
fn check_missing_file_reports_error() {
    cmd()
        .args(["check", "/nonexistent/path.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_help_shows_command_options() {
    cmd()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}
