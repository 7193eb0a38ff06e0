//! Integration tests for the `jsonck` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the check and
//! stats subcommands through the actual binary, including stdin piping, file
//! input, parser options and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to a file under tests/fixtures.
fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn jsonck() -> Command {
    Command::cargo_bin("jsonck").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_valid_stdin() {
    jsonck()
        .arg("check")
        .write_stdin(r#"{"name":"Alice","age":30}"#)
        .assert()
        .success()
        .stdout("ok: object\n");
}

#[test]
fn check_valid_file() {
    jsonck()
        .args(["check", "-i", &fixture("sample.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: object"));
}

#[test]
fn check_scalar_document() {
    jsonck()
        .arg("check")
        .write_stdin("  \"just a string\"\n")
        .assert()
        .success()
        .stdout("ok: string\n");
}

#[test]
fn check_invalid_file_reports_position() {
    jsonck()
        .args(["check", "-i", &fixture("invalid.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in"))
        .stderr(predicate::str::contains(
            "trailing comma before closing bracket at line 3, column 25",
        ));
}

#[test]
fn check_empty_stdin() {
    jsonck()
        .arg("check")
        .write_stdin("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty input"));
}

#[test]
fn check_trailing_characters() {
    jsonck()
        .arg("check")
        .write_stdin(r#"{"a":1}x"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("trailing characters at line 1, column 8"));
}

#[test]
fn check_missing_file() {
    jsonck()
        .args(["check", "-i", "/nonexistent/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Parser options
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn max_depth_flag_limits_nesting() {
    jsonck()
        .args(["--max-depth", "2", "check"])
        .write_stdin("[[[1]]]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nesting exceeds maximum depth of 2"));
}

#[test]
fn config_file_sets_options() {
    jsonck()
        .args(["--config", &fixture("strict.json"), "check", "-i", &fixture("sample.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nesting exceeds maximum depth of 2"));
}

#[test]
fn flag_overrides_config_file() {
    jsonck()
        .args([
            "--config",
            &fixture("strict.json"),
            "--max-depth",
            "8",
            "check",
            "-i",
            &fixture("sample.json"),
        ])
        .assert()
        .success();
}

#[test]
fn invalid_config_file_is_reported() {
    jsonck()
        .args(["--config", &fixture("invalid.json"), "check"])
        .write_stdin("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parser config"));
}

#[test]
fn max_depth_flag_above_ceiling_is_rejected() {
    jsonck()
        .args(["--max-depth", "100000", "check"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"))
        .stderr(predicate::str::contains("100000"));
}

#[test]
fn max_depth_flag_at_ceiling_is_accepted() {
    jsonck()
        .args(["--max-depth", "1024", "check"])
        .write_stdin("[[[1]]]")
        .assert()
        .success();
}

#[test]
fn config_max_depth_above_ceiling_is_rejected() {
    jsonck()
        .args(["--config", &fixture("deep_config.json"), "check"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_depth 1000000 in"))
        .stderr(predicate::str::contains("exceeds the supported maximum of 1024"));
}

#[test]
fn control_characters_rejected_unless_allowed() {
    jsonck()
        .arg("check")
        .write_stdin("\"a\tb\"")
        .assert()
        .failure()
        .stderr(predicate::str::contains("U+0009"));

    jsonck()
        .args(["--allow-control-chars", "check"])
        .write_stdin("\"a\tb\"")
        .assert()
        .success();
}

// ─────────────────────────────────────────────────────────────────────────────
// stats subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stats_reports_counts() {
    jsonck()
        .args(["stats", "-i", &fixture("sample.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("nulls:     1"))
        .stdout(predicate::str::contains("booleans:  1"))
        .stdout(predicate::str::contains("numbers:   4"))
        .stdout(predicate::str::contains("strings:   4"))
        .stdout(predicate::str::contains("arrays:    2"))
        .stdout(predicate::str::contains("objects:   2"))
        .stdout(predicate::str::contains("total:     14"))
        .stdout(predicate::str::contains("max depth: 3"));
}

#[test]
fn stats_fails_on_invalid_input() {
    jsonck()
        .arg("stats")
        .write_stdin("[1, 2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected end of input"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Help
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    jsonck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("stats"));
}
