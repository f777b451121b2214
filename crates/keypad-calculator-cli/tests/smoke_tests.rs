//! Smoke tests for the keypad-calc CLI
//!
//! These run the real binary headlessly; the interactive UI is only
//! checked through its help text since it needs a terminal.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the keypad-calc binary
fn keypad_calc() -> Command {
    Command::cargo_bin("keypad-calc").expect("keypad-calc binary should exist")
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    keypad_calc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    keypad_calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("keys"));
}

#[test]
fn test_tui_subcommand_help() {
    keypad_calc()
        .args(["tui", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-mouse"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_unknown_subcommand_fails() {
    keypad_calc().arg("frobnicate").assert().failure();
}

// ============================================================================
// Key Replay Tests
// ============================================================================

#[test]
fn test_keys_text_output() {
    keypad_calc()
        .args(["keys", "12+3="])
        .assert()
        .success()
        .stdout("12 + 3 = \n15\n");
}

#[test]
fn test_keys_chaining_left_to_right() {
    keypad_calc()
        .args(["keys", "9-4*2="])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("10\n"))
        .stdout(predicate::str::contains("5 × 2 = "));
}

#[test]
fn test_keys_division_by_zero() {
    keypad_calc()
        .args(["keys", "5/0="])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error"));
}

#[test]
fn test_keys_named_keys() {
    keypad_calc()
        .args(["keys", "123<<E"])
        .assert()
        .success()
        .stdout("\n1\n");
}

#[test]
fn test_keys_leading_operator() {
    keypad_calc()
        .args(["keys", "--", "-5="])
        .assert()
        .success()
        .stdout("0 - 5 = \n-5\n");
}

#[test]
fn test_keys_json_output() {
    let output = keypad_calc()
        .args(["keys", "7+3", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["display"], "3");
    assert_eq!(value["equation"], "7 + ");
    assert_eq!(value["activeOperator"], "add");
}

#[test]
fn test_keys_invalid_sequence() {
    keypad_calc()
        .args(["keys", "1+x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key: 'x'"));
}

#[test]
fn test_keys_requires_sequence() {
    keypad_calc().arg("keys").assert().failure();
}

#[test]
fn test_keys_quiet_has_clean_stderr() {
    keypad_calc()
        .args(["-q", "keys", "2*2="])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_keys_verbose_logs_with_target() {
    keypad_calc()
        .env_remove("RUST_LOG")
        .args(["-v", "keys", "2*2="])
        .assert()
        .success()
        .stdout("2 × 2 = \n4\n")
        .stderr(predicate::str::contains("keypad_calculator_cli::runner"))
        .stderr(predicate::str::contains("sequence replayed"));
}
