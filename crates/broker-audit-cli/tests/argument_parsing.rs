//! Focused CLI argument parsing tests.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn version_command_succeeds() {
    Command::cargo_bin("broker-audit")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(concat!(
            "broker-audit ",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains("broker-audit-cli").not());
}

#[test]
fn version_flag_shows_version() {
    Command::cargo_bin("broker-audit")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("broker-audit"));
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("broker-audit")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("acls"))
        .stdout(predicate::str::contains("super-users"))
        .stdout(predicate::str::contains("srvr"))
        .stdout(predicate::str::contains("topic-config"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn missing_subcommand_fails() {
    Command::cargo_bin("broker-audit").unwrap().assert().failure();
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("broker-audit")
        .unwrap()
        .arg("describe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn acls_help_shows_options() {
    Command::cargo_bin("broker-audit")
        .unwrap()
        .args(["acls", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--audit"))
        .stdout(predicate::str::contains("--project"));
}

#[test]
fn acls_rejects_unknown_format() {
    Command::cargo_bin("broker-audit")
        .unwrap()
        .args(["acls", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn config_show_rejects_unknown_format() {
    Command::cargo_bin("broker-audit")
        .unwrap()
        .args(["config", "show", "--format", "xml"])
        .assert()
        .failure();
}

#[test]
fn alter_check_requires_topic() {
    Command::cargo_bin("broker-audit")
        .unwrap()
        .arg("alter-check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn missing_input_file_fails() {
    Command::cargo_bin("broker-audit")
        .unwrap()
        .args(["acls", "/nonexistent/acls.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

// ============================================================================
// Global Options
// ============================================================================

#[test]
fn no_color_flag_works_with_version() {
    Command::cargo_bin("broker-audit")
        .unwrap()
        .args(["--no-color", "version"])
        .assert()
        .success();
}

#[test]
fn no_color_after_subcommand() {
    Command::cargo_bin("broker-audit")
        .unwrap()
        .args(["messages", "--no-color"])
        .write_stdin("Message #0\n")
        .assert()
        .success();
}
