//! Basic CLI tests for yoink
//!
//! Tests for command-line argument parsing, help output, version display,
//! and the startup dependency check.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn yoink() -> Command {
    Command::cargo_bin("yoink").unwrap()
}

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    yoink()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("--dashboard"))
        .stdout(predicate::str::contains(".yoink_last_path"));
}

#[test]
fn help_shell_snippet_honours_handoff_override() {
    yoink()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"file="${YOINK_HANDOFF_FILE:-$HOME/.yoink_last_path}""#,
        ))
        .stdout(predicate::str::contains(r#"rm -f "$file""#));
}

#[test]
fn help_short_flag_shows_usage() {
    yoink()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn help_documents_exit_codes_and_keys() {
    yoink()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXIT CODES:"))
        .stdout(predicate::str::contains("Ctrl+V"))
        .stdout(predicate::str::contains("Ctrl+H"));
}

#[test]
fn version_flag_shows_version() {
    yoink()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_short_flag_shows_version() {
    yoink()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Invalid Options (Exit Code 3)
// =============================================================================

#[test]
fn unknown_option_returns_exit_code_3() {
    yoink()
        .arg("--unknown-option")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn invalid_short_option_returns_exit_code_3() {
    yoink()
        .arg("-x")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn positional_argument_returns_exit_code_3() {
    yoink()
        .arg("src")
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn dashboard_flag_is_accepted() {
    yoink().args(["--dashboard", "--help"]).assert().success();
    yoink().args(["-d", "--help"]).assert().success();
}

// =============================================================================
// Dependency Check (Exit Code 2)
// =============================================================================

#[test]
fn missing_tools_are_listed_together() {
    let temp = TempDir::new().unwrap();
    yoink()
        .current_dir(temp.path())
        .env("PATH", temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("fzf, rg, bat"));
}

#[test]
fn dashboard_checks_tools_before_ui() {
    let temp = TempDir::new().unwrap();
    yoink()
        .arg("--dashboard")
        .current_dir(temp.path())
        .env("PATH", temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing binary dependencies"));
}
