//! Integration tests for the manly CLI.
//!
//! The end-to-end tests shell out to the real man(1) and are skipped when it
//! is not installed, so the suite also passes on minimal containers.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use assert_cmd::Command;
use predicates::prelude::*;

fn man_available() -> bool {
    which::which("man").is_ok()
}

// ============================================================================
// Help, version, and exit-code tests (don't require man)
// ============================================================================

#[test]
fn test_no_arguments_prints_usage_and_succeeds() {
    Command::cargo_bin("manly")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_help_describes_flag_lookup() {
    Command::cargo_bin("manly")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("man page"))
        .stdout(predicate::str::contains("--no-color"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_version() {
    Command::cargo_bin("manly")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_command_without_flags_exits_2() {
    Command::cargo_bin("manly")
        .unwrap()
        .arg("ls")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Please supply flags."));
}

// ============================================================================
// End-to-end tests (require a working man installation)
// ============================================================================

#[test]
fn test_missing_manpage_exits_16_with_no_output() {
    if !man_available() {
        return;
    }

    Command::cargo_bin("manly")
        .unwrap()
        .args(["definitely-not-a-real-command-xyz", "-x"])
        .assert()
        .code(16)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unmatched_flag_prints_banner_and_notice() {
    if !man_available() {
        return;
    }
    // Skip when even man's own page is missing (stripped-down images).
    if std::process::Command::new("man")
        .arg("man")
        .output()
        .map(|o| !o.status.success())
        .unwrap_or(true)
    {
        return;
    }

    Command::cargo_bin("manly")
        .unwrap()
        .args(["-n", "man", "--zz-definitely-absent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching for: man --zz-definitely-absent"))
        .stdout(predicate::str::contains("No flags found."));
}

#[test]
fn test_known_flag_is_found_and_bolded() {
    if !man_available() {
        return;
    }
    if std::process::Command::new("man")
        .arg("man")
        .output()
        .map(|o| !o.status.success())
        .unwrap_or(true)
    {
        return;
    }

    // man(1) documents -k on every platform we care about.
    Command::cargo_bin("manly")
        .unwrap()
        .args(["man", "-k"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching for: man -k"))
        .stdout(predicate::str::contains("\u{1b}[1m-k\u{1b}[0m"));
}
