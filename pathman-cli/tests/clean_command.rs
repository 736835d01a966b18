//! Integration tests for the `clean` command.
//!
//! Prompts cannot be driven from tests, so these exercise `--yes`,
//! `--dry-run` and the refusal to prompt without a terminal.

#![cfg(unix)]

mod common;

use common::TestEnv;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::symlink;

#[test]
fn test_clean_nothing_to_do() {
    let env = TestEnv::new().init();
    env.add(&env.executable("pm-ok"), &[]);

    env.command()
        .args(["clean", "--yes"])
        .assert()
        .success()
        .stdout("No broken symlinks or missing directories found.\n");
    assert!(env.front().join("pm-ok").is_symlink());
}

#[test]
fn test_clean_yes_removes_everything_found() {
    let env = TestEnv::new().init();
    env.add(&env.executable("pm-ok"), &[]);
    symlink("/nonexistent/pm-gone", env.back().join("pm-gone")).unwrap();
    let dir = env.create_dir("vanished");
    env.add(&dir, &[]);
    fs::remove_dir(&dir).unwrap();

    env.command()
        .args(["clean", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed: Remove 'pm-gone' (from back)"))
        .stdout(predicate::str::contains("Removed: Remove directory"))
        .stdout(predicate::str::contains("Successfully cleaned up 2 item(s)."));

    assert!(fs::symlink_metadata(env.back().join("pm-gone")).is_err());
    assert!(env.front().join("pm-ok").is_symlink());
    assert!(env.config_json().get("managed_directories").is_none());
}

#[test]
fn test_clean_dry_run_keeps_items() {
    let env = TestEnv::new().init();
    symlink("/nonexistent/pm-gone", env.front().join("pm-gone")).unwrap();

    env.command()
        .args(["clean", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would remove: Remove 'pm-gone' (from front)"));
    assert!(fs::symlink_metadata(env.front().join("pm-gone")).is_ok());
}

#[test]
fn test_clean_without_terminal_needs_yes() {
    let env = TestEnv::new().init();
    symlink("/nonexistent/pm-gone", env.front().join("pm-gone")).unwrap();

    env.command()
        .arg("clean")
        .write_stdin("")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("--yes"));
    assert!(fs::symlink_metadata(env.front().join("pm-gone")).is_ok());
}
