//! Integration tests for the `list` command.

#![cfg(unix)]

mod common;

use common::TestEnv;
use predicates::prelude::*;

/// An environment with two symlinks and one managed directory.
fn populated() -> (TestEnv, std::path::PathBuf) {
    let env = TestEnv::new().init();
    env.add(&env.executable("pm-zed"), &["--priority", "front"]);
    env.add(&env.executable("pm-alpha"), &["--priority", "back"]);
    let dir = env.create_dir("opt-bin");
    env.add(&dir, &["--priority", "front"]);
    (env, dir)
}

#[test]
fn test_list_compact_files_before_directories() {
    let (env, dir) = populated();
    let expected = format!("pm-alpha\npm-zed\n{}\n", dir.display());
    env.command().arg("list").assert().success().stdout(expected);
}

#[test]
fn test_list_by_priority() {
    let (env, dir) = populated();
    let expected = format!("{}\npm-zed\npm-alpha\n", dir.display());
    env.command()
        .args(["ls", "--by-priority"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_list_filters() {
    let (env, _dir) = populated();

    env.command()
        .args(["list", "--priority", "back"])
        .assert()
        .success()
        .stdout("pm-alpha\n");

    env.command()
        .args(["list", "--type", "file", "--priority", "front"])
        .assert()
        .success()
        .stdout("pm-zed\n");

    let dirs = env.stdout(&["list", "--type", "directory"]);
    assert_eq!(dirs.lines().count(), 1);
    assert!(dirs.trim_end().ends_with("opt-bin"));

    env.command()
        .args(["list", "--name", "opt-bin"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("opt-bin\n"));
}

#[test]
fn test_list_long_shows_targets() {
    let (env, _dir) = populated();
    let tool = env.temp_path.join("tools").join("pm-zed");

    let out = env.stdout(&["list", "-l", "--name", "pm-zed"]);
    assert_eq!(
        out,
        format!(
            "File:         pm-zed\nSymlink:      {}\nPriority:     front\n",
            tool.display()
        )
    );
}

#[test]
fn test_list_json() {
    let (env, dir) = populated();

    let out = env.stdout(&["list", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["files"][0]["file"], "pm-alpha");
    assert_eq!(json["files"][0]["priority"], "back");
    assert_eq!(json["files"][1]["file"], "pm-zed");
    assert_eq!(
        json["directories"],
        serde_json::json!([{ "directory": dir.to_str().unwrap(), "priority": "front" }])
    );
    assert!(out.contains("\n    \"files\""), "four-space indent expected");
}

#[test]
fn test_list_json_conflicts_with_long() {
    let env = TestEnv::new();
    env.command()
        .args(["list", "--json", "--long"])
        .assert()
        .failure();
}

#[test]
fn test_list_empty() {
    let env = TestEnv::new().init();
    env.command()
        .arg("list")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No managed items found."));

    let out = env.stdout(&["list", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json, serde_json::json!({ "files": [], "directories": [] }));
}
