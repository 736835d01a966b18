use std::path::Path;
use std::process::{Command, Stdio};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

fn pathman(home: &Path, base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pathman").expect("failed to locate pathman binary");
    cmd.env("HOME", home)
        .env("PATHMAN_CONFIG", home.join("config.json"))
        .env("PATH", "/usr/bin:/bin")
        .env_remove("SHELL")
        .arg("--managed-folder")
        .arg(base);
    cmd
}

fn setup(links: usize) -> TempDir {
    let temp = TempDir::new().expect("failed to create temp dir");
    let base = temp.path().join("links");
    let status = pathman(temp.path(), &base)
        .args(["--quiet", "init"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("failed to execute pathman init");
    assert!(status.success(), "pathman init failed");

    #[cfg(unix)]
    for i in 0..links {
        std::os::unix::fs::symlink("/bin/sh", base.join("front").join(format!("tool-{i}")))
            .expect("failed to create symlink");
    }
    temp
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("pathman").expect("failed to locate pathman binary");
            let output = cmd.arg("--version").output().expect("failed to run pathman");
            black_box(output);
        });
    });
}

fn bench_cli_path(c: &mut Criterion) {
    let temp = setup(0);
    let base = temp.path().join("links");
    c.bench_function("cli_path", |b| {
        b.iter(|| {
            let output = pathman(temp.path(), &base)
                .arg("path")
                .output()
                .expect("failed to run pathman path");
            black_box(output);
        });
    });
}

fn bench_cli_list(c: &mut Criterion) {
    let temp = setup(200);
    let base = temp.path().join("links");
    c.bench_function("cli_list_200", |b| {
        b.iter(|| {
            let output = pathman(temp.path(), &base)
                .args(["list", "--json"])
                .output()
                .expect("failed to run pathman list");
            black_box(output);
        });
    });
}

criterion_group!(benches, bench_cli_startup, bench_cli_path, bench_cli_list);
criterion_main!(benches);
