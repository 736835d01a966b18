//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Fixtures for executables and managed directories

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// `PATH` handed to every command, so results do not depend on the host.
pub const BASE_PATH: &str = "/usr/bin:/bin";

/// Test environment with an isolated home, config file and managed folder.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Fake home directory
    pub home: PathBuf,
    /// Configuration file passed via `PATHMAN_CONFIG`
    pub config: PathBuf,
    /// Managed folder base passed via `--managed-folder`
    pub base: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The managed folder is not created; call [`TestEnv::init`] for that.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home = temp_path.join("home");
        fs::create_dir_all(&home).expect("Failed to create home");

        Self {
            config: temp_path.join("config.json"),
            base: temp_path.join("links"),
            home,
            temp_path,
            temp_dir,
        }
    }

    /// Get a bare command builder with the environment isolated but no
    /// managed folder flag.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathman").expect("Failed to find pathman binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.home)
            .env("PATHMAN_CONFIG", &self.config)
            .env("PATH", BASE_PATH)
            .env_remove("PATHMAN_FOLDER")
            .env_remove("PATHMAN_LOG_MODE")
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("SHELL");
        cmd
    }

    /// Get a command builder with `--managed-folder` pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--managed-folder").arg(&self.base);
        cmd
    }

    /// Run `pathman init` and return the environment for chaining.
    pub fn init(self) -> Self {
        self.command().arg("init").assert().success();
        self
    }

    pub fn front(&self) -> PathBuf {
        self.base.join("front")
    }

    pub fn back(&self) -> PathBuf {
        self.base.join("back")
    }

    /// Create an executable file under `tools/`.
    pub fn executable(&self, name: &str) -> PathBuf {
        let dir = self.temp_path.join("tools");
        fs::create_dir_all(&dir).expect("Failed to create tools dir");
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").expect("Failed to write executable");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to chmod executable");
        }
        path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Run `pathman add` with extra arguments and require success.
    pub fn add(&self, path: &Path, extra: &[&str]) {
        self.command()
            .arg("add")
            .arg(path)
            .args(extra)
            .assert()
            .success();
    }

    /// Run a command and return its stdout.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "pathman {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Parsed contents of the configuration file.
    pub fn config_json(&self) -> serde_json::Value {
        let text = fs::read_to_string(&self.config).expect("Failed to read config");
        serde_json::from_str(&text).expect("Config is not JSON")
    }
}
