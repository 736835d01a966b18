//! Common fixtures for pathman integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use pathman::ManagedFolders;
use tempfile::TempDir;

/// A temporary base folder with `front` and `back` created, plus a scratch
/// area for executables and managed directories.
pub struct Workspace {
    pub temp: TempDir,
    pub base: PathBuf,
    pub folders: ManagedFolders,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().unwrap();
        let base = temp.path().join("links");
        let folders = ManagedFolders::from_base(&base).unwrap();
        fs::create_dir_all(folders.front()).unwrap();
        fs::create_dir_all(folders.back()).unwrap();
        Self {
            temp,
            base,
            folders,
        }
    }

    /// Creates `<scratch>/<dir>` and returns it.
    pub fn dir(&self, dir: &str) -> PathBuf {
        let path = self.temp.path().join(dir);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes an executable file called `name` inside `dir`.
    pub fn executable(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
        path
    }

    /// `PATH` entry form of a path.
    pub fn entry(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }
}
