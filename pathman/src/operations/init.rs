//! First-time setup: managed folders and shell profile integration.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{Error, Result};
use crate::managed::ManagedFolders;
use crate::path::clean_components;

use super::executor::create_folder;

const PROFILE_HEADER: &str = "# Added by 'pathman init'";

/// Options for initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Base managed folder; `front` and `back` live inside it.
    pub base: PathBuf,
    /// Report what would be created without creating it.
    pub dry_run: bool,
}

impl InitOptions {
    /// Creates options for `base`.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            dry_run: false,
        }
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of initialization.
#[derive(Debug)]
pub struct InitResult {
    /// The folders in use.
    pub folders: ManagedFolders,
    /// Folders that were (or in dry-run mode would be) created, base first.
    pub created: Vec<PathBuf>,
    /// Permission bits of the base folder when group or others can write
    /// to it.
    pub insecure_mode: Option<u32>,
}

/// Creates the base, front and back folders with mode 0755.
///
/// Existing folders are left alone. The base folder's permissions are
/// checked afterwards: anyone else who can write there can plant
/// executables on `PATH`.
///
/// # Errors
///
/// Returns an error if the base path is invalid or a folder cannot be
/// created.
///
/// # Examples
///
/// ```
/// use pathman::operations::{init_folders, InitOptions};
///
/// let temp = tempfile::tempdir().unwrap();
/// let base = temp.path().join("links");
///
/// let result = init_folders(&InitOptions::new(&base)).unwrap();
/// assert_eq!(result.created.len(), 3);
/// assert!(base.join("front").is_dir());
///
/// let again = init_folders(&InitOptions::new(&base)).unwrap();
/// assert!(again.created.is_empty());
/// ```
pub fn init_folders(options: &InitOptions) -> Result<InitResult> {
    let folders = ManagedFolders::from_base(&options.base)?;
    let mut created = Vec::new();

    for folder in [options.base.as_path(), folders.front(), folders.back()] {
        if folder.exists() {
            if !folder.is_dir() {
                return Err(Error::InvalidPath {
                    path: folder.to_path_buf(),
                    reason: "exists but is not a directory".to_string(),
                });
            }
            continue;
        }
        if !options.dry_run {
            create_folder(folder)?;
            log::info!("created {}", folder.display());
        }
        created.push(folder.to_path_buf());
    }

    let insecure_mode = insecure_mode(&options.base);
    if let Some(mode) = insecure_mode {
        log::debug!(
            "{} is writable by group or others ({mode:04o})",
            options.base.display()
        );
    }

    Ok(InitResult {
        folders,
        created,
        insecure_mode,
    })
}

#[cfg(unix)]
fn insecure_mode(path: &Path) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(path).ok()?.permissions().mode() & 0o7777;
    (mode & 0o022 != 0).then_some(mode)
}

#[cfg(not(unix))]
fn insecure_mode(_path: &Path) -> Option<u32> {
    None
}

/// True if `dir` is one of the `PATH` entries, after lexical cleanup of
/// both sides.
///
/// # Examples
///
/// ```
/// use pathman::operations::is_on_path;
/// use std::path::Path;
///
/// let path = vec!["/usr/bin".to_string(), "/m/front/".to_string()];
/// assert!(is_on_path(Path::new("/m/front"), &path));
/// assert!(!is_on_path(Path::new("/m/back"), &path));
/// ```
#[must_use]
pub fn is_on_path(dir: &Path, path_dirs: &[String]) -> bool {
    let wanted = clean_components(dir);
    path_dirs
        .iter()
        .filter(|entry| !entry.is_empty())
        .any(|entry| clean_components(Path::new(entry)) == wanted)
}

/// The login profile for bash: `.bash_profile` if present, else `.profile`.
#[must_use]
pub fn choose_profile(home: &Path) -> PathBuf {
    let bash_profile = home.join(".bash_profile");
    if bash_profile.exists() {
        bash_profile
    } else {
        home.join(".profile")
    }
}

/// True if the profile already runs pathman: either a block appended by
/// [`append_to_profile`], or a hand-written line exporting a `PATH` computed
/// by `pathman path`.
#[must_use]
pub fn profile_has_pathman_export(contents: &str) -> bool {
    contents.lines().any(|line| {
        line.starts_with(PROFILE_HEADER)
            || (line.contains("export") && line.contains("PATH") && line.contains("pathman path"))
    })
}

/// Appends the integration script to a profile, with a timestamped header.
///
/// Returns `false` without writing if the profile already has it.
///
/// # Errors
///
/// Returns an error if the profile cannot be read or written.
pub fn append_to_profile(profile: &Path, script: &str) -> Result<bool> {
    append_block(profile, script, Local::now().naive_local())
}

fn append_block(profile: &Path, script: &str, stamp: NaiveDateTime) -> Result<bool> {
    let existing = match fs::read_to_string(profile) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(Error::from_io(profile, e)),
    };
    if profile_has_pathman_export(&existing) {
        log::debug!("{} already runs pathman", profile.display());
        return Ok(false);
    }

    let mut block = String::new();
    if !existing.is_empty() && !existing.ends_with('\n') {
        block.push('\n');
    }
    block.push_str(&format!(
        "\n{PROFILE_HEADER} on {}\n",
        stamp.format("%Y-%m-%d %H:%M:%S")
    ));
    block.push_str(script);
    if !script.ends_with('\n') {
        block.push('\n');
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(profile)
        .map_err(|e| Error::from_io(profile, e))?;
    file.write_all(block.as_bytes())
        .map_err(|e| Error::from_io(profile, e))?;
    Ok(true)
}
