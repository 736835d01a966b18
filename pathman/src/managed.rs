//! Core types for managed items.
//!
//! This module defines the data model shared by every other part of the
//! library: the [`Priority`] of an item, the two [`ManagedFolders`] holding
//! symlinks, individual [`ManagedLink`]s, whole [`ManagedDirectory`] entries
//! and the [`ManagedExecutable`] facts fed to the clash detector.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the subfolder holding high-precedence symlinks.
pub const FRONT_SUBFOLDER: &str = "front";

/// Name of the subfolder holding low-precedence symlinks.
pub const BACK_SUBFOLDER: &str = "back";

/// Where a managed item sits relative to the rest of `PATH`.
///
/// # Examples
///
/// ```
/// use pathman::Priority;
///
/// assert_eq!(Priority::Front.other(), Priority::Back);
/// assert_eq!("BACK".parse::<Priority>().unwrap(), Priority::Back);
/// assert_eq!(Priority::Front.to_string(), "front");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum Priority {
    /// Searched before the rest of `PATH`.
    Front,
    /// Searched after the rest of `PATH`.
    Back,
}

impl Priority {
    /// Both priorities, front first.
    pub const ALL: [Self; 2] = [Self::Front, Self::Back];

    /// Returns the opposite priority.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    /// Returns the lowercase label used in output and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            _ => Err(Error::Validation {
                field: "priority".to_string(),
                message: format!("must be 'front' or 'back', got '{s}'"),
            }),
        }
    }
}

/// Checks that a managed location is usable as a `PATH` entry.
///
/// Managed locations must be non-empty, absolute and valid UTF-8 so they can
/// be compared textually against `PATH` entries.
fn validate_location(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "path must not be empty".to_string(),
        });
    }
    let Some(text) = path.to_str() else {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "path contains invalid UTF-8".to_string(),
        });
    };
    if !path.is_absolute() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "path must be absolute".to_string(),
        });
    }
    if text.contains(crate::path::PATH_LIST_SEPARATOR) {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!(
                "path must not contain the PATH separator '{}'",
                crate::path::PATH_LIST_SEPARATOR
            ),
        });
    }
    Ok(())
}

/// Checks that `name` can be used as a symlink file name inside a folder.
///
/// # Errors
///
/// Returns [`Error::Validation`] for empty names, `.`/`..`, or names
/// containing a path separator.
///
/// # Examples
///
/// ```
/// use pathman::managed::validate_link_name;
///
/// assert!(validate_link_name("rg").is_ok());
/// assert!(validate_link_name("bin/rg").is_err());
/// assert!(validate_link_name("..").is_err());
/// ```
pub fn validate_link_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("must not be empty")
    } else if name == "." || name == ".." {
        Some("must not be '.' or '..'")
    } else if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        Some("must not contain a path separator")
    } else if name.contains('\0') {
        Some("must not contain NUL")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(Error::Validation {
            field: "name".to_string(),
            message: format!("'{name}' {reason}"),
        }),
        None => Ok(()),
    }
}

/// The textual form of a validated location, as it appears in `PATH`.
pub(crate) fn path_entry(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// The pair of folders that hold managed symlinks.
///
/// # Examples
///
/// ```
/// use pathman::{ManagedFolders, Priority};
/// use std::path::Path;
///
/// let folders = ManagedFolders::from_base(Path::new("/m")).unwrap();
/// assert_eq!(folders.folder(Priority::Front), Path::new("/m/front"));
/// assert_eq!(folders.folder(Priority::Back), Path::new("/m/back"));
///
/// assert!(ManagedFolders::new("relative", "/m/back").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedFolders {
    front: PathBuf,
    back: PathBuf,
}

impl ManagedFolders {
    /// Creates the folder pair from explicit paths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if either path is empty, relative, not
    /// UTF-8, or contains the `PATH` list separator. Returns
    /// [`Error::Validation`] if both paths are the same.
    pub fn new(front: impl Into<PathBuf>, back: impl Into<PathBuf>) -> Result<Self> {
        let front = front.into();
        let back = back.into();
        validate_location(&front)?;
        validate_location(&back)?;
        if front == back {
            return Err(Error::Validation {
                field: "managed folders".to_string(),
                message: "front and back folders must differ".to_string(),
            });
        }
        Ok(Self { front, back })
    }

    /// Creates the folder pair as `<base>/front` and `<base>/back`.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`ManagedFolders::new`].
    pub fn from_base(base: &Path) -> Result<Self> {
        Self::new(base.join(FRONT_SUBFOLDER), base.join(BACK_SUBFOLDER))
    }

    /// The high-precedence folder.
    #[must_use]
    pub fn front(&self) -> &Path {
        &self.front
    }

    /// The low-precedence folder.
    #[must_use]
    pub fn back(&self) -> &Path {
        &self.back
    }

    /// The folder for the given priority.
    #[must_use]
    pub fn folder(&self, priority: Priority) -> &Path {
        match priority {
            Priority::Front => &self.front,
            Priority::Back => &self.back,
        }
    }

    /// Full path a symlink named `name` would have in the given folder.
    #[must_use]
    pub fn link_path(&self, priority: Priority, name: &str) -> PathBuf {
        self.folder(priority).join(name)
    }
}

/// One symlink inside a managed folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagedLink {
    /// The command name (the symlink's file name).
    pub name: String,
    /// Where the symlink points, as read from the link.
    pub target: PathBuf,
    /// Which folder holds the link.
    pub priority: Priority,
}

impl ManagedLink {
    /// Creates a link description.
    #[must_use]
    pub fn new(name: impl Into<String>, target: impl Into<PathBuf>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            priority,
        }
    }
}

/// A whole directory spliced into `PATH`.
///
/// Entries are persisted in configuration in insertion order.
///
/// # Examples
///
/// ```
/// use pathman::{ManagedDirectory, Priority};
///
/// let dir = ManagedDirectory::new("/home/u/.cargo/bin", Priority::Front).unwrap();
/// assert_eq!(dir.priority, Priority::Front);
///
/// assert!(ManagedDirectory::new("bin", Priority::Back).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManagedDirectory {
    /// Absolute directory path.
    pub path: PathBuf,
    /// Position relative to the rest of `PATH`.
    pub priority: Priority,
}

impl ManagedDirectory {
    /// Creates a managed directory entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path is empty, relative, not
    /// UTF-8, or contains the `PATH` list separator.
    pub fn new(path: impl Into<PathBuf>, priority: Priority) -> Result<Self> {
        let path = path.into();
        validate_location(&path)?;
        Ok(Self { path, priority })
    }

    /// Re-checks an entry that bypassed [`ManagedDirectory::new`], such as
    /// one deserialized from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] when the path is unusable.
    pub fn validate(&self) -> Result<()> {
        validate_location(&self.path)
    }
}

/// An executable reachable through a managed location.
///
/// Symlinks are hosted by the managed folder they live in; files in a
/// managed directory are hosted by that directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedExecutable {
    /// The command name.
    pub name: String,
    /// The `PATH` entry through which the command is reached.
    pub host: String,
}

impl ManagedExecutable {
    /// Creates an executable fact.
    #[must_use]
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
        }
    }
}
