//! Filesystem fact gathering.
//!
//! Everything that reads the managed folders or managed directories lives
//! here. The functions return plain facts ([`ManagedLink`], [`LinkStatus`],
//! [`DirectoryStatus`], [`ManagedExecutable`]) that the clash detector and the
//! cleanup scanner make decisions on.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::managed::{path_entry, ManagedDirectory, ManagedExecutable, ManagedFolders, ManagedLink, Priority};

/// What reading a symlink revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// The link target could not be read.
    Unreadable {
        /// The error text.
        error: String,
    },
    /// The link points at something that does not exist.
    Dangling {
        /// The target as stored in the link.
        target: PathBuf,
    },
    /// The target exists but cannot be resolved, e.g. a symlink loop.
    Unresolvable {
        /// The target as stored in the link.
        target: PathBuf,
        /// The error text.
        error: String,
    },
    /// The link resolves.
    Healthy {
        /// The target as stored in the link.
        target: PathBuf,
    },
}

/// What looking up a managed directory revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryStatus {
    /// Exists and is a directory.
    Present,
    /// Does not exist.
    Missing,
    /// Exists but is not a directory.
    NotADirectory,
    /// Could not be inspected.
    Inaccessible {
        /// The error text.
        error: String,
    },
}

/// A symlink found while scanning a folder, with its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// File name of the link.
    pub name: String,
    /// Full path of the link.
    pub location: PathBuf,
    /// Folder the link was found in.
    pub priority: Priority,
    /// Outcome of reading and resolving it.
    pub status: LinkStatus,
}

fn folder_unavailable(priority: Priority, folder: &Path, err: &io::Error) -> Error {
    let reason = if err.kind() == io::ErrorKind::NotFound {
        "does not exist".to_string()
    } else {
        err.to_string()
    };
    Error::FolderUnavailable {
        priority,
        path: folder.to_path_buf(),
        reason,
    }
}

/// Names and paths of the symlinks directly inside `folder`, sorted by name.
///
/// Names that are not valid UTF-8 are converted lossily; the path is always
/// the real one.
fn symlink_children(folder: &Path, priority: Priority) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(folder).map_err(|e| folder_unavailable(priority, folder, &e))?;

    let mut links = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry in {}: {e}", folder.display());
                continue;
            }
        };
        let is_link = entry
            .file_type()
            .map(|t| t.is_symlink())
            .unwrap_or(false);
        if !is_link {
            continue;
        }
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy().into_owned();
        if file_name.to_str().is_none() {
            log::debug!("non UTF-8 link name in {}: {name}", folder.display());
        }
        links.push((name, entry.path()));
    }

    links.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(links)
}

/// Lists the symlinks in a managed folder, sorted by name.
///
/// Entries that are not symlinks are ignored. Links whose target cannot be
/// read are left out with a warning.
///
/// # Errors
///
/// Returns [`Error::FolderUnavailable`] if the folder cannot be listed,
/// including when it does not exist.
pub fn list_links(folder: &Path, priority: Priority) -> Result<Vec<ManagedLink>> {
    let mut links = Vec::new();
    for (name, location) in symlink_children(folder, priority)? {
        match fs::read_link(&location) {
            Ok(target) => links.push(ManagedLink::new(name, target, priority)),
            Err(e) => log::warn!("cannot read symlink {}: {e}", location.display()),
        }
    }
    Ok(links)
}

/// Lists symlinks from both folders, front first. A missing folder
/// contributes nothing.
///
/// # Errors
///
/// Returns [`Error::FolderUnavailable`] if a folder exists but cannot be read.
pub fn list_all_links(folders: &ManagedFolders) -> Result<Vec<ManagedLink>> {
    let mut all = Vec::new();
    for priority in Priority::ALL {
        let folder = folders.folder(priority);
        if !folder.exists() {
            continue;
        }
        all.extend(list_links(folder, priority)?);
    }
    Ok(all)
}

/// Names of the symlinks in a folder; empty if the folder is unavailable.
#[must_use]
pub fn link_names(folder: &Path, priority: Priority) -> BTreeSet<String> {
    symlink_children(folder, priority)
        .map(|links| links.into_iter().map(|(name, _)| name).collect())
        .unwrap_or_default()
}

/// Finds which folder currently holds a link called `name`, front first.
#[must_use]
pub fn find_link(folders: &ManagedFolders, name: &str) -> Option<Priority> {
    Priority::ALL
        .into_iter()
        .find(|p| is_symlink(&folders.link_path(*p, name)))
}

/// True if `path` itself is a symlink (not followed).
#[must_use]
pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

/// Reads a symlink and checks whether its target exists.
///
/// A relative target is resolved against the directory holding the link,
/// which is how the kernel resolves it. A target that cannot be checked
/// because of permissions counts as healthy; any other lookup failure
/// (a loop, a file used as a directory) makes the link unresolvable.
#[must_use]
pub fn link_status(location: &Path) -> LinkStatus {
    let target = match fs::read_link(location) {
        Ok(target) => target,
        Err(e) => {
            return LinkStatus::Unreadable {
                error: e.to_string(),
            }
        }
    };

    let resolved = if target.is_absolute() {
        target.clone()
    } else {
        location
            .parent()
            .map_or_else(|| target.clone(), |dir| dir.join(&target))
    };

    match fs::metadata(&resolved) {
        Ok(_) => LinkStatus::Healthy { target },
        Err(e) if e.kind() == io::ErrorKind::NotFound => LinkStatus::Dangling { target },
        // Cannot tell whether a target we may not look at exists
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => LinkStatus::Healthy { target },
        Err(e) => LinkStatus::Unresolvable {
            target,
            error: e.to_string(),
        },
    }
}

/// Scans a folder's symlinks and their status. A missing or unreadable
/// folder yields nothing.
#[must_use]
pub fn scan_links(folder: &Path, priority: Priority) -> Vec<LinkEntry> {
    let children = match symlink_children(folder, priority) {
        Ok(children) => children,
        Err(e) => {
            log::debug!("not scanning: {e}");
            return Vec::new();
        }
    };

    children
        .into_iter()
        .map(|(name, location)| LinkEntry {
            status: link_status(&location),
            name,
            location,
            priority,
        })
        .collect()
}

/// Looks up a managed directory.
#[must_use]
pub fn directory_status(path: &Path) -> DirectoryStatus {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => DirectoryStatus::Present,
        Ok(_) => DirectoryStatus::NotADirectory,
        Err(e) if e.kind() == io::ErrorKind::NotFound => DirectoryStatus::Missing,
        Err(e) => DirectoryStatus::Inaccessible {
            error: e.to_string(),
        },
    }
}

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.is_file() && meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(meta: &fs::Metadata) -> bool {
    meta.is_file()
}

/// Names of the executable files directly inside `dir`, sorted.
///
/// Symlinks are followed. Subdirectories and unreadable entries are skipped.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub fn directory_executables(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::from_io(dir, e))?;

    let mut names: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| {
            fs::metadata(entry.path())
                .map(|meta| is_executable(&meta))
                .unwrap_or(false)
        })
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    names.sort();
    Ok(names)
}

/// Every executable reachable through a managed location.
///
/// Symlinks are hosted by the folder they live in. Files in a managed
/// directory are hosted by that directory. Unavailable locations contribute
/// nothing.
#[must_use]
pub fn collect_managed_executables(
    folders: &ManagedFolders,
    dirs: &[ManagedDirectory],
) -> Vec<ManagedExecutable> {
    let mut executables = Vec::new();

    for priority in Priority::ALL {
        let folder = folders.folder(priority);
        let host = path_entry(folder);
        for name in link_names(folder, priority) {
            executables.push(ManagedExecutable::new(name, host.clone()));
        }
    }

    for dir in dirs {
        match directory_executables(&dir.path) {
            Ok(names) => {
                let host = path_entry(&dir.path);
                executables.extend(names.into_iter().map(|n| ManagedExecutable::new(n, host.clone())));
            }
            Err(e) => log::debug!("skipping {}: {e}", dir.path.display()),
        }
    }

    executables
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::{symlink, PermissionsExt};
    use tempfile::TempDir;

    fn setup() -> (TempDir, ManagedFolders) {
        let temp = tempfile::tempdir().unwrap();
        let folders = ManagedFolders::from_base(temp.path()).unwrap();
        fs::create_dir_all(folders.front()).unwrap();
        fs::create_dir_all(folders.back()).unwrap();
        (temp, folders)
    }

    fn make_executable(path: &Path) {
        fs::write(path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_list_links_sorted_and_symlinks_only() {
        let (temp, folders) = setup();
        let target = temp.path().join("real");
        make_executable(&target);
        symlink(&target, folders.front().join("zeta")).unwrap();
        symlink(&target, folders.front().join("alpha")).unwrap();
        fs::write(folders.front().join("plain"), "").unwrap();

        let links = list_links(folders.front(), Priority::Front).unwrap();
        let names: Vec<_> = links.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["alpha", "zeta"]);
        assert_eq!(links[0].target, target);
        assert_eq!(links[0].priority, Priority::Front);
    }

    #[test]
    fn test_non_utf8_link_name_is_kept() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let (_temp, folders) = setup();
        let odd = folders.back().join(OsStr::from_bytes(b"caf\xe9"));
        symlink("/no/such/target", &odd).unwrap();

        let entries = scan_links(folders.back(), Priority::Back);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "caf\u{fffd}");
        assert_eq!(entries[0].location, odd);
        assert!(link_names(folders.back(), Priority::Back).contains("caf\u{fffd}"));
    }

    #[test]
    fn test_missing_folder_is_unavailable_not_empty() {
        let temp = tempfile::tempdir().unwrap();
        let err = list_links(&temp.path().join("nope"), Priority::Back).unwrap_err();
        assert!(matches!(
            err,
            Error::FolderUnavailable {
                priority: Priority::Back,
                ..
            }
        ));

        let folders = ManagedFolders::from_base(&temp.path().join("nope")).unwrap();
        assert!(list_all_links(&folders).unwrap().is_empty());
    }

    #[test]
    fn test_link_status_variants() {
        let (temp, folders) = setup();
        let real = temp.path().join("real");
        make_executable(&real);

        let good = folders.front().join("good");
        symlink(&real, &good).unwrap();
        assert_eq!(link_status(&good), LinkStatus::Healthy { target: real });

        let bad = folders.front().join("bad");
        symlink("/no/such/target", &bad).unwrap();
        assert_eq!(
            link_status(&bad),
            LinkStatus::Dangling {
                target: PathBuf::from("/no/such/target")
            }
        );

        let looped = folders.front().join("loop");
        symlink("loop", &looped).unwrap();
        assert!(matches!(
            link_status(&looped),
            LinkStatus::Unresolvable { target, .. } if target == Path::new("loop")
        ));

        let gone = folders.front().join("gone");
        assert!(matches!(link_status(&gone), LinkStatus::Unreadable { .. }));
    }

    #[test]
    fn test_relative_target_resolves_from_link_folder() {
        let (_temp, folders) = setup();
        make_executable(&folders.back().join("sibling"));
        let link = folders.back().join("rel");
        symlink("sibling", &link).unwrap();
        assert!(matches!(link_status(&link), LinkStatus::Healthy { .. }));
    }

    #[test]
    fn test_directory_status() {
        let temp = tempfile::tempdir().unwrap();
        assert_eq!(directory_status(temp.path()), DirectoryStatus::Present);
        assert_eq!(
            directory_status(&temp.path().join("missing")),
            DirectoryStatus::Missing
        );
        let file = temp.path().join("file");
        fs::write(&file, "").unwrap();
        assert_eq!(directory_status(&file), DirectoryStatus::NotADirectory);
    }

    #[test]
    fn test_directory_executables_needs_exec_bit() {
        let temp = tempfile::tempdir().unwrap();
        make_executable(&temp.path().join("run"));
        fs::write(temp.path().join("data.txt"), "").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();

        assert_eq!(directory_executables(temp.path()).unwrap(), vec!["run"]);
    }

    #[test]
    fn test_collect_managed_executables_hosts() {
        let (temp, folders) = setup();
        let real = temp.path().join("real");
        make_executable(&real);
        symlink(&real, folders.front().join("f")).unwrap();
        symlink(&real, folders.back().join("b")).unwrap();

        let extra = temp.path().join("extra");
        fs::create_dir(&extra).unwrap();
        make_executable(&extra.join("x"));
        let dirs = vec![
            ManagedDirectory::new(&extra, Priority::Front).unwrap(),
            ManagedDirectory::new(temp.path().join("missing"), Priority::Back).unwrap(),
        ];

        let exes = collect_managed_executables(&folders, &dirs);
        assert_eq!(
            exes,
            vec![
                ManagedExecutable::new("f", path_entry(folders.front())),
                ManagedExecutable::new("b", path_entry(folders.back())),
                ManagedExecutable::new("x", path_entry(&extra)),
            ]
        );
        assert_eq!(find_link(&folders, "b"), Some(Priority::Back));
        assert_eq!(find_link(&folders, "x"), None);
    }
}
