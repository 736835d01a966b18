//! Name and masking clash detection.
//!
//! Positions on `PATH` decide which of two same-named executables wins; the
//! functions here compare them and report the loser.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::managed::{path_entry, ManagedExecutable, ManagedFolders, Priority};

use super::probe::DirectoryProbe;
use super::report::{ClashKind, ClashReport};

/// Names linked in both the front and the back folder, sorted.
///
/// # Examples
///
/// ```
/// use pathman::clash::find_name_clashes;
/// use std::collections::BTreeSet;
///
/// let front: BTreeSet<String> = ["foo", "bar"].map(String::from).into();
/// let back: BTreeSet<String> = ["bar", "baz"].map(String::from).into();
/// assert_eq!(find_name_clashes(&front, &back), vec!["bar".to_string()]);
/// ```
#[must_use]
pub fn find_name_clashes(front: &BTreeSet<String>, back: &BTreeSet<String>) -> Vec<String> {
    front.intersection(back).cloned().collect()
}

/// First unmanaged directory on `path_dirs` that contains `name`.
fn first_unmanaged_hit<'a>(
    name: &str,
    path_dirs: &'a [String],
    managed: &HashSet<String>,
    probe: &dyn DirectoryProbe,
) -> Option<(usize, &'a String)> {
    path_dirs
        .iter()
        .enumerate()
        .filter(|(_, dir)| !managed.contains(*dir))
        .find(|(_, dir)| probe.contains(dir, name))
}

/// Finds managed executables that mask, or are masked by, other executables.
///
/// For each executable, its host's first position in `path_dirs` is compared
/// with the first unmanaged directory holding a file of the same name. Only
/// that first hit is reported. Executables whose host is not on `PATH` are
/// skipped since their effective position is unknown.
///
/// Matching is by exact file name. Executable suffixes such as `.exe` and
/// `PATHEXT` lookup are not considered, so this under-reports on Windows.
#[must_use]
pub fn find_masking_clashes(
    path_dirs: &[String],
    executables: &[ManagedExecutable],
    managed: &HashSet<String>,
    probe: &dyn DirectoryProbe,
) -> Vec<ClashReport> {
    let mut reports = Vec::new();

    for exe in executables {
        let Some(host_position) = path_dirs.iter().position(|d| *d == exe.host) else {
            log::debug!("{} is not on PATH; skipping {}", exe.host, exe.name);
            continue;
        };

        if let Some((i, dir)) = first_unmanaged_hit(&exe.name, path_dirs, managed, probe) {
            let kind = if i < host_position {
                ClashKind::MaskedBy
            } else {
                ClashKind::Masks
            };
            reports.push(ClashReport {
                name: exe.name.clone(),
                managed_dir: exe.host.clone(),
                other_dir: dir.clone(),
                kind,
            });
        }
    }

    reports
}

/// Outcome of checking a prospective symlink against `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskingCheck {
    /// No executable of that name elsewhere on `PATH`.
    Clear,
    /// The new link would clash.
    Clash(ClashReport),
    /// The target folder is not on `PATH`; these same-named executables exist.
    Undetermined {
        /// Full paths of the executables found.
        existing: Vec<PathBuf>,
    },
}

/// Checks whether linking `name` into the folder for `priority` would clash.
///
/// Used before creating a symlink.
#[must_use]
pub fn check_new_link(
    name: &str,
    priority: Priority,
    path_dirs: &[String],
    folders: &ManagedFolders,
    managed: &HashSet<String>,
    probe: &dyn DirectoryProbe,
) -> MaskingCheck {
    let host = path_entry(folders.folder(priority));

    let Some(host_position) = path_dirs.iter().position(|d| *d == host) else {
        let existing: Vec<PathBuf> = path_dirs
            .iter()
            .filter(|dir| !managed.contains(*dir) && probe.contains(dir, name))
            .map(|dir| Path::new(dir).join(name))
            .collect();
        return if existing.is_empty() {
            MaskingCheck::Clear
        } else {
            MaskingCheck::Undetermined { existing }
        };
    };

    match first_unmanaged_hit(name, path_dirs, managed, probe) {
        None => MaskingCheck::Clear,
        Some((i, dir)) => MaskingCheck::Clash(ClashReport {
            name: name.to_string(),
            managed_dir: host,
            other_dir: dir.clone(),
            kind: if i < host_position {
                ClashKind::MaskedBy
            } else {
                ClashKind::Masks
            },
        }),
    }
}
