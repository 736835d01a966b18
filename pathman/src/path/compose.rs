//! Building the adjusted `PATH`.
//!
//! The adjusted value is always laid out as
//!
//! ```text
//! front-folder : front dirs... : residue... : back dirs... : back-folder
//! ```
//!
//! where the residue is the incoming `PATH` with every managed location
//! removed. Matching is purely textual so the output is predictable for the
//! shell that consumes it.

use std::collections::HashSet;
use std::fmt;

use crate::managed::{path_entry, ManagedDirectory, ManagedFolders, Priority};

use super::entries::{join_path_list, split_path_list};

/// An ordered list of `PATH` entries produced by [`compose_path`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposedPath {
    entries: Vec<String>,
}

impl ComposedPath {
    /// The entries in search order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Consumes the value, returning the entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }

    /// Position of `entry` in the search order, if present.
    #[must_use]
    pub fn position(&self, entry: &str) -> Option<usize> {
        self.entries.iter().position(|e| e == entry)
    }
}

impl fmt::Display for ComposedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_path_list(&self.entries))
    }
}

/// Every location pathman puts on `PATH`: both folders and all directories.
#[must_use]
pub fn managed_locations(folders: &ManagedFolders, dirs: &[ManagedDirectory]) -> HashSet<String> {
    let mut set = HashSet::with_capacity(dirs.len() + 2);
    set.insert(path_entry(folders.front()));
    set.insert(path_entry(folders.back()));
    for dir in dirs {
        set.insert(path_entry(&dir.path));
    }
    set
}

/// Composes the adjusted `PATH` from the current value and the managed set.
///
/// Managed locations already present in `current_path` are removed and
/// re-inserted at their proper position, so feeding the result back in gives
/// the same result. Repeated foreign entries keep only their first
/// occurrence. Directories of the same priority keep their relative order.
///
/// This never touches the filesystem and cannot fail.
///
/// # Examples
///
/// ```
/// use pathman::path::compose_path;
/// use pathman::{ManagedDirectory, ManagedFolders, Priority};
/// use std::path::Path;
///
/// # #[cfg(unix)] {
/// let folders = ManagedFolders::from_base(Path::new("/m")).unwrap();
/// let dirs = vec![ManagedDirectory::new("/home/u/.cargo/bin", Priority::Front).unwrap()];
///
/// let path = compose_path("/usr/bin:/m/front:/bin", &folders, &dirs);
/// assert_eq!(
///     path.to_string(),
///     "/m/front:/home/u/.cargo/bin:/usr/bin:/bin:/m/back"
/// );
/// # }
/// ```
#[must_use]
pub fn compose_path(
    current_path: &str,
    folders: &ManagedFolders,
    dirs: &[ManagedDirectory],
) -> ComposedPath {
    let managed = managed_locations(folders, dirs);
    let dirs_with = |priority: Priority| {
        dirs.iter()
            .filter(move |d| d.priority == priority)
            .map(|d| path_entry(&d.path))
    };

    let residue = split_path_list(current_path)
        .into_iter()
        .filter(|entry| !managed.contains(entry));

    let ordered = std::iter::once(path_entry(folders.front()))
        .chain(dirs_with(Priority::Front))
        .chain(residue)
        .chain(dirs_with(Priority::Back))
        .chain(std::iter::once(path_entry(folders.back())));

    let mut seen = HashSet::new();
    let entries: Vec<String> = ordered.filter(|e| seen.insert(e.clone())).collect();

    log::debug!("composed PATH with {} entries", entries.len());
    ComposedPath { entries }
}
