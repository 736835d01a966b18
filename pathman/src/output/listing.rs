//! Gathering and ordering the entries shown by `list`.

use std::cmp::Ordering;
use std::path::PathBuf;

use serde::Serialize;

use crate::inventory::{self, LinkStatus};
use crate::managed::{ManagedDirectory, ManagedFolders, Priority};

const UNREADABLE_TARGET: &str = "<error reading link>";

/// The two kinds of managed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum EntryKind {
    /// A symlink in a managed folder.
    File,
    /// A managed directory.
    Directory,
}

/// One managed item as listed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    /// A symlink.
    File {
        /// Link name.
        name: String,
        /// Link target as stored, or a marker if it could not be read.
        symlink: String,
        /// Folder holding the link.
        priority: Priority,
    },
    /// A managed directory.
    Directory {
        /// Directory path.
        path: PathBuf,
        /// Directory priority.
        priority: Priority,
    },
}

impl ListEntry {
    /// Which kind of item this is.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::File { .. } => EntryKind::File,
            Self::Directory { .. } => EntryKind::Directory,
        }
    }

    /// The entry's priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        match self {
            Self::File { priority, .. } | Self::Directory { priority, .. } => *priority,
        }
    }

    /// Link name or directory path, as printed in compact listings.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::File { name, .. } => name.clone(),
            Self::Directory { path, .. } => path.to_string_lossy().into_owned(),
        }
    }
}

/// Restricts which entries are listed. Empty filters match everything.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Only this priority.
    pub priority: Option<Priority>,
    /// Only this kind.
    pub kind: Option<EntryKind>,
    /// Only this link name, or directories with this final component.
    pub name: Option<String>,
}

impl ListFilter {
    fn wants_priority(&self, priority: Priority) -> bool {
        self.priority.map_or(true, |p| p == priority)
    }

    fn wants_kind(&self, kind: EntryKind) -> bool {
        self.kind.map_or(true, |k| k == kind)
    }

    fn wants_name(&self, name: Option<&str>) -> bool {
        self.name.as_deref().map_or(true, |wanted| name == Some(wanted))
    }
}

/// Collects symlinks (front folder, then back) and managed directories, in
/// configured order, that pass `filter`.
///
/// Missing folders contribute nothing.
#[must_use]
pub fn collect_entries(
    folders: &ManagedFolders,
    dirs: &[ManagedDirectory],
    filter: &ListFilter,
) -> Vec<ListEntry> {
    let mut entries = Vec::new();

    if filter.wants_kind(EntryKind::File) {
        for priority in Priority::ALL.into_iter().filter(|p| filter.wants_priority(*p)) {
            for link in inventory::scan_links(folders.folder(priority), priority) {
                if !filter.wants_name(Some(&link.name)) {
                    continue;
                }
                let symlink = match link.status {
                    LinkStatus::Unreadable { .. } => UNREADABLE_TARGET.to_string(),
                    LinkStatus::Dangling { target }
                    | LinkStatus::Unresolvable { target, .. }
                    | LinkStatus::Healthy { target } => {
                        target.to_string_lossy().into_owned()
                    }
                };
                entries.push(ListEntry::File {
                    name: link.name,
                    symlink,
                    priority,
                });
            }
        }
    }

    if filter.wants_kind(EntryKind::Directory) {
        entries.extend(
            dirs.iter()
                .filter(|d| filter.wants_priority(d.priority))
                .filter(|d| filter.wants_name(d.path.file_name().and_then(|n| n.to_str())))
                .map(|d| ListEntry::Directory {
                    path: d.path.clone(),
                    priority: d.priority,
                }),
        );
    }

    entries
}

fn by_label(a: &ListEntry, b: &ListEntry) -> Ordering {
    a.label().cmp(&b.label())
}

/// Files first, then directories, each alphabetically.
pub fn sort_by_kind(entries: &mut [ListEntry]) {
    entries.sort_by(|a, b| {
        (a.kind() == EntryKind::Directory)
            .cmp(&(b.kind() == EntryKind::Directory))
            .then_with(|| by_label(a, b))
    });
}

/// Front first, then back, each alphabetically regardless of kind.
pub fn sort_by_priority(entries: &mut [ListEntry]) {
    entries.sort_by(|a, b| {
        (a.priority() == Priority::Back)
            .cmp(&(b.priority() == Priority::Back))
            .then_with(|| by_label(a, b))
    });
}
