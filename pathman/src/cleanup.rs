//! Finding stale managed items.
//!
//! A scan reports symlinks that no longer resolve and managed directories
//! that are gone or cannot be used. Candidates are only proposals: applying
//! them is done through [`crate::operations::CleanupPlan`].

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::inventory::{self, DirectoryStatus, LinkEntry, LinkStatus};
use crate::managed::{ManagedDirectory, ManagedFolders, Priority};

/// The kind of problem found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// The symlink's target does not exist or cannot be resolved.
    BrokenSymlink,
    /// The symlink itself could not be read.
    UnreadableSymlink,
    /// A managed directory does not exist.
    MissingDirectory,
    /// A managed directory exists but cannot be used.
    InaccessibleDirectory,
}

impl CandidateKind {
    /// True for the two symlink kinds.
    #[must_use]
    pub const fn is_symlink(self) -> bool {
        matches!(self, Self::BrokenSymlink | Self::UnreadableSymlink)
    }
}

/// One item proposed for removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupCandidate {
    /// What is wrong.
    pub kind: CandidateKind,
    /// Link name, or the directory path.
    pub identity: String,
    /// Full path of the link file, or the directory path.
    pub location: PathBuf,
    /// Folder or directory priority.
    pub priority: Priority,
    /// Human-readable cause.
    pub reason: String,
    /// Whether the item will be removed. Starts out `true`.
    pub selected: bool,
}

impl fmt::Display for CleanupCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ", self.priority, self.identity)?;
        match self.kind {
            CandidateKind::BrokenSymlink => write!(f, "({})", self.reason),
            CandidateKind::UnreadableSymlink => write!(f, "(unreadable)"),
            CandidateKind::MissingDirectory => write!(f, "(missing)"),
            CandidateKind::InaccessibleDirectory => write!(f, "(error: {})", self.reason),
        }
    }
}

/// Decides whether a scanned symlink needs cleaning up.
#[must_use]
pub fn classify_link(entry: &LinkEntry) -> Option<CleanupCandidate> {
    let (kind, reason) = match &entry.status {
        LinkStatus::Healthy { .. } => return None,
        LinkStatus::Unreadable { .. } => (
            CandidateKind::UnreadableSymlink,
            "Cannot read symlink target".to_string(),
        ),
        LinkStatus::Dangling { target } => (
            CandidateKind::BrokenSymlink,
            format!("Target does not exist: {}", target.display()),
        ),
        LinkStatus::Unresolvable { target, error } => (
            CandidateKind::BrokenSymlink,
            format!("Cannot resolve target {}: {error}", target.display()),
        ),
    };
    Some(CleanupCandidate {
        kind,
        identity: entry.name.clone(),
        location: entry.location.clone(),
        priority: entry.priority,
        reason,
        selected: true,
    })
}

/// Decides whether a managed directory needs cleaning up.
#[must_use]
pub fn classify_directory(
    dir: &ManagedDirectory,
    status: &DirectoryStatus,
) -> Option<CleanupCandidate> {
    let (kind, reason) = match status {
        DirectoryStatus::Present => return None,
        DirectoryStatus::Missing => (
            CandidateKind::MissingDirectory,
            "Directory does not exist".to_string(),
        ),
        DirectoryStatus::NotADirectory => (
            CandidateKind::InaccessibleDirectory,
            "Not a directory".to_string(),
        ),
        DirectoryStatus::Inaccessible { error } => (
            CandidateKind::InaccessibleDirectory,
            format!("Cannot access: {error}"),
        ),
    };
    Some(CleanupCandidate {
        kind,
        identity: dir.path.to_string_lossy().into_owned(),
        location: dir.path.clone(),
        priority: dir.priority,
        reason,
        selected: true,
    })
}

/// Scans both folders and all managed directories for stale items.
///
/// Results come in a fixed order: front symlinks, back symlinks (each by
/// name), then directories in configured order. Nothing here is fatal; an
/// unreadable folder is simply not scanned.
///
/// # Examples
///
/// ```
/// use pathman::cleanup::scan_for_cleanup;
/// use pathman::{ManagedDirectory, ManagedFolders, Priority};
///
/// let temp = tempfile::tempdir().unwrap();
/// let folders = ManagedFolders::from_base(temp.path()).unwrap();
/// let gone = ManagedDirectory::new(temp.path().join("gone"), Priority::Back).unwrap();
///
/// let candidates = scan_for_cleanup(&folders, &[gone]);
/// assert_eq!(candidates.len(), 1);
/// assert!(candidates[0].selected);
/// ```
#[must_use]
pub fn scan_for_cleanup(
    folders: &ManagedFolders,
    dirs: &[ManagedDirectory],
) -> Vec<CleanupCandidate> {
    let links = Priority::ALL
        .into_iter()
        .flat_map(|p| inventory::scan_links(folders.folder(p), p))
        .filter_map(|entry| classify_link(&entry));

    let directories = dirs
        .iter()
        .filter_map(|dir| classify_directory(dir, &inventory::directory_status(&dir.path)));

    let candidates: Vec<CleanupCandidate> = links.chain(directories).collect();
    log::debug!("cleanup scan found {} candidates", candidates.len());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, status: LinkStatus) -> LinkEntry {
        LinkEntry {
            name: name.to_string(),
            location: PathBuf::from(format!("/m/front/{name}")),
            priority: Priority::Front,
            status,
        }
    }

    #[test]
    fn test_healthy_link_never_reported() {
        let healthy = entry(
            "ok",
            LinkStatus::Healthy {
                target: PathBuf::from("/usr/bin/ok"),
            },
        );
        assert!(classify_link(&healthy).is_none());
    }

    #[test]
    fn test_dangling_link_names_target() {
        let dangling = entry(
            "foo",
            LinkStatus::Dangling {
                target: PathBuf::from("/opt/gone/foo"),
            },
        );
        let candidate = classify_link(&dangling).unwrap();
        assert_eq!(candidate.kind, CandidateKind::BrokenSymlink);
        assert!(candidate.reason.contains("/opt/gone/foo"));
        assert_eq!(candidate.location, PathBuf::from("/m/front/foo"));
        assert!(candidate.selected);
    }

    #[test]
    fn test_unreadable_link() {
        let unreadable = entry(
            "odd",
            LinkStatus::Unreadable {
                error: "denied".to_string(),
            },
        );
        let candidate = classify_link(&unreadable).unwrap();
        assert_eq!(candidate.kind, CandidateKind::UnreadableSymlink);
        assert_eq!(candidate.to_string(), "[front] odd (unreadable)");
    }

    #[test]
    #[cfg(unix)]
    fn test_directory_classification() {
        let dir = ManagedDirectory::new("/opt/tool/bin", Priority::Back).unwrap();
        assert!(classify_directory(&dir, &DirectoryStatus::Present).is_none());

        let missing = classify_directory(&dir, &DirectoryStatus::Missing).unwrap();
        assert_eq!(missing.kind, CandidateKind::MissingDirectory);
        assert_eq!(missing.identity, "/opt/tool/bin");
        assert_eq!(missing.to_string(), "[back] /opt/tool/bin (missing)");

        let denied = classify_directory(
            &dir,
            &DirectoryStatus::Inaccessible {
                error: "permission denied".to_string(),
            },
        )
        .unwrap();
        assert_eq!(denied.kind, CandidateKind::InaccessibleDirectory);
        assert!(denied.reason.contains("permission denied"));

        let file = classify_directory(&dir, &DirectoryStatus::NotADirectory).unwrap();
        assert_eq!(file.kind, CandidateKind::InaccessibleDirectory);
    }

    #[test]
    #[cfg(unix)]
    fn test_scan_order_and_defaults() {
        use std::os::unix::fs::symlink;

        let temp = tempfile::tempdir().unwrap();
        let folders = ManagedFolders::from_base(temp.path()).unwrap();
        std::fs::create_dir_all(folders.front()).unwrap();
        std::fs::create_dir_all(folders.back()).unwrap();

        let real = temp.path().join("real");
        std::fs::write(&real, "").unwrap();
        symlink(&real, folders.front().join("healthy")).unwrap();
        symlink("/nope/b", folders.back().join("b")).unwrap();
        symlink("/nope/z", folders.front().join("z")).unwrap();
        symlink("/nope/a", folders.front().join("a")).unwrap();

        let dirs = vec![
            ManagedDirectory::new(temp.path().join("missing2"), Priority::Front).unwrap(),
            ManagedDirectory::new(temp.path(), Priority::Back).unwrap(),
            ManagedDirectory::new(temp.path().join("missing1"), Priority::Back).unwrap(),
        ];

        let candidates = scan_for_cleanup(&folders, &dirs);
        let order: Vec<(CandidateKind, Priority)> =
            candidates.iter().map(|c| (c.kind, c.priority)).collect();
        assert_eq!(
            order,
            vec![
                (CandidateKind::BrokenSymlink, Priority::Front),
                (CandidateKind::BrokenSymlink, Priority::Front),
                (CandidateKind::BrokenSymlink, Priority::Back),
                (CandidateKind::MissingDirectory, Priority::Front),
                (CandidateKind::MissingDirectory, Priority::Back),
            ]
        );
        assert_eq!(candidates[0].identity, "a");
        assert_eq!(candidates[1].identity, "z");
        assert!(candidates[3].identity.ends_with("missing2"));
        assert!(candidates.iter().all(|c| c.selected));
    }

    #[test]
    fn test_symlink_loop_is_broken() {
        let looped = entry(
            "loop",
            LinkStatus::Unresolvable {
                target: PathBuf::from("loop"),
                error: "Too many levels of symbolic links".to_string(),
            },
        );
        let candidate = classify_link(&looped).unwrap();
        assert_eq!(candidate.kind, CandidateKind::BrokenSymlink);
        assert!(candidate.reason.contains("Too many levels"));
    }

    #[test]
    #[cfg(unix)]
    fn test_scan_reports_non_utf8_and_looping_links() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        use std::os::unix::fs::symlink;

        let temp = tempfile::tempdir().unwrap();
        let folders = ManagedFolders::from_base(temp.path()).unwrap();
        std::fs::create_dir_all(folders.front()).unwrap();

        let odd = folders.front().join(OsStr::from_bytes(b"caf\xe9"));
        symlink("/nope/cafe", &odd).unwrap();
        symlink("/nope/ok", folders.front().join("ok")).unwrap();
        symlink("spin", folders.front().join("spin")).unwrap();

        let candidates = scan_for_cleanup(&folders, &[]);
        let names: Vec<&str> = candidates.iter().map(|c| c.identity.as_str()).collect();
        assert_eq!(names, ["caf\u{fffd}", "ok", "spin"]);
        assert_eq!(candidates[0].location, odd);
        assert!(candidates.iter().all(|c| c.kind == CandidateKind::BrokenSymlink));

        let plan = crate::operations::CleanupPlan::from_candidates(&candidates);
        let mut config = crate::config::Config::default();
        let result = crate::operations::PlanExecutor::new(&folders, &mut config).execute_batch(&plan);
        assert!(result.is_complete_success());
        assert!(std::fs::read_dir(folders.front()).unwrap().next().is_none());
    }

    #[test]
    fn test_scan_with_no_folders_and_no_dirs() {
        let temp = tempfile::tempdir().unwrap();
        let folders = ManagedFolders::from_base(&temp.path().join("absent")).unwrap();
        assert!(scan_for_cleanup(&folders, &[]).is_empty());
    }
}
