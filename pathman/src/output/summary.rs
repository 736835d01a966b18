//! The `summary` report: folders, managed directories and clashes.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::clash::{find_masking_clashes, find_name_clashes, ClashReport, DirectoryProbe};
use crate::inventory::{self, DirectoryStatus};
use crate::managed::{ManagedDirectory, ManagedFolders, Priority};
use crate::path::managed_locations;

/// One managed folder and how many symlinks it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSummary {
    /// Which folder.
    pub priority: Priority,
    /// Its location.
    pub path: PathBuf,
    /// Number of symlinks; zero when the folder is unavailable.
    pub links: usize,
}

/// Everything `summary` prints, gathered up front.
#[derive(Debug, Clone)]
pub struct Summary {
    /// The base managed folder.
    pub base: PathBuf,
    /// Whether the base folder exists.
    pub base_exists: bool,
    /// Front, then back.
    pub folders: Vec<FolderSummary>,
    /// Managed directories in configured order, with their health.
    pub directories: Vec<(ManagedDirectory, DirectoryStatus)>,
    /// Names linked in both folders.
    pub name_clashes: Vec<String>,
    /// Masking relationships with unmanaged executables on `PATH`.
    pub path_clashes: Vec<ClashReport>,
}

impl Summary {
    /// Inspects the folders and directories and runs both clash checks
    /// against `path_dirs`.
    #[must_use]
    pub fn gather(
        base: &Path,
        folders: &ManagedFolders,
        dirs: &[ManagedDirectory],
        path_dirs: &[String],
        probe: &dyn DirectoryProbe,
    ) -> Self {
        let folder_summaries = Priority::ALL
            .into_iter()
            .map(|priority| {
                let path = folders.folder(priority);
                FolderSummary {
                    priority,
                    path: path.to_path_buf(),
                    links: inventory::list_links(path, priority).map_or(0, |links| links.len()),
                }
            })
            .collect();

        let directories = dirs
            .iter()
            .map(|d| (d.clone(), inventory::directory_status(&d.path)))
            .collect();

        let name_clashes = find_name_clashes(
            &inventory::link_names(folders.front(), Priority::Front),
            &inventory::link_names(folders.back(), Priority::Back),
        );

        let executables = inventory::collect_managed_executables(folders, dirs);
        let managed = managed_locations(folders, dirs);
        let path_clashes = find_masking_clashes(path_dirs, &executables, &managed, probe);

        Self {
            base: base.to_path_buf(),
            base_exists: base.is_dir(),
            folders: folder_summaries,
            directories,
            name_clashes,
            path_clashes,
        }
    }

    /// True if either kind of clash was found.
    #[must_use]
    pub fn has_clashes(&self) -> bool {
        !self.name_clashes.is_empty() || !self.path_clashes.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pathman Managed Folder:")?;
        write!(f, "  Base: {}", self.base.display())?;
        if !self.base_exists {
            write!(f, " (does not exist - run 'pathman init' to create)")?;
        }
        writeln!(f)?;
        for folder in &self.folders {
            let label = match folder.priority {
                Priority::Front => "Front subfolder:",
                Priority::Back => "Back subfolder: ",
            };
            writeln!(
                f,
                "  {label} {} ({} symlinks)",
                folder.path.display(),
                folder.links
            )?;
        }

        writeln!(f)?;
        if self.directories.is_empty() {
            writeln!(f, "No managed directories.")?;
        } else {
            writeln!(f, "Managed Directories ({}):", self.directories.len())?;
            for (dir, status) in &self.directories {
                write!(f, "  [{}] {}", dir.priority, dir.path.display())?;
                match status {
                    DirectoryStatus::Present => {}
                    DirectoryStatus::Missing => write!(f, " (does not exist)")?,
                    DirectoryStatus::NotADirectory => write!(f, " (not a directory)")?,
                    DirectoryStatus::Inaccessible { error } => write!(f, " (error: {error})")?,
                }
                writeln!(f)?;
            }
        }

        writeln!(f)?;
        if !self.has_clashes() {
            return writeln!(f, "No PATH clashes detected.");
        }
        if !self.name_clashes.is_empty() {
            writeln!(f, "Name clashes detected (same name in both front and back):")?;
            for name in &self.name_clashes {
                writeln!(f, "  {name}")?;
            }
            if !self.path_clashes.is_empty() {
                writeln!(f)?;
            }
        }
        if !self.path_clashes.is_empty() {
            writeln!(
                f,
                "PATH clashes detected (masking or masked by other executables):"
            )?;
            for report in &self.path_clashes {
                writeln!(f, "  {report}")?;
            }
        }
        Ok(())
    }
}
