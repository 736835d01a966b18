//! Configuration file schema.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::managed::{ManagedDirectory, Priority};

/// Contents of `config.json`.
///
/// Both keys are optional and unknown keys are rejected.
///
/// # Examples
///
/// ```
/// use pathman::config::Config;
///
/// let config: Config = serde_json::from_str(r#"{
///     "managed_directories": [{ "path": "/opt/tool/bin", "priority": "back" }]
/// }"#).unwrap();
/// assert!(config.managed_folder.is_none());
/// assert_eq!(config.managed_directories.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base folder holding the `front` and `back` symlink folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_folder: Option<PathBuf>,

    /// Whole directories spliced into `PATH`, in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub managed_directories: Vec<ManagedDirectory>,
}

/// What [`Config::upsert_directory`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The directory was appended.
    Added,
    /// The directory was already managed with another priority.
    Updated {
        /// Its priority before the call.
        previous: Priority,
    },
    /// The directory was already managed with this priority.
    Unchanged,
}

impl Config {
    /// Finds a managed directory by exact path.
    #[must_use]
    pub fn find_directory(&self, path: &Path) -> Option<&ManagedDirectory> {
        self.managed_directories.iter().find(|d| d.path == path)
    }

    /// Adds a directory, or changes its priority in place if already present.
    ///
    /// Position in the list is kept on update, so relative order among
    /// directories never changes.
    pub fn upsert_directory(&mut self, dir: ManagedDirectory) -> UpsertOutcome {
        match self
            .managed_directories
            .iter_mut()
            .find(|d| d.path == dir.path)
        {
            Some(existing) if existing.priority == dir.priority => UpsertOutcome::Unchanged,
            Some(existing) => {
                let previous = existing.priority;
                existing.priority = dir.priority;
                UpsertOutcome::Updated { previous }
            }
            None => {
                self.managed_directories.push(dir);
                UpsertOutcome::Added
            }
        }
    }

    /// Removes a directory by exact path, returning it if it was managed.
    pub fn remove_directory(&mut self, path: &Path) -> Option<ManagedDirectory> {
        let index = self.managed_directories.iter().position(|d| d.path == path)?;
        Some(self.managed_directories.remove(index))
    }
}
