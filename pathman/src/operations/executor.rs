//! Plan execution engine.
//!
//! The executor applies [`OperationPlan`]s to the managed folders and to an
//! in-memory [`Config`]. Persisting the configuration is left to the caller,
//! which checks `config_changed` on the result.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::inventory::is_symlink;
use crate::managed::{ManagedFolders, Priority};

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// Whether the configuration was modified and needs saving.
    pub config_changed: bool,
}

/// Result of executing a plan item by item.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Whether this was a dry-run.
    pub dry_run: bool,

    /// Descriptions of the actions that succeeded.
    pub succeeded: Vec<String>,

    /// Descriptions of the actions that failed, with the error.
    pub failed: Vec<(String, Error)>,

    /// Whether the configuration was modified and needs saving.
    pub config_changed: bool,
}

impl BatchResult {
    /// True if nothing failed.
    #[must_use]
    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Applies operation plans.
///
/// # Examples
///
/// ```
/// use pathman::config::Config;
/// use pathman::operations::{OperationPlan, PlanAction, PlanExecutor};
/// use pathman::{ManagedDirectory, ManagedFolders, Priority};
///
/// let temp = tempfile::tempdir().unwrap();
/// let folders = ManagedFolders::from_base(temp.path()).unwrap();
/// let mut config = Config::default();
///
/// let dir = ManagedDirectory::new(temp.path().join("bin"), Priority::Front).unwrap();
/// let plan = OperationPlan::new("Add bin").add_action(PlanAction::AddDirectory(dir));
///
/// let result = PlanExecutor::new(&folders, &mut config).execute(&plan).unwrap();
/// assert!(result.config_changed);
/// assert_eq!(config.managed_directories.len(), 1);
/// ```
pub struct PlanExecutor<'a> {
    folders: &'a ManagedFolders,
    config: &'a mut Config,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(folders: &'a ManagedFolders, config: &'a mut Config) -> Self {
        Self {
            folders,
            config,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode, where nothing is changed.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes every action in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the first action that fails. Earlier actions are
    /// not undone.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let mut config_changed = false;
        if !self.dry_run {
            for action in &plan.actions {
                log::debug!("executing: {}", action.description());
                config_changed |= self.execute_action(action)?;
            }
        }

        Ok(ExecutionResult {
            success: true,
            dry_run: self.dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            config_changed,
        })
    }

    /// Executes every action, recording each outcome without aborting.
    pub fn execute_batch(&mut self, plan: &OperationPlan) -> BatchResult {
        let mut result = BatchResult {
            dry_run: self.dry_run,
            ..BatchResult::default()
        };

        for action in &plan.actions {
            let description = action.description();
            if self.dry_run {
                result.succeeded.push(description);
                continue;
            }
            match self.execute_action(action) {
                Ok(changed) => {
                    result.config_changed |= changed;
                    result.succeeded.push(description);
                }
                Err(e) => {
                    log::debug!("failed: {description}: {e}");
                    result.failed.push((description, e));
                }
            }
        }

        result
    }

    /// Executes a single action. Returns whether configuration changed.
    fn execute_action(&mut self, action: &PlanAction) -> Result<bool> {
        match action {
            PlanAction::CreateLink {
                name,
                target,
                priority,
            } => {
                self.create_link(name, target, *priority)?;
                Ok(false)
            }
            PlanAction::RemoveLink { name, priority } => {
                self.remove_link(name, *priority)?;
                Ok(false)
            }
            PlanAction::PruneLink { location, priority } => {
                self.prune_link(location, *priority)?;
                Ok(false)
            }
            PlanAction::MoveLink { name, from } => {
                self.move_link(name, *from)?;
                Ok(false)
            }
            PlanAction::RenameLink { from, to, priority } => {
                let source = self.existing_link(from, *priority)?;
                let dest = self.folders.link_path(*priority, to);
                if fs::symlink_metadata(&dest).is_ok() {
                    return Err(Error::AlreadyExists {
                        name: to.clone(),
                        priority: *priority,
                    });
                }
                fs::rename(&source, &dest).map_err(|e| Error::from_io(&source, e))?;
                Ok(false)
            }
            PlanAction::AddDirectory(dir) | PlanAction::UpdateDirectory(dir) => {
                self.config.upsert_directory(dir.clone());
                Ok(true)
            }
            PlanAction::RemoveDirectory(path) => {
                self.config
                    .remove_directory(path)
                    .ok_or_else(|| Error::NotFound {
                        resource: format!("managed directory {}", path.display()),
                    })?;
                Ok(true)
            }
        }
    }

    /// Path of an existing symlink, or the reason there is none.
    fn existing_link(&self, name: &str, priority: Priority) -> Result<std::path::PathBuf> {
        let path = self.folders.link_path(priority, name);
        match fs::symlink_metadata(&path) {
            Ok(meta) if meta.file_type().is_symlink() => Ok(path),
            Ok(_) => Err(Error::NotASymlink { path }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotFound {
                resource: format!("symlink '{name}' in {priority} folder"),
            }),
            Err(e) => Err(Error::from_io(path, e)),
        }
    }

    fn create_link(&self, name: &str, target: &Path, priority: Priority) -> Result<()> {
        let link = self.folders.link_path(priority, name);
        create_symlink(target, &link).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                Error::AlreadyExists {
                    name: name.to_string(),
                    priority,
                }
            } else {
                Error::from_io(&link, e)
            }
        })
    }

    fn remove_link(&self, name: &str, priority: Priority) -> Result<()> {
        let path = self.existing_link(name, priority)?;
        fs::remove_file(&path).map_err(|e| Error::from_io(&path, e))
    }

    /// Deletes a symlink given by path. The path must sit directly inside the
    /// folder for `priority`.
    fn prune_link(&self, location: &Path, priority: Priority) -> Result<()> {
        let folder = self.folders.folder(priority);
        if location.parent() != Some(folder) {
            return Err(Error::InvalidPath {
                path: location.to_path_buf(),
                reason: format!("not inside the {priority} folder {}", folder.display()),
            });
        }
        match fs::symlink_metadata(location) {
            Ok(meta) if meta.file_type().is_symlink() => {
                fs::remove_file(location).map_err(|e| Error::from_io(location, e))
            }
            Ok(_) => Err(Error::NotASymlink {
                path: location.to_path_buf(),
            }),
            Err(e) => Err(Error::from_io(location, e)),
        }
    }

    /// Recreates the link in the other folder, then deletes the original.
    /// If the delete fails the new link is removed again.
    fn move_link(&self, name: &str, from: Priority) -> Result<()> {
        let to = from.other();
        let source = self.existing_link(name, from)?;
        let target = fs::read_link(&source).map_err(|e| Error::from_io(&source, e))?;

        let dest_folder = self.folders.folder(to);
        if !dest_folder.exists() {
            create_folder(dest_folder)?;
        }
        if is_symlink(&self.folders.link_path(to, name)) {
            return Err(Error::AlreadyExists {
                name: name.to_string(),
                priority: to,
            });
        }

        self.create_link(name, &target, to)?;
        if let Err(e) = fs::remove_file(&source) {
            let dest = self.folders.link_path(to, name);
            if let Err(undo) = fs::remove_file(&dest) {
                log::warn!("could not roll back {}: {undo}", dest.display());
            }
            return Err(Error::from_io(&source, e));
        }
        Ok(())
    }
}

/// Creates a managed folder (and parents) with mode 0755 on Unix.
///
/// # Errors
///
/// Returns an error if the folder cannot be created.
pub fn create_folder(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(path).map_err(|e| Error::from_io(path, e))
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}
