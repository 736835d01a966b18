//! Planning `add`: a file becomes a symlink, a directory becomes managed.

use std::fs;
use std::path::PathBuf;

use crate::clash::{check_new_link, DirectoryProbe, MaskingCheck};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::inventory::is_symlink;
use crate::managed::{validate_link_name, ManagedDirectory, ManagedFolders, Priority};
use crate::path::managed_locations;

use super::plan::{OperationPlan, PlanAction};

/// Options for an add operation.
#[derive(Debug, Clone)]
pub struct AddOptions {
    /// Absolute path of the executable or directory.
    pub path: PathBuf,

    /// Link name; defaults to the file name of `path`.
    pub name: Option<String>,

    /// Where to put it.
    pub priority: Priority,

    /// Replace an existing link and skip the masking check.
    pub force: bool,
}

impl AddOptions {
    /// Creates options for `path` with front priority and no force.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            name: None,
            priority: Priority::Front,
            force: false,
        }
    }

    /// Sets the link name.
    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the force flag.
    #[must_use]
    pub const fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Builds the plan for an add operation.
pub struct AddPlan {
    options: AddOptions,
}

impl AddPlan {
    /// Creates a planner.
    #[must_use]
    pub const fn new(options: AddOptions) -> Self {
        Self { options }
    }

    /// Builds the plan without changing anything.
    ///
    /// `path_dirs` is the current `PATH`, split, used for the masking check.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is relative or missing, the link name is
    /// invalid, the target folder is unavailable, a link with that name
    /// already exists (without `force`), or the new link would mask or be
    /// masked by another executable (without `force`).
    pub fn build_plan(
        &self,
        folders: &ManagedFolders,
        config: &Config,
        path_dirs: &[String],
        probe: &dyn DirectoryProbe,
    ) -> Result<OperationPlan> {
        let path = &self.options.path;
        if !path.is_absolute() {
            return Err(Error::InvalidPath {
                path: path.clone(),
                reason: "path must be absolute".to_string(),
            });
        }
        let meta = fs::metadata(path).map_err(|e| Error::from_io(path, e))?;

        if meta.is_dir() {
            self.plan_directory(config)
        } else {
            self.plan_symlink(folders, config, path_dirs, probe)
        }
    }

    fn plan_directory(&self, config: &Config) -> Result<OperationPlan> {
        let dir = ManagedDirectory::new(self.options.path.clone(), self.options.priority)?;
        let plan = OperationPlan::new(format!("Add directory {}", dir.path.display()));

        Ok(match config.find_directory(&dir.path) {
            None => plan.add_action(PlanAction::AddDirectory(dir)),
            Some(existing) if existing.priority == dir.priority => plan.add_warning(format!(
                "Directory already managed with priority '{}': {}",
                dir.priority,
                dir.path.display()
            )),
            Some(_) => plan.add_action(PlanAction::UpdateDirectory(dir)),
        })
    }

    fn plan_symlink(
        &self,
        folders: &ManagedFolders,
        config: &Config,
        path_dirs: &[String],
        probe: &dyn DirectoryProbe,
    ) -> Result<OperationPlan> {
        let AddOptions {
            path,
            priority,
            force,
            ..
        } = &self.options;
        let (priority, force) = (*priority, *force);

        let name = match &self.options.name {
            Some(name) => name.clone(),
            None => path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .ok_or_else(|| Error::InvalidPath {
                    path: path.clone(),
                    reason: "cannot derive a link name".to_string(),
                })?,
        };
        validate_link_name(&name)?;

        let folder = folders.folder(priority);
        if !folder.is_dir() {
            return Err(Error::FolderUnavailable {
                priority,
                path: folder.to_path_buf(),
                reason: "does not exist; run 'pathman init' to create it".to_string(),
            });
        }

        let mut plan = OperationPlan::new(format!("Add '{name}'"));

        let link = folders.link_path(priority, &name);
        if fs::symlink_metadata(&link).is_ok() {
            if !force {
                return Err(Error::AlreadyExists { name, priority });
            }
            plan = plan.add_action(PlanAction::RemoveLink {
                name: name.clone(),
                priority,
            });
        }

        if !force {
            let managed = managed_locations(folders, &config.managed_directories);
            match check_new_link(&name, priority, path_dirs, folders, &managed, probe) {
                MaskingCheck::Clear => {}
                MaskingCheck::Clash(report) => return Err(Error::MaskingConflict { report }),
                MaskingCheck::Undetermined { existing } => {
                    for other in existing {
                        plan = plan.add_warning(format!(
                            "executable '{name}' exists at {}",
                            other.display()
                        ));
                    }
                }
            }
        }

        if is_symlink(&folders.link_path(priority.other(), &name)) {
            plan = plan.add_action(PlanAction::RemoveLink {
                name: name.clone(),
                priority: priority.other(),
            });
        }

        Ok(plan.add_action(PlanAction::CreateLink {
            name,
            target: path.clone(),
            priority,
        }))
    }
}
