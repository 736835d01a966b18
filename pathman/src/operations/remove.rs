//! Planning `remove`: a symlink by name, else a managed directory by path.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::managed::{validate_link_name, ManagedFolders};
use crate::path::absolutize;

use super::locate_link;
use super::plan::{OperationPlan, PlanAction};

/// Builds the plan for a remove operation.
///
/// The argument is first tried as a symlink name in the front folder, then
/// the back folder. Failing that it is resolved against `cwd` and looked up
/// among the managed directories.
pub struct RemovePlan {
    target: String,
    cwd: PathBuf,
}

impl RemovePlan {
    /// Creates a planner for `target`, resolving relative paths against `cwd`.
    #[must_use]
    pub fn new(target: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            cwd: cwd.into(),
        }
    }

    /// Builds the plan without changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASymlink`] if a folder holds a non-symlink with
    /// that name, and [`Error::NotFound`] if nothing matches.
    pub fn build_plan(&self, folders: &ManagedFolders, config: &Config) -> Result<OperationPlan> {
        let plan = OperationPlan::new(format!("Remove {}", self.target));

        if validate_link_name(&self.target).is_ok() {
            if let Some(priority) = locate_link(folders, &self.target)? {
                return Ok(plan.add_action(PlanAction::RemoveLink {
                    name: self.target.clone(),
                    priority,
                }));
            }
        }

        let absolute = absolutize(self.target.as_ref(), &self.cwd)?;
        match config.find_directory(&absolute) {
            Some(dir) => Ok(plan.add_action(PlanAction::RemoveDirectory(dir.path.clone()))),
            None => Err(Error::NotFound {
                resource: format!(
                    "'{}' as symlink or managed directory ({})",
                    self.target,
                    absolute.display()
                ),
            }),
        }
    }
}
