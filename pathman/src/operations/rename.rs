//! Planning `rename`.

use crate::error::{Error, Result};
use crate::inventory::is_symlink;
use crate::managed::{validate_link_name, ManagedFolders};

use super::locate_link;
use super::plan::{OperationPlan, PlanAction};

/// Builds the plan for renaming a symlink within its folder.
pub struct RenamePlan {
    from: String,
    to: String,
}

impl RenamePlan {
    /// Creates a planner.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Builds the plan without changing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is invalid, `from` is not a managed
    /// symlink, or `to` already exists in the same folder.
    pub fn build_plan(&self, folders: &ManagedFolders) -> Result<OperationPlan> {
        validate_link_name(&self.from)?;
        validate_link_name(&self.to)?;

        let priority = locate_link(folders, &self.from)?.ok_or_else(|| Error::NotFound {
            resource: format!("symlink '{}'", self.from),
        })?;

        if std::fs::symlink_metadata(folders.link_path(priority, &self.to)).is_ok() {
            return Err(Error::AlreadyExists {
                name: self.to.clone(),
                priority,
            });
        }

        let mut plan = OperationPlan::new(format!("Rename '{}' to '{}'", self.from, self.to));
        if is_symlink(&folders.link_path(priority.other(), &self.to)) {
            plan = plan.add_warning(format!(
                "'{}' also exists in the {} folder; the names will clash",
                self.to,
                priority.other()
            ));
        }

        Ok(plan.add_action(PlanAction::RenameLink {
            from: self.from.clone(),
            to: self.to.clone(),
            priority,
        }))
    }
}
