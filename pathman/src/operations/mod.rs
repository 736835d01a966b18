//! Changes to managed items, using the plan-execute pattern.
//!
//! Each operation first builds an [`OperationPlan`] describing every
//! filesystem and configuration change, without touching anything. The plan
//! can be printed, or handed to a [`PlanExecutor`] to apply it for real or
//! as a dry run.
//!
//! # Examples
//!
//! ```no_run
//! use pathman::config::{Config, ConfigLoader};
//! use pathman::operations::{PlanExecutor, RenamePlan};
//!
//! let (mut config, config_path) = ConfigLoader::load(None).unwrap();
//! let folders = config.managed_folders().unwrap();
//!
//! let plan = RenamePlan::new("python3", "py").build_plan(&folders).unwrap();
//! let result = PlanExecutor::new(&folders, &mut config).execute(&plan).unwrap();
//! if result.config_changed {
//!     ConfigLoader::save(&config, &config_path).unwrap();
//! }
//! ```

pub mod add;
pub mod cleanup;
pub mod executor;
pub mod init;
pub mod plan;
pub mod priority;
pub mod remove;
pub mod rename;

use std::fs;

use crate::error::{Error, Result};
use crate::managed::{ManagedFolders, Priority};

pub use add::{AddOptions, AddPlan};
pub use cleanup::CleanupPlan;
pub use executor::{create_folder, BatchResult, ExecutionResult, PlanExecutor};
pub use init::{
    append_to_profile, choose_profile, init_folders, is_on_path, profile_has_pathman_export,
    InitOptions, InitResult,
};
pub use plan::{OperationPlan, PlanAction};
pub use priority::{show_priority, PriorityPlan};
pub use remove::RemovePlan;
pub use rename::RenamePlan;

/// True if the folder for `priority` holds a symlink called `name`.
///
/// Something other than a symlink under that name is an error: pathman
/// never touches files it did not create.
pub(crate) fn holds_link(folders: &ManagedFolders, name: &str, priority: Priority) -> Result<bool> {
    let path = folders.link_path(priority, name);
    match fs::symlink_metadata(&path) {
        Ok(meta) if meta.file_type().is_symlink() => Ok(true),
        Ok(_) => Err(Error::NotASymlink { path }),
        Err(_) => Ok(false),
    }
}

/// Front first, then back.
pub(crate) fn locate_link(folders: &ManagedFolders, name: &str) -> Result<Option<Priority>> {
    for priority in Priority::ALL {
        if holds_link(folders, name, priority)? {
            return Ok(Some(priority));
        }
    }
    Ok(None)
}
