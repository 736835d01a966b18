//! Reading and changing the priority of managed items.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::managed::{validate_link_name, ManagedDirectory, ManagedFolders, Priority};
use crate::path::absolutize;

use super::{holds_link, locate_link};
use super::plan::{OperationPlan, PlanAction};

/// Reports which folder holds the symlink `name`, front first.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if neither folder has it.
pub fn show_priority(folders: &ManagedFolders, name: &str) -> Result<Priority> {
    validate_link_name(name)?;
    locate_link(folders, name)?.ok_or_else(|| Error::NotFound {
        resource: format!("symlink '{name}' in either folder"),
    })
}

/// Builds the plan for moving an item to a given priority.
///
/// Symlinks are moved between folders. A managed directory, named by path,
/// has its priority updated in configuration.
pub struct PriorityPlan {
    target: String,
    priority: Priority,
    cwd: PathBuf,
}

impl PriorityPlan {
    /// Creates a planner, resolving directory paths against `cwd`.
    #[must_use]
    pub fn new(target: impl Into<String>, priority: Priority, cwd: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            priority,
            cwd: cwd.into(),
        }
    }

    /// Builds the plan without changing anything.
    ///
    /// An item that already has the requested priority yields an empty plan
    /// with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is not managed, or a symlink of the same
    /// name already occupies the destination folder.
    pub fn build_plan(&self, folders: &ManagedFolders, config: &Config) -> Result<OperationPlan> {
        let to = self.priority;
        let plan = OperationPlan::new(format!("Set priority of {} to {to}", self.target));

        if validate_link_name(&self.target).is_ok() {
            let name = &self.target;
            let in_source = holds_link(folders, name, to.other())?;
            let in_dest = holds_link(folders, name, to)?;
            match (in_source, in_dest) {
                (true, true) => {
                    return Err(Error::AlreadyExists {
                        name: name.clone(),
                        priority: to,
                    })
                }
                (true, false) => {
                    return Ok(plan.add_action(PlanAction::MoveLink {
                        name: name.clone(),
                        from: to.other(),
                    }))
                }
                (false, true) => return Ok(plan.add_warning(format!("'{name}' is already {to}"))),
                (false, false) => {}
            }
        }

        let absolute = absolutize(self.target.as_ref(), &self.cwd)?;
        match config.find_directory(&absolute) {
            Some(dir) if dir.priority == to => Ok(plan.add_warning(format!(
                "Directory already managed with priority '{to}': {}",
                dir.path.display()
            ))),
            Some(dir) => Ok(plan.add_action(PlanAction::UpdateDirectory(ManagedDirectory {
                path: dir.path.clone(),
                priority: to,
            }))),
            None => Err(Error::NotFound {
                resource: format!("'{}' as symlink or managed directory", self.target),
            }),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::symlink;

    fn setup() -> (tempfile::TempDir, ManagedFolders) {
        let temp = tempfile::tempdir().unwrap();
        let folders = ManagedFolders::from_base(temp.path()).unwrap();
        fs::create_dir_all(folders.front()).unwrap();
        fs::create_dir_all(folders.back()).unwrap();
        (temp, folders)
    }

    #[test]
    fn test_show_priority() {
        let (_temp, folders) = setup();
        symlink("/x", folders.back().join("x")).unwrap();
        assert_eq!(show_priority(&folders, "x").unwrap(), Priority::Back);
        assert!(show_priority(&folders, "y").unwrap_err().is_not_found());
    }

    #[test]
    fn test_move_between_folders() {
        let (_temp, folders) = setup();
        symlink("/x", folders.back().join("x")).unwrap();

        let plan = PriorityPlan::new("x", Priority::Front, "/")
            .build_plan(&folders, &Config::default())
            .unwrap();
        assert_eq!(
            plan.actions,
            vec![PlanAction::MoveLink {
                name: "x".into(),
                from: Priority::Back
            }]
        );

        let noop = PriorityPlan::new("x", Priority::Back, "/")
            .build_plan(&folders, &Config::default())
            .unwrap();
        assert!(noop.is_empty());
        assert_eq!(noop.warnings, vec!["'x' is already back"]);
    }

    #[test]
    fn test_both_folders_conflict() {
        let (_temp, folders) = setup();
        symlink("/x", folders.back().join("x")).unwrap();
        symlink("/y", folders.front().join("x")).unwrap();
        assert!(matches!(
            PriorityPlan::new("x", Priority::Front, "/").build_plan(&folders, &Config::default()),
            Err(Error::AlreadyExists { .. })
        ));
    }

    #[test]
    fn test_directory_priority() {
        let (_temp, folders) = setup();
        let mut config = Config::default();
        config.upsert_directory(ManagedDirectory::new("/opt/bin", Priority::Front).unwrap());

        let plan = PriorityPlan::new("/opt/bin", Priority::Back, "/")
            .build_plan(&folders, &config)
            .unwrap();
        assert_eq!(
            plan.actions,
            vec![PlanAction::UpdateDirectory(
                ManagedDirectory::new("/opt/bin", Priority::Back).unwrap()
            )]
        );

        assert!(PriorityPlan::new("/opt/none", Priority::Back, "/")
            .build_plan(&folders, &config)
            .unwrap_err()
            .is_not_found());
    }
}
