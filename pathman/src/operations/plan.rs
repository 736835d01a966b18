//! Plan types for managed-item operations.
//!
//! A plan lists the filesystem and configuration changes an operation will
//! make, without making them. Plans can be shown to the user, executed for
//! real, or run in dry-run mode.

use std::path::PathBuf;

use crate::managed::{ManagedDirectory, Priority};

/// A single change to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Create a symlink `name -> target` in the folder for `priority`.
    CreateLink {
        /// Command name.
        name: String,
        /// What the link points at.
        target: PathBuf,
        /// Which folder gets the link.
        priority: Priority,
    },

    /// Delete a symlink from a folder.
    RemoveLink {
        /// Command name.
        name: String,
        /// Which folder holds the link.
        priority: Priority,
    },

    /// Delete a symlink by its full path.
    ///
    /// Used for cleanup, where a link's name may not be valid UTF-8 and so
    /// cannot be rebuilt from the displayed name.
    PruneLink {
        /// Full path of the link file.
        location: PathBuf,
        /// Which folder holds the link.
        priority: Priority,
    },

    /// Move a symlink to the other folder, keeping its target.
    MoveLink {
        /// Command name.
        name: String,
        /// Folder it currently lives in.
        from: Priority,
    },

    /// Rename a symlink within its folder.
    RenameLink {
        /// Current name.
        from: String,
        /// New name.
        to: String,
        /// Folder holding the link.
        priority: Priority,
    },

    /// Append a directory to the managed list.
    AddDirectory(ManagedDirectory),

    /// Change the priority of an already managed directory.
    UpdateDirectory(ManagedDirectory),

    /// Drop a directory from the managed list.
    RemoveDirectory(PathBuf),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathman::operations::PlanAction;
    /// use pathman::Priority;
    ///
    /// let action = PlanAction::MoveLink { name: "rg".into(), from: Priority::Back };
    /// assert_eq!(action.description(), "Move 'rg' from back to front");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateLink {
                name,
                target,
                priority,
            } => format!("Add '{name}' -> '{}' ({priority})", target.display()),
            Self::RemoveLink { name, priority } => format!("Remove '{name}' (from {priority})"),
            Self::PruneLink { location, priority } => {
                let name = location
                    .file_name()
                    .map_or_else(|| location.to_string_lossy(), |n| n.to_string_lossy());
                format!("Remove '{name}' (from {priority})")
            }
            Self::MoveLink { name, from } => {
                format!("Move '{name}' from {from} to {}", from.other())
            }
            Self::RenameLink { from, to, priority } => {
                format!("Rename '{from}' to '{to}' (in {priority})")
            }
            Self::AddDirectory(dir) => {
                format!("Add directory ({}): {}", dir.priority, dir.path.display())
            }
            Self::UpdateDirectory(dir) => format!(
                "Update directory priority to '{}': {}",
                dir.priority,
                dir.path.display()
            ),
            Self::RemoveDirectory(path) => format!("Remove directory: {}", path.display()),
        }
    }

    /// True if the action changes configuration rather than the filesystem.
    #[must_use]
    pub const fn touches_config(&self) -> bool {
        matches!(
            self,
            Self::AddDirectory(_) | Self::UpdateDirectory(_) | Self::RemoveDirectory(_)
        )
    }
}

/// A complete operation plan describing all actions to be taken.
#[derive(Debug, Clone, Default)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The actions, in execution order.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates an empty plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathman::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Add rg");
    /// assert_eq!(plan.description, "Add rg");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
