//! Set command implementation.
//!
//! Moves a symlink between the front and back folders, or changes the
//! priority of a managed directory in place.

use crate::error::CliError;
use crate::utils::{apply_plan, load_context, GlobalOptions};
use clap::Args;
use pathman::operations::PriorityPlan;
use pathman::Priority;

/// Change the priority of a symlink or managed directory.
#[derive(Args)]
pub struct SetCommand {
    /// Symlink name, or path of a managed directory
    #[arg(value_name = "NAME_OR_DIR")]
    pub target: String,

    /// New priority
    #[arg(long, value_enum)]
    pub priority: Priority,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl SetCommand {
    /// Execute the set command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut ctx = load_context(global)?;
        let plan = PriorityPlan::new(self.target, self.priority, &ctx.cwd)
            .build_plan(&ctx.folders, &ctx.config)?;
        apply_plan(&mut ctx, &plan, self.dry_run, global)
    }
}
