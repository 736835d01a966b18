//! Rename command implementation.

use crate::error::CliError;
use crate::utils::{apply_plan, load_context, GlobalOptions};
use clap::Args;
use pathman::operations::RenamePlan;

/// Rename a symlink within its folder.
#[derive(Args)]
pub struct RenameCommand {
    /// Current symlink name
    #[arg(value_name = "OLD")]
    pub from: String,

    /// New symlink name
    #[arg(value_name = "NEW")]
    pub to: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl RenameCommand {
    /// Execute the rename command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut ctx = load_context(global)?;
        let plan = RenamePlan::new(self.from, self.to).build_plan(&ctx.folders)?;
        apply_plan(&mut ctx, &plan, self.dry_run, global)
    }
}
