//! Remove command implementation.

use crate::error::CliError;
use crate::utils::{apply_plan, load_context, GlobalOptions};
use clap::Args;
use pathman::operations::RemovePlan;

/// Remove a symlink or a managed directory.
#[derive(Args)]
pub struct RemoveCommand {
    /// Symlink name, or path of a managed directory
    #[arg(value_name = "NAME_OR_DIR")]
    pub target: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl RemoveCommand {
    /// Execute the remove command.
    ///
    /// Names are looked up in the front folder, then the back folder; only
    /// if neither holds a symlink is the argument treated as a directory.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut ctx = load_context(global)?;
        let plan = RemovePlan::new(self.target, &ctx.cwd).build_plan(&ctx.folders, &ctx.config)?;
        apply_plan(&mut ctx, &plan, self.dry_run, global)
    }
}
