//! Get command implementation.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;
use pathman::operations::show_priority;

/// Show the priority of a symlink.
#[derive(Args)]
pub struct GetCommand {
    /// Symlink name
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl GetCommand {
    /// Execute the get command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        let priority = show_priority(&ctx.folders, &self.name)?;
        println!("{priority}");
        Ok(())
    }
}
