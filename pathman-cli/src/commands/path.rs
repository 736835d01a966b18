//! Command to print the adjusted `PATH`.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;
use pathman::path::compose_path;

/// Print the adjusted PATH for the shell to export.
#[derive(Args)]
pub struct PathCommand {}

impl PathCommand {
    /// Execute the path command.
    ///
    /// Output is the bare value with no decoration, so it can be captured
    /// by `$(pathman path)`.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        let composed = compose_path(
            &ctx.path_var,
            &ctx.folders,
            &ctx.config.managed_directories,
        );
        println!("{composed}");
        Ok(())
    }
}
