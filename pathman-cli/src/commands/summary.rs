//! Summary command implementation.
//!
//! This is also what runs when `pathman` is invoked without a subcommand.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;
use pathman::output::Summary;
use pathman::FsProbe;

/// Summarise the managed setup and report clashes.
#[derive(Args, Default)]
pub struct SummaryCommand {}

impl SummaryCommand {
    /// Execute the summary command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;
        let summary = Summary::gather(
            &ctx.base,
            &ctx.folders,
            &ctx.config.managed_directories,
            &ctx.path_dirs,
            &FsProbe,
        );
        print!("{summary}");
        Ok(())
    }
}
