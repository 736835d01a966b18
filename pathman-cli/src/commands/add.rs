//! Add command implementation.
//!
//! This module implements the `add` command. A file becomes a symlink in
//! the front or back folder; a directory becomes a managed directory.

use crate::error::CliError;
use crate::utils::{apply_plan, load_context, resolve_against, GlobalOptions};
use clap::Args;
use pathman::operations::{AddOptions, AddPlan};
use pathman::{FsProbe, Priority};
use std::path::PathBuf;

/// Add an executable or a directory.
#[derive(Args)]
pub struct AddCommand {
    /// Executable file or directory to add
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Name for the symlink (default: the file name)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Where to put it on PATH
    #[arg(long, value_enum, default_value = "front")]
    pub priority: Priority,

    /// Replace an existing symlink and skip the clash check
    #[arg(long)]
    pub force: bool,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut ctx = load_context(global)?;
        let path = resolve_against(&self.path, &ctx.cwd)?;

        let options = AddOptions::new(path)
            .with_name(self.name)
            .with_priority(self.priority)
            .with_force(self.force);
        let plan = AddPlan::new(options).build_plan(
            &ctx.folders,
            &ctx.config,
            &ctx.path_dirs,
            &FsProbe,
        )?;

        apply_plan(&mut ctx, &plan, self.dry_run, global)
    }
}
