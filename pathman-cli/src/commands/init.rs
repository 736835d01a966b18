//! Init command implementation.
//!
//! This module implements the `init` command, which creates the managed
//! folder with its front and back subfolders and helps put them on `PATH`.

use crate::error::CliError;
use crate::utils::{is_interactive, load_context, shorten_path, GlobalOptions};
use clap::Args;
use dialoguer::Confirm;
use pathman::operations::{
    append_to_profile, choose_profile, init_folders, is_on_path, InitOptions,
};
use pathman::output::ShellType;
use std::env;

/// Create the managed folders and set up shell integration.
#[derive(Args)]
pub struct InitCommand {
    /// Add the shell integration to the profile without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;

        if self.dry_run {
            println!("Dry-run mode: no changes will be made");
        }

        let options = InitOptions::new(&ctx.base).with_dry_run(self.dry_run);
        let result = init_folders(&options)?;
        let verb = if self.dry_run { "Would create" } else { "Created" };

        if !result.created.contains(&ctx.base) {
            println!("Managed folder already exists: {}", ctx.base.display());
        }
        for created in &result.created {
            let label = if created == &ctx.base {
                "managed folder"
            } else if created == result.folders.front() {
                "front subfolder"
            } else {
                "back subfolder"
            };
            println!("{verb} {label}: {}", created.display());
        }
        if let Some(mode) = result.insecure_mode {
            println!("WARNING: Folder has insecure permissions: {mode:04o}");
        }

        let on_path = is_on_path(result.folders.front(), &ctx.path_dirs)
            && is_on_path(result.folders.back(), &ctx.path_dirs);
        if on_path {
            if !global.quiet {
                println!("The front and back subfolders are already on your PATH.");
            }
            return Ok(());
        }

        println!();
        println!("The managed folders are not on your PATH yet.");

        let shell = ShellType::from_shell_var(env::var("SHELL").ok().as_deref());
        let script = shell.integration_script();

        if shell.is_bash() && !self.dry_run {
            if let Some(home) = home::home_dir() {
                let profile = choose_profile(&home);
                let shown = shorten_path(&profile);
                let accepted = self.yes
                    || (is_interactive()
                        && Confirm::new()
                            .with_prompt(format!("Add pathman to {shown}?"))
                            .default(true)
                            .interact()?);

                if accepted {
                    if append_to_profile(&profile, script)? {
                        println!("Added pathman to {shown}. Start a new shell to pick it up.");
                    } else {
                        println!("{shown} already sets up pathman.");
                    }
                    return Ok(());
                }
            }
        }

        println!("To add it manually, add these lines to your shell startup file:");
        println!();
        println!("# Added by pathman");
        print!("{script}");
        Ok(())
    }
}
