//! Clean command implementation.
//!
//! Scans for broken symlinks and managed directories that are gone, lets
//! the user choose which to remove, then removes them in one batch.

use crate::error::CliError;
use crate::utils::{is_interactive, load_context, GlobalOptions};
use clap::Args;
use dialoguer::{Confirm, MultiSelect};
use pathman::cleanup::{scan_for_cleanup, CleanupCandidate};
use pathman::operations::{CleanupPlan, PlanExecutor};

/// Remove broken symlinks and missing directories.
#[derive(Args)]
pub struct CleanCommand {
    /// Remove everything found without prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Show what would be removed without removing it
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    /// Execute the clean command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut ctx = load_context(global)?;

        let mut candidates = scan_for_cleanup(&ctx.folders, &ctx.config.managed_directories);
        if candidates.is_empty() {
            println!("No broken symlinks or missing directories found.");
            return Ok(());
        }

        if !self.yes && !self.dry_run {
            if !is_interactive() {
                return Err(CliError::InvalidArguments(
                    "not running in a terminal; use --yes to clean without prompting".to_string(),
                ));
            }
            if !choose(&mut candidates)? {
                println!("Cleanup cancelled.");
                return Ok(());
            }
        }

        let plan = CleanupPlan::from_candidates(&candidates);
        if plan.is_empty() {
            println!("Nothing selected.");
            return Ok(());
        }

        let mut executor = PlanExecutor::new(&ctx.folders, &mut ctx.config);
        if self.dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute_batch(&plan);

        let verb = if result.dry_run { "Would remove" } else { "Removed" };
        if !global.quiet {
            for done in &result.succeeded {
                println!("{verb}: {done}");
            }
        }
        for (action, error) in &result.failed {
            eprintln!("Failed: {action}: {error}");
        }

        if result.config_changed {
            ctx.save()?;
        }

        if result.is_complete_success() {
            if !global.quiet && !result.dry_run {
                println!("Successfully cleaned up {} item(s).", result.succeeded.len());
            }
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} of {} item(s) could not be cleaned up",
                result.failed.len(),
                plan.len()
            )))
        }
    }
}

/// Shows the candidates with everything preselected and records the
/// user's choice. Returns false if the user backs out.
fn choose(candidates: &mut [CleanupCandidate]) -> Result<bool, CliError> {
    let items: Vec<String> = candidates.iter().map(ToString::to_string).collect();
    let defaults: Vec<bool> = candidates.iter().map(|c| c.selected).collect();

    let selections = MultiSelect::new()
        .with_prompt("Select items to remove (space to toggle, enter to confirm)")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    for (i, candidate) in candidates.iter_mut().enumerate() {
        candidate.selected = selections.contains(&i);
    }
    let count = selections.len();
    if count == 0 {
        return Ok(true);
    }

    println!("\nWill remove:");
    for candidate in candidates.iter().filter(|c| c.selected) {
        let what = if candidate.kind.is_symlink() {
            "Symlink"
        } else {
            "Directory (from config)"
        };
        println!("  {what}: {candidate}");
    }
    println!("Total: {count} item(s)\n");

    Ok(Confirm::new()
        .with_prompt("Proceed?")
        .default(true)
        .interact()?)
}
