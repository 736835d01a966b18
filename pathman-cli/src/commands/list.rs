//! List command implementation.
//!
//! This module implements the `list` command, which displays managed
//! symlinks and directories in compact, long or JSON form.

use crate::error::CliError;
use crate::utils::{load_context, GlobalOptions};
use clap::Args;
use pathman::output::{collect_entries, EntryKind, ListFilter, OutputFormat};
use pathman::Priority;

/// List managed symlinks and directories.
#[derive(Args)]
pub struct ListCommand {
    /// Show symlink targets and priorities
    #[arg(short, long, conflicts_with = "json")]
    pub long: bool,

    /// Only show items with this priority
    #[arg(long, value_enum)]
    pub priority: Option<Priority>,

    /// Only show symlinks (file) or directories
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    pub kind: Option<EntryKind>,

    /// Only show the symlink or directory with this name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Order front before back instead of files before directories
    #[arg(long)]
    pub by_priority: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.long {
            OutputFormat::Long
        } else {
            OutputFormat::Compact
        }
    }

    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = load_context(global)?;

        let filter = ListFilter {
            priority: self.priority,
            kind: self.kind,
            name: self.name.clone(),
        };
        let entries = collect_entries(&ctx.folders, &ctx.config.managed_directories, &filter);

        if entries.is_empty() && !self.json {
            if !global.quiet {
                eprintln!("No managed items found.");
            }
            return Ok(());
        }

        let formatter = self.output_format().create_formatter(self.by_priority);
        println!("{}", formatter.format(&entries)?);
        Ok(())
    }
}
