//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, CleanCommand, CompletionsCommand, GetCommand, InitCommand, ListCommand,
    PathCommand, RemoveCommand, RenameCommand, SetCommand, SummaryCommand, VersionCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing which executables are visible on PATH.
#[derive(Parser)]
#[command(name = "pathman")]
#[command(version, about = "Manage which executables are visible on PATH", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the managed folder location
    #[arg(long, value_name = "PATH", global = true)]
    pub managed_folder: Option<PathBuf>,

    /// Override the configuration file location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Command to run (default: summary)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the managed folders and set up shell integration
    Init(InitCommand),

    /// Add an executable (as a symlink) or a directory
    Add(AddCommand),

    /// Remove a symlink or a managed directory
    #[command(alias = "rm")]
    Remove(RemoveCommand),

    /// Rename a symlink
    Rename(RenameCommand),

    /// Show the priority of a symlink
    Get(GetCommand),

    /// Change the priority of a symlink or managed directory
    Set(SetCommand),

    /// List managed symlinks and directories
    #[command(alias = "ls")]
    List(ListCommand),

    /// Summarise the managed setup and report clashes
    Summary(SummaryCommand),

    /// Remove broken symlinks and missing directories
    Clean(CleanCommand),

    /// Print the adjusted PATH
    Path(PathCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),

    /// Print version information
    Version(VersionCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["pathman", "--quiet"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.quiet);
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::try_parse_from(["pathman", "rm", "rg"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Remove(_))));

        let cli = Cli::try_parse_from(["pathman", "ls", "-l"]).unwrap();
        assert!(matches!(cli.command, Some(Command::List(_))));
    }

    #[test]
    fn test_set_requires_priority() {
        assert!(Cli::try_parse_from(["pathman", "set", "rg"]).is_err());
        assert!(Cli::try_parse_from(["pathman", "set", "rg", "--priority", "sideways"]).is_err());
        assert!(Cli::try_parse_from(["pathman", "set", "rg", "--priority", "back"]).is_ok());
    }
}
