//! Main entry point for the pathman CLI.
//!
//! pathman controls which executables are visible on `PATH` by keeping
//! symlinks in a front and a back folder and a list of managed directories:
//! - `init`: Create the managed folders
//! - `add` / `remove` / `rename`: Manage symlinks and directories
//! - `get` / `set`: Inspect and change priorities
//! - `list` / `summary`: Show what is managed and report clashes
//! - `clean`: Remove broken symlinks and missing directories
//! - `path`: Print the adjusted PATH

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::SummaryCommand;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = pathman::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        managed_folder: cli.managed_folder,
        config: cli.config,
    };

    let result = match cli.command {
        None => SummaryCommand::default().execute(&global),
        Some(cli::Command::Init(cmd)) => cmd.execute(&global),
        Some(cli::Command::Add(cmd)) => cmd.execute(&global),
        Some(cli::Command::Remove(cmd)) => cmd.execute(&global),
        Some(cli::Command::Rename(cmd)) => cmd.execute(&global),
        Some(cli::Command::Get(cmd)) => cmd.execute(&global),
        Some(cli::Command::Set(cmd)) => cmd.execute(&global),
        Some(cli::Command::List(cmd)) => cmd.execute(&global),
        Some(cli::Command::Summary(cmd)) => cmd.execute(&global),
        Some(cli::Command::Clean(cmd)) => cmd.execute(&global),
        Some(cli::Command::Path(cmd)) => cmd.execute(&global),
        Some(cli::Command::Completions(cmd)) => cmd.execute(&global),
        Some(cli::Command::Version(cmd)) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
