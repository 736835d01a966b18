//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the managed folders and set up shell integration
//! - `add`: Add an executable or a directory
//! - `remove`: Remove a symlink or a managed directory
//! - `rename`: Rename a symlink
//! - `get`: Show the priority of a symlink
//! - `set`: Change the priority of a symlink or directory
//! - `list`: List managed symlinks and directories
//! - `summary`: Summarise the setup and report clashes
//! - `clean`: Remove broken symlinks and missing directories
//! - `path`: Print the adjusted PATH
//! - `completions`: Generate shell completion scripts
//! - `version`: Print version information

pub mod add;
pub mod clean;
pub mod completions;
pub mod get;
pub mod init;
pub mod list;
pub mod path;
pub mod remove;
pub mod rename;
pub mod set;
pub mod summary;
pub mod version;

pub use add::AddCommand;
pub use clean::CleanCommand;
pub use completions::CompletionsCommand;
pub use get::GetCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use path::PathCommand;
pub use remove::RemoveCommand;
pub use rename::RenameCommand;
pub use set::SetCommand;
pub use summary::SummaryCommand;
pub use version::VersionCommand;
