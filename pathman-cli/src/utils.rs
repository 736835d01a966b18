//! Utility functions for CLI operations.
//!
//! This module provides the pieces every command shares: global options,
//! the loaded configuration with its resolved folders, and applying a plan
//! with the usual reporting.

use crate::error::CliError;
use pathman::config::{ConfigLoader, ConfigValidator, EnvironmentConfig};
use pathman::operations::{OperationPlan, PlanExecutor};
use pathman::path::{absolutize, split_path_list};
use pathman::{Config, ManagedFolders};
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the managed folder base.
    pub managed_folder: Option<PathBuf>,

    /// Override the configuration file location.
    pub config: Option<PathBuf>,
}

/// Everything a command needs to know about the current setup.
///
/// The environment is read once here; commands and the library only see
/// plain values.
#[derive(Debug)]
pub struct Context {
    /// Loaded configuration (with overrides applied).
    pub config: Config,

    /// Where the configuration is saved back to.
    pub config_path: PathBuf,

    /// `managed_folder` as written in the file, before any override.
    file_folder: Option<PathBuf>,

    /// The managed folder base.
    pub base: PathBuf,

    /// The front and back folders under `base`.
    pub folders: ManagedFolders,

    /// The incoming `PATH`, unsplit.
    pub path_var: String,

    /// The incoming `PATH`, split into entries.
    pub path_dirs: Vec<String>,

    /// Current working directory, used to resolve relative arguments.
    pub cwd: PathBuf,
}

impl Context {
    /// Writes the configuration back to where it was loaded from.
    ///
    /// Flag and environment overrides of the managed folder are not
    /// persisted.
    pub fn save(&self) -> Result<(), CliError> {
        let mut on_disk = self.config.clone();
        on_disk.managed_folder.clone_from(&self.file_folder);
        ConfigLoader::save(&on_disk, &self.config_path)?;
        Ok(())
    }
}

/// Load configuration and resolve the managed folders.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_context(global: &GlobalOptions) -> Result<Context, CliError> {
    let cwd = env::current_dir()?;
    let explicit_config = global
        .config
        .as_deref()
        .map(|p| resolve_against(p, &cwd))
        .transpose()?;

    let config_error = |e: pathman::Error| CliError::Config(e.to_string());
    let config_path = ConfigLoader::resolve_path(explicit_config.as_deref()).map_err(config_error)?;
    let mut config = ConfigLoader::load_or_default(&config_path).map_err(config_error)?;
    let file_folder = config.managed_folder.clone();

    EnvironmentConfig::apply_overrides(&mut config).map_err(config_error)?;
    if let Some(folder) = &global.managed_folder {
        config.managed_folder = Some(resolve_against(folder, &cwd)?);
    }
    ConfigValidator::validate(&config).map_err(config_error)?;

    let base = config.base_folder()?;
    let folders = ManagedFolders::from_base(&base)?;
    let path_var = match env::var_os("PATH") {
        Some(raw) => raw.into_string().map_err(|raw| non_unicode_path(&raw))?,
        None => String::new(),
    };
    let path_dirs = split_path_list(&path_var);

    if global.verbose {
        eprintln!("Using configuration: {}", config_path.display());
        eprintln!("Using managed folder: {}", base.display());
    }

    Ok(Context {
        config,
        config_path,
        file_folder,
        base,
        folders,
        path_var,
        path_dirs,
        cwd,
    })
}

/// Names the first `PATH` entry that is not valid UTF-8.
///
/// Composing from a lossy copy would drop or mangle entries, so such a
/// `PATH` is refused outright.
fn non_unicode_path(raw: &OsStr) -> CliError {
    let entry = env::split_paths(raw)
        .find(|dir| dir.to_str().is_none())
        .map_or_else(|| raw.to_string_lossy().into_owned(), |dir| dir.display().to_string());
    CliError::Environment(format!("PATH entry is not valid UTF-8: {entry}"))
}

/// Make a user-supplied path absolute, expanding `~`.
pub fn resolve_against(path: &Path, cwd: &Path) -> Result<PathBuf, CliError> {
    Ok(absolutize(path, cwd)?)
}

/// Print plan warnings, run the plan, report what was done, and save the
/// configuration if it changed.
///
/// An empty plan only prints its warnings.
pub fn apply_plan(
    ctx: &mut Context,
    plan: &OperationPlan,
    dry_run: bool,
    global: &GlobalOptions,
) -> Result<(), CliError> {
    for warning in &plan.warnings {
        eprintln!("Warning: {warning}");
    }
    if plan.is_empty() {
        return Ok(());
    }

    let mut executor = PlanExecutor::new(&ctx.folders, &mut ctx.config);
    if dry_run {
        executor = executor.dry_run();
    }
    let result = executor.execute(plan)?;

    if !global.quiet {
        let prefix = if result.dry_run { "Would: " } else { "" };
        for action in &result.actions_taken {
            println!("{prefix}{action}");
        }
    }

    if result.config_changed {
        ctx.save()?;
    }
    Ok(())
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

/// True if stdin is attached to a terminal, so prompts can be shown.
pub fn is_interactive() -> bool {
    use std::io::IsTerminal;
    std::io::stdin().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_resolve_against_relative() {
        let resolved = resolve_against(Path::new("bin/../tools"), Path::new("/work")).unwrap();
        assert_eq!(resolved, PathBuf::from("/work/tools"));
    }

    #[test]
    #[cfg(unix)]
    fn test_non_unicode_path_names_entry() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/usr/bin:/opt/caf\xe9:/bin");
        let err = non_unicode_path(raw);
        assert_eq!(err.exit_code(), 7);
        assert_eq!(
            err.to_string(),
            "Environment error: PATH entry is not valid UTF-8: /opt/caf\u{fffd}"
        );
    }

    #[test]
    fn test_shorten_path_outside_home() {
        let path = Path::new("/definitely/not/home");
        assert_eq!(shorten_path(path), "/definitely/not/home");
    }
}
