//! Environment variable overrides.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::Result;
use crate::path::expand_tilde;

/// Overrides the managed base folder.
pub const FOLDER_ENV: &str = "PATHMAN_FOLDER";

/// Overrides the configuration file location.
pub const CONFIG_ENV: &str = "PATHMAN_CONFIG";

/// Reads `PATHMAN_*` overrides from the process environment.
///
/// # Examples
///
/// ```no_run
/// use pathman::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Applies `PATHMAN_FOLDER` on top of file configuration.
    ///
    /// Empty values are ignored. A leading `~` is expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if tilde expansion fails.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(folder) = non_empty(FOLDER_ENV) {
            config.managed_folder = Some(expand_tilde(&PathBuf::from(folder))?);
        }
        Ok(())
    }

    /// Configuration file named by `PATHMAN_CONFIG`, if set.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        non_empty(CONFIG_ENV).map(PathBuf::from)
    }

    /// `XDG_CONFIG_HOME`, if set and non-empty.
    #[must_use]
    pub fn xdg_config_home() -> Option<PathBuf> {
        non_empty("XDG_CONFIG_HOME").map(PathBuf::from)
    }
}

fn non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
