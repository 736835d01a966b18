//! Configuration file discovery, loading and saving.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Directory name used under the XDG config home.
pub const CONFIG_DIR_NAME: &str = "pathman";

/// File name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Loads and saves the configuration file.
///
/// # Examples
///
/// ```
/// use pathman::config::{Config, ConfigLoader};
///
/// let temp = tempfile::tempdir().unwrap();
/// let path = temp.path().join("nested").join("config.json");
///
/// // A missing file is an empty configuration.
/// assert_eq!(ConfigLoader::load_or_default(&path).unwrap(), Config::default());
///
/// ConfigLoader::save(&Config::default(), &path).unwrap();
/// assert!(path.exists());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Works out where the configuration file lives.
    ///
    /// Precedence: `explicit`, then `PATHMAN_CONFIG`, then
    /// `$XDG_CONFIG_HOME/pathman/config.json`, then
    /// `~/.config/pathman/config.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if no candidate applies and the home directory is
    /// unknown.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = EnvironmentConfig::config_path() {
            return Ok(path);
        }
        Self::default_path(EnvironmentConfig::xdg_config_home().as_deref(), home::home_dir().as_deref())
    }

    /// The default location given the XDG config home and home directory.
    ///
    /// An empty XDG value is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if neither directory is available.
    pub fn default_path(xdg_config_home: Option<&Path>, home: Option<&Path>) -> Result<PathBuf> {
        let base = match (xdg_config_home, home) {
            (Some(xdg), _) if !xdg.as_os_str().is_empty() => xdg.to_path_buf(),
            (_, Some(home)) => home.join(".config"),
            _ => {
                return Err(Error::Validation {
                    field: "config path".to_string(),
                    message: "cannot determine home directory".to_string(),
                })
            }
        };
        Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid
    /// configuration JSON.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Reads a configuration file, treating a missing file as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Config> {
        match Self::load_file(path) {
            Err(Error::PathNotFound { .. }) => {
                log::debug!("no configuration at {}; using defaults", path.display());
                Ok(Config::default())
            }
            other => other,
        }
    }

    /// Loads, applies environment overrides, and validates.
    ///
    /// Returns the configuration together with the file path it belongs to,
    /// so callers can save changes back to the same place.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved, the file is invalid,
    /// an override is invalid, or validation fails.
    pub fn load(explicit: Option<&Path>) -> Result<(Config, PathBuf)> {
        let path = Self::resolve_path(explicit)?;
        let mut config = Self::load_or_default(&path)?;
        EnvironmentConfig::apply_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;
        Ok((config, path))
    }

    /// Writes the configuration as indented JSON, creating parent folders.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::from_io(parent, e))?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        config.serialize(&mut serializer)?;
        buf.push(b'\n');

        fs::write(path, buf).map_err(|e| Error::from_io(path, e))?;
        log::debug!("saved configuration to {}", path.display());
        Ok(())
    }
}
