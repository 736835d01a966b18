//! Configuration for pathman.
//!
//! Configuration is a small JSON file holding the managed base folder and
//! the list of managed directories. Values are resolved with this
//! precedence (highest first):
//!
//! 1. Command-line flags (applied by the CLI)
//! 2. Environment variables (`PATHMAN_FOLDER`, `PATHMAN_CONFIG`)
//! 3. The configuration file
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use pathman::config::Config;
//! use std::path::Path;
//!
//! let config = Config {
//!     managed_folder: Some("/srv/links".into()),
//!     ..Config::default()
//! };
//! # #[cfg(unix)]
//! assert_eq!(
//!     config.managed_folders().unwrap().front(),
//!     Path::new("/srv/links/front")
//! );
//! ```

pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

use std::path::PathBuf;

pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, UpsertOutcome};
pub use validator::ConfigValidator;

use crate::error::{Error, Result};
use crate::managed::ManagedFolders;

/// The base folder used when none is configured:
/// `~/.local/bin/pathman-links`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_managed_folder() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "managed_folder".to_string(),
        message: "cannot determine home directory".to_string(),
    })?;
    Ok(home.join(".local").join("bin").join("pathman-links"))
}

impl Config {
    /// The base folder, configured or default.
    ///
    /// # Errors
    ///
    /// Returns an error if no folder is configured and the home directory is
    /// unknown.
    pub fn base_folder(&self) -> Result<PathBuf> {
        match &self.managed_folder {
            Some(folder) => Ok(folder.clone()),
            None => default_managed_folder(),
        }
    }

    /// The front/back folder pair under the base folder.
    ///
    /// # Errors
    ///
    /// Returns an error if the base folder is unknown or invalid.
    pub fn managed_folders(&self) -> Result<ManagedFolders> {
        ManagedFolders::from_base(&self.base_folder()?)
    }
}
