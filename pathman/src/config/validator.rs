//! Configuration validation.

use std::collections::HashSet;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::managed::ManagedFolders;

/// Checks a loaded configuration before it is used.
///
/// # Examples
///
/// ```
/// use pathman::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates every field.
    ///
    /// The managed folder must be usable as a base for the two symlink
    /// folders; every managed directory must be absolute, non-empty and
    /// UTF-8; no directory may be listed twice.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(folder) = &config.managed_folder {
            ManagedFolders::from_base(folder)?;
        }

        let mut seen = HashSet::new();
        for dir in &config.managed_directories {
            dir.validate()?;
            if !seen.insert(&dir.path) {
                return Err(Error::Validation {
                    field: "managed_directories".to_string(),
                    message: format!("'{}' is listed more than once", dir.path.display()),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use crate::managed::{ManagedDirectory, Priority};
    use std::path::PathBuf;

    #[test]
    fn test_relative_folder_rejected() {
        let config = Config {
            managed_folder: Some(PathBuf::from("links")),
            ..Config::default()
        };
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_relative_directory_rejected() {
        let config: Config = serde_json::from_str(
            r#"{"managed_directories": [{"path": "bin", "priority": "front"}]}"#,
        )
        .unwrap();
        assert!(matches!(
            ConfigValidator::validate(&config),
            Err(Error::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_duplicate_directory_rejected() {
        let dir = ManagedDirectory::new("/opt/bin", Priority::Front).unwrap();
        let config = Config {
            managed_folder: None,
            managed_directories: vec![dir.clone(), ManagedDirectory { priority: Priority::Back, ..dir }],
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}
