//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use pathman::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// An interactive prompt could not be shown or read.
    Prompt(dialoguer::Error),

    /// Configuration error.
    Config(String),

    /// The process environment cannot be used as is.
    Environment(String),

    /// Semantic failure (e.g., some cleanup items failed) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (masking conflict, existing link, partial cleanup)
    /// - 3: Managed folder unavailable
    /// - 4: Invalid arguments
    /// - 5: I/O or prompt error
    /// - 6: Other library error
    /// - 7: Configuration or environment error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::MaskingConflict { .. } | LibError::AlreadyExists { .. } => 1,
                LibError::FolderUnavailable { .. } => 3,
                LibError::Validation { .. } | LibError::InvalidPath { .. } => 4,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) | CliError::Prompt(_) => 5,
            CliError::Config(_) | CliError::Environment(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Prompt(e) => write!(f, "Prompt failed: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::Environment(msg) => write!(f, "Environment error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Prompt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        // A malformed config file is a configuration problem, not a library one
        match e {
            LibError::Configuration(inner) => CliError::Config(inner.to_string()),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(e: dialoguer::Error) -> Self {
        CliError::Prompt(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathman::Priority;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::SemanticFailure("x".into()).exit_code(), 1);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(CliError::Config("x".into()).exit_code(), 7);

        let exists = CliError::from(LibError::AlreadyExists {
            name: "rg".into(),
            priority: Priority::Front,
        });
        assert_eq!(exists.exit_code(), 1);

        let unavailable = CliError::from(LibError::FolderUnavailable {
            priority: Priority::Back,
            path: PathBuf::from("/m/back"),
            reason: "denied".into(),
        });
        assert_eq!(unavailable.exit_code(), 3);

        let missing = CliError::from(LibError::NotFound {
            resource: "rg".into(),
        });
        assert_eq!(missing.exit_code(), 6);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CliError::from(LibError::Configuration(json_err));
        assert_eq!(err.exit_code(), 7);
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
