//! Error types for the pathman library.
//!
//! This module provides the error hierarchy for all operations in the
//! pathman library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::clash::ClashReport;
use crate::managed::Priority;

/// Result type alias for operations that may fail with a pathman error.
///
/// # Examples
///
/// ```
/// use pathman::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathman library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A managed folder exists in configuration but cannot be listed.
    ///
    /// This is deliberately distinct from an empty folder.
    #[error("{priority} folder unavailable: {} ({reason})", path.display())]
    FolderUnavailable {
        /// Which managed folder.
        priority: Priority,
        /// The folder path.
        path: PathBuf,
        /// Why the folder could not be read.
        reason: String,
    },

    /// A configuration file could not be parsed or serialized.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested symlink or directory is not managed.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A symlink with this name already exists where one was about to be created.
    #[error("symlink already exists: {name} ({priority})")]
    AlreadyExists {
        /// The conflicting name.
        name: String,
        /// The folder that already holds it.
        priority: Priority,
    },

    /// An entry inside a managed folder is not a symlink.
    #[error("'{}' is not a symlink", path.display())]
    NotASymlink {
        /// The offending entry.
        path: PathBuf,
    },

    /// Adding a symlink would mask, or be masked by, another executable on PATH.
    #[error("symlink {report} (use --force to add anyway)")]
    MaskingConflict {
        /// The detected clash.
        report: ClashReport,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathman::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. } | Self::NotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::PermissionDenied { .. } => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// Builds the error for an I/O failure on a specific path.
    ///
    /// Not-found and permission errors get their dedicated variants so
    /// callers can branch on them; everything else keeps the path in the
    /// message.
    pub(crate) fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::PathNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::InvalidPath {
                reason: err.to_string(),
                path,
            },
        }
    }
}
