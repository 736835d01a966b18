//! Clash report types.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Which side of a masking clash the managed executable is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClashKind {
    /// The managed executable hides the other one.
    Masks,
    /// The other executable hides the managed one.
    MaskedBy,
}

/// One masking clash between a managed and an unmanaged executable.
///
/// # Examples
///
/// ```
/// use pathman::clash::{ClashKind, ClashReport};
///
/// let report = ClashReport {
///     name: "foo".to_string(),
///     managed_dir: "/m/back".to_string(),
///     other_dir: "/usr/bin".to_string(),
///     kind: ClashKind::MaskedBy,
/// };
/// # #[cfg(unix)]
/// assert_eq!(report.to_string(), "foo (masked by /usr/bin/foo)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClashReport {
    /// The shared command name.
    pub name: String,
    /// The managed `PATH` entry hosting our executable.
    pub managed_dir: String,
    /// The unmanaged `PATH` entry hosting the other executable.
    pub other_dir: String,
    /// Who hides whom.
    pub kind: ClashKind,
}

impl ClashReport {
    /// Full path of the other executable.
    #[must_use]
    pub fn other_path(&self) -> String {
        Path::new(&self.other_dir)
            .join(&self.name)
            .to_string_lossy()
            .into_owned()
    }
}

impl fmt::Display for ClashReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relation = match self.kind {
            ClashKind::Masks => "masks",
            ClashKind::MaskedBy => "masked by",
        };
        write!(f, "{} ({relation} {})", self.name, self.other_path())
    }
}
