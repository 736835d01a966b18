//! Filesystem lookups used by clash detection.

use std::path::Path;

/// Answers whether a directory directly contains an entry with a given name.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryProbe {
    /// True if `dir/name` exists. Lookup failures count as absent.
    fn contains(&self, dir: &str, name: &str) -> bool;
}

/// Probe backed by the real filesystem.
///
/// Follows symlinks like a shell's `PATH` lookup does, so a dangling link is
/// not counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl DirectoryProbe for FsProbe {
    fn contains(&self, dir: &str, name: &str) -> bool {
        std::fs::metadata(Path::new(dir).join(name)).is_ok()
    }
}
