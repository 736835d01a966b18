//! Detection of naming conflicts between managed and unmanaged executables.
//!
//! Two kinds of conflict are recognised:
//!
//! - **Name clashes**: the same command name is linked in both the front and
//!   the back folder, so the back link can never be reached.
//! - **Masking clashes**: a managed executable shares its base name with an
//!   unrelated executable elsewhere on `PATH`, so one of them hides the other.
//!
//! Decisions here are pure; filesystem lookups go through a
//! [`DirectoryProbe`] so they can be replaced in tests.

mod masking;
mod probe;
mod report;

pub use masking::{check_new_link, find_masking_clashes, find_name_clashes, MaskingCheck};
pub use probe::{DirectoryProbe, FsProbe};
pub use report::{ClashKind, ClashReport};

#[cfg(test)]
pub(crate) use probe::MockDirectoryProbe;
