//! Rendering managed items for the terminal.
//!
//! `list` output comes in three formats, chosen through [`OutputFormat`].
//! The [`Summary`] report and the shell integration snippet
//! ([`ShellType::integration_script`]) live here as well.

mod formatters;
mod listing;
mod shell;
mod summary;

use crate::Result;

pub use formatters::{CompactFormatter, JsonFormatter, LongFormatter};
pub use listing::{collect_entries, sort_by_kind, sort_by_priority, EntryKind, ListEntry, ListFilter};
pub use shell::ShellType;
pub use summary::{FolderSummary, Summary};

/// Trait for rendering list entries.
pub trait ListFormatter {
    /// Format the entries into a string, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, entries: &[ListEntry]) -> Result<String>;
}

/// Available `list` formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Names and paths only.
    Compact,
    /// Labelled blocks with targets and priorities.
    Long,
    /// Machine-readable JSON.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// `by_priority` orders front before back instead of files before
    /// directories. JSON output always sorts each list alphabetically.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathman::output::{ListEntry, OutputFormat};
    /// use pathman::Priority;
    ///
    /// let entries = vec![ListEntry::File {
    ///     name: "rg".into(),
    ///     symlink: "/opt/rg".into(),
    ///     priority: Priority::Front,
    /// }];
    /// let text = OutputFormat::Compact.create_formatter(false).format(&entries).unwrap();
    /// assert_eq!(text, "rg");
    /// ```
    #[must_use]
    pub fn create_formatter(self, by_priority: bool) -> Box<dyn ListFormatter> {
        match self {
            Self::Compact => Box::new(CompactFormatter::new(by_priority)),
            Self::Long => Box::new(LongFormatter::new(by_priority)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
