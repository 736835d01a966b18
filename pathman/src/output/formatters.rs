//! List formatter implementations.

use serde::Serialize;

use crate::Result;

use super::listing::{sort_by_kind, sort_by_priority, ListEntry};
use super::ListFormatter;

fn sorted(entries: &[ListEntry], by_priority: bool) -> Vec<ListEntry> {
    let mut entries = entries.to_vec();
    if by_priority {
        sort_by_priority(&mut entries);
    } else {
        sort_by_kind(&mut entries);
    }
    entries
}

/// One label per line.
pub struct CompactFormatter {
    by_priority: bool,
}

impl CompactFormatter {
    /// Create a compact formatter; `by_priority` groups front before back
    /// instead of files before directories.
    #[must_use]
    pub const fn new(by_priority: bool) -> Self {
        Self { by_priority }
    }
}

impl ListFormatter for CompactFormatter {
    fn format(&self, entries: &[ListEntry]) -> Result<String> {
        Ok(sorted(entries, self.by_priority)
            .iter()
            .map(ListEntry::label)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Labelled blocks separated by blank lines.
pub struct LongFormatter {
    by_priority: bool,
}

impl LongFormatter {
    /// Create a long formatter.
    #[must_use]
    pub const fn new(by_priority: bool) -> Self {
        Self { by_priority }
    }
}

impl ListFormatter for LongFormatter {
    fn format(&self, entries: &[ListEntry]) -> Result<String> {
        let blocks: Vec<String> = sorted(entries, self.by_priority)
            .iter()
            .map(|entry| match entry {
                ListEntry::File {
                    name,
                    symlink,
                    priority,
                } => format!(
                    "{:<13} {name}\n{:<13} {symlink}\n{:<13} {priority}",
                    "File:", "Symlink:", "Priority:"
                ),
                ListEntry::Directory { path, priority } => format!(
                    "{:<13} {}\n{:<13} {priority}",
                    "Directory:",
                    path.display(),
                    "Priority:"
                ),
            })
            .collect();
        Ok(blocks.join("\n\n"))
    }
}

#[derive(Serialize)]
struct JsonFile<'a> {
    file: &'a str,
    symlink: &'a str,
    priority: &'static str,
}

#[derive(Serialize)]
struct JsonDirectory {
    directory: String,
    priority: &'static str,
}

#[derive(Serialize)]
struct JsonListing<'a> {
    files: Vec<JsonFile<'a>>,
    directories: Vec<JsonDirectory>,
}

/// `{"files": [...], "directories": [...]}`, each sorted alphabetically,
/// indented by four spaces.
pub struct JsonFormatter;

impl ListFormatter for JsonFormatter {
    fn format(&self, entries: &[ListEntry]) -> Result<String> {
        let mut listing = JsonListing {
            files: Vec::new(),
            directories: Vec::new(),
        };
        for entry in entries {
            match entry {
                ListEntry::File {
                    name,
                    symlink,
                    priority,
                } => listing.files.push(JsonFile {
                    file: name,
                    symlink,
                    priority: priority.as_str(),
                }),
                ListEntry::Directory { path, priority } => listing.directories.push(JsonDirectory {
                    directory: path.to_string_lossy().into_owned(),
                    priority: priority.as_str(),
                }),
            }
        }
        listing.files.sort_by(|a, b| a.file.cmp(b.file));
        listing.directories.sort_by(|a, b| a.directory.cmp(&b.directory));

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        listing.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
