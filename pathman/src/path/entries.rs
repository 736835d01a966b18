//! Splitting and joining `PATH`-style directory lists.

/// The platform separator between `PATH` entries.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';

/// The platform separator between `PATH` entries.
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';

/// Splits a `PATH`-style string into its entries.
///
/// An empty string has no entries. Empty segments inside a non-empty string
/// are kept, since shells treat them as the current directory.
///
/// # Examples
///
/// ```
/// use pathman::path::split_path_list;
///
/// assert!(split_path_list("").is_empty());
/// # #[cfg(unix)]
/// assert_eq!(split_path_list("/usr/bin:/bin"), vec!["/usr/bin", "/bin"]);
/// ```
#[must_use]
pub fn split_path_list(list: &str) -> Vec<String> {
    if list.is_empty() {
        return Vec::new();
    }
    list.split(PATH_LIST_SEPARATOR).map(str::to_string).collect()
}

/// Joins entries with the platform separator.
///
/// # Examples
///
/// ```
/// use pathman::path::join_path_list;
///
/// # #[cfg(unix)]
/// assert_eq!(join_path_list(["/a", "/b"]), "/a:/b");
/// assert_eq!(join_path_list(Vec::<String>::new()), "");
/// ```
#[must_use]
pub fn join_path_list<I, S>(entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, entry) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(PATH_LIST_SEPARATOR);
        }
        out.push_str(entry.as_ref());
    }
    out
}
