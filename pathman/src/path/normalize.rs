//! Turning user-typed paths into absolute ones.
//!
//! Paths given to `add` and `remove` may be relative or start with `~`.
//! They are made absolute against an explicit base directory and cleaned
//! lexically (no symlinks are followed, so a symlink's own location is kept).

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading `~` to the home directory.
///
/// Supports `~` and `~/rest`; `~user` is rejected.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the path is not UTF-8, the home
/// directory is unknown, or `~user` syntax is used.
///
/// # Examples
///
/// ```
/// use pathman::path::expand_tilde;
/// use std::path::Path;
///
/// assert!(expand_tilde(Path::new("~/bin")).unwrap().is_absolute());
/// assert_eq!(expand_tilde(Path::new("/opt")).unwrap(), Path::new("/opt"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let text = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "path contains invalid UTF-8".to_string(),
    })?;

    let Some(rest) = text.strip_prefix('~') else {
        return Ok(path.to_path_buf());
    };

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "cannot determine home directory".to_string(),
    })?;

    if rest.is_empty() {
        Ok(home)
    } else if let Some(tail) = rest.strip_prefix('/').or_else(|| rest.strip_prefix('\\')) {
        Ok(home.join(tail))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Remove `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root, matching how the kernel resolves
/// `/..`.
///
/// # Examples
///
/// ```
/// use pathman::path::clean_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(clean_components(Path::new("/../x")), PathBuf::from("/x"));
/// ```
#[must_use]
pub fn clean_components(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !path.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(part) => {
                out.push(part);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Make `path` absolute against `base`, expanding `~` and cleaning it.
///
/// The base is passed in rather than read from the process so callers decide
/// when the working directory is sampled.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or `base` is relative.
///
/// # Examples
///
/// ```
/// use pathman::path::absolutize;
/// use std::path::{Path, PathBuf};
///
/// # #[cfg(unix)]
/// assert_eq!(
///     absolutize(Path::new("../tools/bin"), Path::new("/home/u/src")).unwrap(),
///     PathBuf::from("/home/u/tools/bin")
/// );
/// ```
pub fn absolutize(path: &Path, base: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;
    if expanded.is_absolute() {
        return Ok(clean_components(&expanded));
    }
    if !base.is_absolute() {
        return Err(Error::InvalidPath {
            path: base.to_path_buf(),
            reason: "base directory must be absolute".to_string(),
        });
    }
    Ok(clean_components(&base.join(expanded)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_home() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")).unwrap(), home);
        assert_eq!(expand_tilde(Path::new("~/bin")).unwrap(), home.join("bin"));
    }

    #[test]
    fn test_expand_tilde_user_rejected() {
        assert!(expand_tilde(Path::new("~root/bin")).is_err());
    }

    #[test]
    fn test_clean_relative_keeps_leading_parents() {
        assert_eq!(clean_components(Path::new("../a/./b/..")), PathBuf::from("../a"));
        assert_eq!(clean_components(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    #[cfg(unix)]
    fn test_absolutize() {
        let base = Path::new("/work");
        assert_eq!(
            absolutize(Path::new("bin"), base).unwrap(),
            PathBuf::from("/work/bin")
        );
        assert_eq!(
            absolutize(Path::new("/opt/./x/"), base).unwrap(),
            PathBuf::from("/opt/x")
        );
        assert!(absolutize(Path::new("bin"), Path::new("relative")).is_err());
    }

    #[test]
    fn test_absolutize_tilde() {
        let home = home::home_dir().unwrap();
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            absolutize(Path::new("~/.cargo/bin"), &cwd).unwrap(),
            home.join(".cargo/bin")
        );
    }

    #[cfg(unix)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn dotted_path() -> impl Strategy<Value = String> {
            prop::collection::vec(
                prop_oneof![
                    Just(".".to_string()),
                    Just("..".to_string()),
                    "[a-z0-9_-]{1,8}",
                ],
                1..=8,
            )
            .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            #[test]
            fn cleaning_is_idempotent(s in dotted_path()) {
                let once = clean_components(Path::new(&s));
                prop_assert_eq!(clean_components(&once), once.clone());
            }

            #[test]
            fn cleaned_absolute_has_no_dots(s in dotted_path()) {
                let cleaned = clean_components(Path::new(&s));
                prop_assert!(cleaned.is_absolute());
                for component in cleaned.components() {
                    prop_assert_ne!(component, Component::CurDir);
                    prop_assert_ne!(component, Component::ParentDir);
                }
            }
        }
    }
}
