//! `PATH` list handling and composition.
//!
//! # Layout
//!
//! The adjusted `PATH` puts the front folder and front directories before
//! everything else already on `PATH`, and back directories plus the back
//! folder after it:
//!
//! ```text
//! /m/front : /home/u/.cargo/bin : /usr/bin : /bin : /m/back
//! ```
//!
//! # Examples
//!
//! ```
//! use pathman::path::{compose_path, split_path_list};
//! use pathman::ManagedFolders;
//! use std::path::Path;
//!
//! # #[cfg(unix)] {
//! let folders = ManagedFolders::from_base(Path::new("/m")).unwrap();
//! let composed = compose_path("/usr/bin", &folders, &[]);
//! assert_eq!(split_path_list(&composed.to_string()).len(), 3);
//! # }
//! ```

mod compose;
mod entries;
mod normalize;

#[cfg(all(test, unix))]
mod proptests;

pub use compose::{compose_path, managed_locations, ComposedPath};
pub use entries::{join_path_list, split_path_list, PATH_LIST_SEPARATOR};
pub use normalize::{absolutize, clean_components, expand_tilde};
