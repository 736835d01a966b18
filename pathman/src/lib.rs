#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathman
//!
//! A library for deciding which executables are visible on `PATH`.
//!
//! Executables are exposed through symlinks in two managed folders, `front`
//! (searched before the rest of `PATH`) and `back` (searched after it).
//! Whole directories can be managed too. The library composes the adjusted
//! `PATH`, detects clashes with other executables, and finds stale items.
//!
//! ## Core Types
//!
//! - [`Priority`], [`ManagedFolders`] and [`ManagedDirectory`]: what is managed
//! - [`path::compose_path`]: the adjusted `PATH`
//! - [`clash::find_masking_clashes`] and [`clash::find_name_clashes`]: conflicts
//! - [`cleanup::scan_for_cleanup`]: broken symlinks and missing directories
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathman::path::compose_path;
//! use pathman::{ManagedDirectory, ManagedFolders, Priority};
//! use std::path::Path;
//!
//! # #[cfg(unix)] {
//! let folders = ManagedFolders::from_base(Path::new("/m")).unwrap();
//! let cargo = ManagedDirectory::new("/home/u/.cargo/bin", Priority::Front).unwrap();
//!
//! let composed = compose_path("/usr/bin:/bin", &folders, &[cargo]);
//! assert_eq!(
//!     composed.to_string(),
//!     "/m/front:/home/u/.cargo/bin:/usr/bin:/bin:/m/back"
//! );
//! # }
//! ```

pub mod clash;
pub mod cleanup;
pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod managed;
pub mod operations;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use clash::{ClashKind, ClashReport, DirectoryProbe, FsProbe};
pub use cleanup::{CandidateKind, CleanupCandidate};
pub use config::{Config, ConfigLoader};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use managed::{ManagedDirectory, ManagedExecutable, ManagedFolders, ManagedLink, Priority};
pub use operations::{BatchResult, ExecutionResult, OperationPlan, PlanAction, PlanExecutor};
pub use path::ComposedPath;
