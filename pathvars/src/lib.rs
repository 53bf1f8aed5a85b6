#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathvars
//!
//! A library for expressing absolute paths in terms of named path variables.
//!
//! A path variable binds a name such as `SRC` to a location. Given a set of
//! variables, an absolute path below one of them can be rewritten as
//! `SRC/lib/util.c` (or `${SRC}/lib/util.c`) and resolved back later, so
//! the stored form survives moving the tree.
//!
//! ## Core Types
//!
//! - [`VariablePath`]: Segment-based path value with portable encoding
//! - [`Relativizer`]: Converts absolute paths to variable-relative form
//! - [`PathVariableResolver`] and [`PathVariableManager`]: Variable lookup
//!   and storage
//! - [`Database`]: Persistent variable storage in `SQLite`
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use pathvars::{
//!     DescriptorRegistry, MemoryStore, PathVariableManager, PathVariableResolver,
//!     ProjectContext, Relativizer, VariablePath,
//! };
//!
//! let mut vars = PathVariableManager::new(
//!     MemoryStore::new(),
//!     Arc::new(DescriptorRegistry::builtin()),
//!     ProjectContext::default(),
//! );
//! vars.set_value("SRC", &VariablePath::from_portable_string("/srv/src")).unwrap();
//!
//! let path = VariablePath::from_portable_string("/srv/src/lib/util.c");
//! let relative = Relativizer::default().to_relative(&mut vars, &path, false, None).unwrap();
//! assert_eq!(relative.to_portable_string(), "SRC/lib/util.c");
//! assert_eq!(vars.resolve_path(&relative).unwrap(), path);
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod relativize;
pub mod variable;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{CaseSensitivity, VariablePath};
pub use relativize::Relativizer;
pub use variable::{
    DescriptorRegistry, MemoryStore, PathVariable, PathVariableManager, PathVariableResolver,
    ProjectContext, VariableStore,
};
