//! Configuration system for pathvars.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of locations and variable names
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHVARS_*`)
//! 3. Private project config (`pathvars.local.yaml`)
//! 4. Project config (`pathvars.yaml`)
//! 5. User config (`~/.pathvars/config.yaml`)
//! 6. Built-in defaults
//!
//! The `variables` map accumulates across sources instead of being replaced.
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use pathvars::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("case sensitivity: {}", config.case_sensitivity());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use pathvars::config::{Config, ConfigBuilder};
//! use std::collections::BTreeMap;
//!
//! let custom = Config {
//!     variables: Some(BTreeMap::from([("SRC".to_string(), "/srv/src".to_string())])),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.variables.unwrap()["SRC"], "/srv/src");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, ProjectConfig};
pub use validator::ConfigValidator;
