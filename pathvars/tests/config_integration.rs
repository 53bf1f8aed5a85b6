//! Integration tests for the configuration system.
//!
//! These cover file discovery, merging across user, project and private
//! files, environment overrides and validation, then feed the result into a
//! manager the way the command line does.
//!
//! Tests that touch environment variables are marked `#[serial]`.

mod common;

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serial_test::serial;
use tempfile::TempDir;

use common::path;
use pathvars::config::{Config, ConfigBuilder, ConfigLoader, OutputFormat};
use pathvars::error::Error;
use pathvars::{
    CaseSensitivity, DescriptorRegistry, MemoryStore, PathVariableManager, PathVariableResolver,
    Relativizer,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn write_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// Sets or removes an environment variable and restores it on drop.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

fn clear_pathvars_env_vars() -> Vec<EnvGuard> {
    [
        "PATHVARS_WORKSPACE_LOC",
        "PATHVARS_PROJECT_NAME",
        "PATHVARS_PROJECT_LOC",
        "PATHVARS_CASE_SENSITIVITY",
        "PATHVARS_FORCE",
        "PATHVARS_VARIABLES",
        "PATHVARS_DISABLE_AUTOINIT",
        "PATHVARS_MAXIMUM_LOCK_WAIT_SECONDS",
        "PATHVARS_OUTPUT_FORMAT",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}

// ============================================================================
// File discovery and merging
// ============================================================================

#[test]
fn test_discovery_walks_up_from_nested_dir() {
    let temp = TempDir::new().unwrap();
    let child = temp.path().join("nested").join("deeply");
    fs::create_dir_all(&child).unwrap();
    write_config(temp.path(), "pathvars.yaml", "force: true\n");

    let sources = ConfigLoader::discover_project_configs(&child).unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].config.force, Some(true));
}

#[test]
fn test_local_file_overrides_project_file() {
    let data = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_config(
        data.path(),
        "config.yaml",
        "case_sensitivity: insensitive\nvariables:\n  HOME_TOOLS: /opt/tools\n",
    );
    write_config(
        work.path(),
        "pathvars.yaml",
        "force: false\nvariables:\n  SRC: /srv/src\n  LIB: /srv/lib\n",
    );
    write_config(
        work.path(),
        "pathvars.local.yaml",
        "force: true\nvariables:\n  LIB: /home/me/lib\n",
    );

    let config = ConfigBuilder::new()
        .with_working_dir(work.path())
        .with_data_dir(data.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.force, Some(true));
    assert_eq!(config.case_sensitivity(), CaseSensitivity::Insensitive);
    let variables = config.variables.unwrap();
    assert_eq!(variables["SRC"], "/srv/src");
    assert_eq!(variables["LIB"], "/home/me/lib");
    assert_eq!(variables["HOME_TOOLS"], "/opt/tools");
}

#[test]
fn test_unknown_field_rejected() {
    let temp = TempDir::new().unwrap();
    let file = write_config(temp.path(), "pathvars.yaml", "colour: blue\n");

    let result = ConfigLoader::load_file(&file);
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_invalid_variable_name_rejected() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        "pathvars.yaml",
        "variables:\n  1bad: /somewhere\n",
    );

    let result = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .with_data_dir(temp.path())
        .skip_env()
        .build();
    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
fn test_builtin_variable_cannot_be_configured() {
    let config = Config {
        variables: Some(BTreeMap::from([(
            "PROJECT_LOC".to_string(),
            "/x".to_string(),
        )])),
        ..Default::default()
    };

    let result = ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(config)
        .build();
    assert!(matches!(result, Err(Error::Validation { .. })));
}

// ============================================================================
// Environment overrides
// ============================================================================

#[test]
#[serial]
fn test_env_overrides_files() {
    let _clean = clear_pathvars_env_vars();
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        "pathvars.yaml",
        "force: false\noutput_format: table\nvariables:\n  SRC: /srv/src\n",
    );

    let _force = EnvGuard::new("PATHVARS_FORCE", "true");
    let _format = EnvGuard::new("PATHVARS_OUTPUT_FORMAT", "json");
    let _vars = EnvGuard::new("PATHVARS_VARIABLES", "EXTRA=/extra");

    let config = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .with_data_dir(temp.path())
        .build()
        .unwrap();

    assert_eq!(config.force, Some(true));
    assert_eq!(config.output_format, Some(OutputFormat::Json));
    let variables = config.variables.unwrap();
    assert_eq!(variables["SRC"], "/srv/src");
    assert_eq!(variables["EXTRA"], "/extra");
}

#[test]
#[serial]
fn test_env_invalid_boolean() {
    let _clean = clear_pathvars_env_vars();
    let _force = EnvGuard::new("PATHVARS_FORCE", "sometimes");

    let result = ConfigBuilder::new().skip_files().build();
    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
#[serial]
fn test_programmatic_overrides_env() {
    let _clean = clear_pathvars_env_vars();
    let _ws = EnvGuard::new("PATHVARS_WORKSPACE_LOC", "/env/ws");

    let config = ConfigBuilder::new()
        .skip_files()
        .with_config(Config {
            workspace_location: Some(PathBuf::from("/code/ws")),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(config.workspace_location, Some(PathBuf::from("/code/ws")));
}

// ============================================================================
// Configuration driving relativization
// ============================================================================

#[test]
#[cfg(unix)]
fn test_config_context_drives_relativization() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        "pathvars.yaml",
        "workspace_location: /ws\nproject:\n  name: demo\n  location: /ws/demo\nvariables:\n  DOCS: /ws/docs\n",
    );

    let config = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .with_data_dir(temp.path())
        .skip_env()
        .build()
        .unwrap();

    let store = MemoryStore::from(config.variables.clone().unwrap_or_default());
    let mut vars = PathVariableManager::new(
        store,
        Arc::new(DescriptorRegistry::builtin()),
        config.project_context(),
    );
    let relativizer = Relativizer::new(config.case_sensitivity());

    let relative = relativizer
        .to_relative(&mut vars, &path("/ws/demo/src/lib.rs"), false, None)
        .unwrap();
    assert_eq!(relative.to_portable_string(), "PROJECT_LOC/src/lib.rs");

    let relative = relativizer
        .to_relative(&mut vars, &path("/ws/docs/guide.md"), false, None)
        .unwrap();
    assert_eq!(relative.to_portable_string(), "DOCS/guide.md");

    assert_eq!(
        vars.resolve_path(&path("WORKSPACE_LOC/tools")).unwrap(),
        path("/ws/tools")
    );
}
