//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak configuration into a test run.
const PATHVARS_ENV_VARS: [&str; 12] = [
    "PATHVARS_DATA_DIR",
    "PATHVARS_BUSY_TIMEOUT",
    "PATHVARS_DISABLE_AUTOINIT",
    "PATHVARS_LOG_MODE",
    "PATHVARS_WORKSPACE_LOC",
    "PATHVARS_PROJECT_NAME",
    "PATHVARS_PROJECT_LOC",
    "PATHVARS_CASE_SENSITIVITY",
    "PATHVARS_FORCE",
    "PATHVARS_VARIABLES",
    "PATHVARS_MAXIMUM_LOCK_WAIT_SECONDS",
    "PATHVARS_OUTPUT_FORMAT",
];

/// Test environment with isolated data and working directories.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory; commands run from here.
    pub temp_path: PathBuf,
    /// Path to the pathvars data directory (created on first use).
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("pathvars-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// A command with only the binary, run from the temp directory with a
    /// clean `PATHVARS_*` environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathvars").expect("Failed to find pathvars binary");
        cmd.current_dir(&self.temp_path);
        for var in PATHVARS_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file relative to the temp directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run `pathvars define NAME PATH`, panicking on failure.
    pub fn define(&self, name: &str, path: impl AsRef<std::ffi::OsStr>) {
        self.command()
            .arg("define")
            .arg(name)
            .arg(path)
            .assert()
            .success();
    }

    /// Run a command and return its trimmed stdout, panicking on failure.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "pathvars {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
