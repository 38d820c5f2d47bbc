//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with a deterministic policy
//! - Output capture helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would leak host configuration into a test.
const RESPATH_ENV_VARS: [&str; 6] = [
    "RESPATH_CONFIG_DIR",
    "RESPATH_SEPARATOR",
    "RESPATH_PROTOCOLS",
    "RESPATH_OUTPUT_FORMAT",
    "RESPATH_LOG_MODE",
    "RESPATH_DRIVE_LETTERS",
];

/// Test environment with isolated working and configuration directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for project config discovery
    pub work_dir: PathBuf,
    /// User configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work_dir = temp_dir.path().join("work");
        let config_dir = temp_dir.path().join("config");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            work_dir,
            config_dir,
        }
    }

    /// Get a bare command builder with host `RESPATH_*` variables removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("respath").expect("Failed to find respath binary");
        for var in RESPATH_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Get a command builder with a POSIX-style policy and this
    /// environment's config directory.
    ///
    /// Drive letters are off and the separator is `/` regardless of host.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.env("RESPATH_DRIVE_LETTERS", "false")
            .env("RESPATH_SEPARATOR", "slash")
            .arg("--config-dir")
            .arg(&self.config_dir);
        cmd
    }

    /// Write a file into the working directory.
    pub fn write_project_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write project file");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let path = self.config_dir.join("config.yaml");
        std::fs::write(&path, content).expect("Failed to write user config");
        path
    }

    /// Get the working directory.
    pub fn path(&self) -> &Path {
        &self.work_dir
    }

    /// Run a command that must succeed and return its trimmed stdout.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run respath");

        assert!(
            output.status.success(),
            "respath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }

    /// Run a command with `--format json` and parse its stdout.
    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let stdout = self.stdout(&full);
        serde_json::from_str(&stdout).expect("Output is not valid JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
