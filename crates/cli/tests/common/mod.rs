//! Shared test utilities for apptainer-conf integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Create throwaway configuration files in temporary directories.
//!
//! Invariants / Assumptions:
//! - `APPTAINER_CONF` and `RUST_LOG` from the host never reach the binary.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a hermetic `apptainer-conf` command for integration testing.
pub fn apptainer_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("apptainer-conf");
    cmd.env_remove("APPTAINER_CONF").env_remove("RUST_LOG");
    cmd
}

/// Returns a temporary directory and the path of a (not yet created) config file in it.
pub fn temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("apptainer.conf");
    (temp_dir, config_path)
}

/// Like [`temp_config`], with `content` already written to the file.
#[allow(dead_code)]
pub fn temp_config_with(content: &str) -> (TempDir, PathBuf) {
    let (temp_dir, config_path) = temp_config();
    std::fs::write(&config_path, content).expect("Failed to write config file");
    (temp_dir, config_path)
}
