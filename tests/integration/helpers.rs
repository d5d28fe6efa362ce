//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Output of one CLI run.
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Run the playbar binary with `config` as its config file path.
pub fn run_playbar_with_config(args: &[&str], config: &Path) -> RunOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_playbar"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("PLAYBAR_CONFIG", config)
        .env_remove("PLAYBAR_LOG")
        .output()
        .expect("Failed to execute playbar");

    RunOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

/// Run the playbar binary with no config file present.
pub fn run_playbar(args: &[&str]) -> RunOutput {
    let dir = TempDir::new().expect("Failed to create temp dir");
    run_playbar_with_config(args, &dir.path().join("config.toml"))
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}
