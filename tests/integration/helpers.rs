//! Shared helpers for integration tests.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Run the chalk CLI and capture (stdout, stderr, exit code).
///
/// `CHALK_CONFIG` points at a file that does not exist so the user's own
/// config never leaks into tests.
pub fn run_chalk(args: &[&str]) -> (String, String, i32) {
    let isolated = std::env::temp_dir().join("chalk-tests-no-such-config.toml");
    run_chalk_with_config(args, &isolated)
}

pub fn run_chalk_with_config(args: &[&str], config: &std::path::Path) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_chalk"))
        .args(args)
        .env("CHALK_CONFIG", config)
        .env_remove("CHALK_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute chalk");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Write `content` to a config file inside a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}
