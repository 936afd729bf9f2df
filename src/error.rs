//! Error types for color parsing and configuration loading.
//!
//! Rendering never fails; only construction from untrusted input
//! (indices, names, config files) can.

use std::path::PathBuf;

/// Errors that can occur when building colors, themes or loading config.
#[derive(Debug, thiserror::Error)]
pub enum ChalkError {
    #[error("Invalid color index {0}: expected 0-7 or 9 (reset)")]
    InvalidColorIndex(u8),

    #[error(
        "Unknown color '{0}'. Expected one of: black, red, green, yellow, blue, magenta, cyan, white, reset"
    )]
    UnknownColor(String),

    #[error("Unknown theme '{0}'. Expected one of: standard, classic, ocean")]
    UnknownTheme(String),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ChalkError>;
