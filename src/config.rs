//! Configuration file loading.
//!
//! The config lives at `$CHALK_CONFIG`, or `chalk/config.toml` under the
//! platform config directory. A missing file means defaults.
//!
//! ```toml
//! [theme]
//! preset = "ocean"
//!
//! [theme.accent]
//! foreground = "magenta"
//! background = "black"
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ChalkError, Result};
use crate::style::Style;
use crate::theme::Theme;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CHALK_CONFIG";

/// Top-level config file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
}

/// `[theme]` section: a preset plus optional per-role overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub preset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<Style>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: "standard".to_string(),
            primary: None,
            secondary: None,
            accent: None,
            error: None,
            success: None,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from a specific file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ChalkError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ChalkError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        resolve_path(std::env::var_os(CONFIG_ENV), dirs::config_dir())
    }

    /// Resolve the preset and apply any per-role overrides.
    pub fn theme(&self) -> Result<Theme> {
        self.theme.resolve()
    }
}

impl ThemeConfig {
    pub fn resolve(&self) -> Result<Theme> {
        let mut theme = Theme::preset(&self.preset)?;
        let overrides = [
            ("primary", self.primary, &mut theme.primary),
            ("secondary", self.secondary, &mut theme.secondary),
            ("accent", self.accent, &mut theme.accent),
            ("error", self.error, &mut theme.error),
            ("success", self.success, &mut theme.success),
        ];
        for (role, value, slot) in overrides {
            if let Some(style) = value {
                tracing::debug!(role, fg = style.fg().name(), bg = style.bg().name(), "theme override");
                *slot = style;
            }
        }
        Ok(theme)
    }
}

fn resolve_path(env_override: Option<OsString>, config_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let dir = config_dir.ok_or(ChalkError::NoConfigDir)?;
    Ok(dir.join("chalk").join("config.toml"))
}
