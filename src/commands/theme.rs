//! `chalk theme` handler

use std::path::Path;

use anyhow::{Context, Result};

use chalk::{Config, Theme};

/// Render every role of the resolved theme.
pub fn handle(config_path: Option<&Path>, preset: Option<&str>) -> Result<()> {
    let mut config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(preset) = preset {
        config.theme.preset = preset.to_string();
    }
    let theme = config.theme().context("Failed to resolve theme")?;

    println!("preset: {}", config.theme.preset);
    for line in lines(&theme) {
        println!("{}", line);
    }
    Ok(())
}

fn lines(theme: &Theme) -> Vec<String> {
    theme
        .roles()
        .iter()
        .map(|(name, style)| {
            format!(
                "{:<10} {} (fg {}, bg {})",
                name,
                style.style(name),
                style.fg().name(),
                style.bg().name()
            )
        })
        .collect()
}
