//! Theme configuration for CLI output.
//!
//! Centralizes the styles used for each kind of message so callers format
//! output by role (accent, error, ...) rather than by raw color.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ChalkError, Result};
use crate::style::Style;

/// Names accepted by [`Theme::preset`].
pub const PRESETS: [&str; 3] = ["standard", "classic", "ocean"];

/// Styles for each output role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Primary text (used for most content)
    pub primary: Style,
    /// Secondary/dimmed text
    pub secondary: Style,
    /// Highlights and important elements
    pub accent: Style,
    pub error: Style,
    pub success: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// White text with a green accent on the terminal's own background.
    pub fn standard() -> Self {
        Self {
            primary: Color::White.new_style(),
            secondary: Style::default(),
            accent: Color::Green.new_style(),
            error: Color::Red.new_style(),
            success: Color::Green.new_style(),
        }
    }

    /// Classic terminal theme - yellow accent, errors on a red background.
    pub fn classic() -> Self {
        Self {
            primary: Color::White.new_style(),
            secondary: Style::default(),
            accent: Color::Yellow.new_style(),
            error: Color::White.new_style().with_background(Color::Red),
            success: Color::Green.new_style(),
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            primary: Color::Cyan.new_style(),
            secondary: Color::Blue.new_style(),
            accent: Color::White.new_style().with_background(Color::Blue),
            error: Color::Red.new_style(),
            success: Color::Green.new_style(),
        }
    }

    /// Resolve a preset by name (case-insensitive).
    pub fn preset(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" | "default" => Ok(Self::standard()),
            "classic" => Ok(Self::classic()),
            "ocean" => Ok(Self::ocean()),
            _ => Err(ChalkError::UnknownTheme(name.trim().to_string())),
        }
    }

    /// Every role paired with its name, in display order.
    pub fn roles(&self) -> [(&'static str, Style); 5] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("error", self.error),
            ("success", self.success),
        ]
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.primary.style(text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.secondary.style(text)
    }

    pub fn accent_text(&self, text: &str) -> String {
        self.accent.style(text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.error.style(text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.success.style(text)
    }
}
