//! Foreground/background color pairs.
//!
//! A [`Style`] renders as the background sequence followed by the foreground
//! sequence. Styled text is always terminated by [`RESET`], which restores
//! both slots to the terminal defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Terminator appended to every styled string.
///
/// This is a constant, so calling a setter on it only changes a local copy.
pub const RESET: Style = Style::new(Color::Reset, Color::Reset);

/// How text should look in the console: a foreground and a background color.
///
/// Any combination is valid, including the same color in both slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    foreground: Color,
    background: Color,
}

impl Default for Style {
    fn default() -> Self {
        RESET
    }
}

impl Style {
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self {
            foreground,
            background,
        }
    }

    pub const fn fg(&self) -> Color {
        self.foreground
    }

    pub const fn bg(&self) -> Color {
        self.background
    }

    /// Set the foreground in place.
    pub fn foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    /// Set the background in place.
    pub fn background(&mut self, color: Color) {
        self.background = color;
    }

    /// Builder form of [`Style::foreground`].
    #[must_use]
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground(color);
        self
    }

    /// Builder form of [`Style::background`].
    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background(color);
        self
    }

    /// Render `text` in this style, followed by the [`RESET`] sequences.
    pub fn style(&self, text: &str) -> String {
        format!("{}{}{}", self, text, RESET)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\x1b[{}m\x1b[{}m",
            self.background.bg_code(),
            self.foreground.fg_code()
        )
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        color.new_style()
    }
}
