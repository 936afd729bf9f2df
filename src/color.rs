//! The eight standard ANSI colors plus the reset sentinel.
//!
//! A color's index is its escape code offset: `30 + index` selects it as
//! foreground, `40 + index` as background. The reset sentinel uses index 9,
//! which yields codes 39 and 49 (default foreground/background).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChalkError, Result};
use crate::style::Style;

/// Base SGR code for foreground colors.
pub const FG_BASE: u8 = 30;

/// Base SGR code for background colors.
pub const BG_BASE: u8 = 40;

/// One of the ANSI colors.
///
/// The discriminant is the color's index in the ANSI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    /// Terminal default color.
    Reset = 9,
}

impl Color {
    /// The eight standard colors in index order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Palette index of this color (0-7, or 9 for reset).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// SGR code selecting this color as foreground.
    pub const fn fg_code(self) -> u8 {
        FG_BASE + self.value()
    }

    /// SGR code selecting this color as background.
    pub const fn bg_code(self) -> u8 {
        BG_BASE + self.value()
    }

    /// Lowercase name, as accepted by [`FromStr`] and used in config files.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Reset => "reset",
        }
    }

    /// Look up a color by palette index.
    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0..=7 => Ok(Self::ALL[value as usize]),
            9 => Ok(Color::Reset),
            other => Err(ChalkError::InvalidColorIndex(other)),
        }
    }

    /// Color the foreground of `text`, leaving the background alone.
    ///
    /// The text is followed by the foreground reset sequence.
    pub fn color(self, text: &str) -> String {
        format!("{}{}{}", self, text, Color::Reset)
    }

    /// Start a [`Style`] with this color as foreground.
    ///
    /// The background is the reset sentinel, not black.
    pub const fn new_style(self) -> Style {
        Style::new(self, Color::Reset)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.fg_code())
    }
}

impl TryFrom<u8> for Color {
    type Error = ChalkError;

    fn try_from(value: u8) -> Result<Self> {
        Color::from_value(value)
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.value()
    }
}

impl FromStr for Color {
    type Err = ChalkError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "reset" | "default" => Ok(Color::Reset),
            _ => Color::ALL
                .into_iter()
                .find(|c| c.name() == name)
                .ok_or_else(|| ChalkError::UnknownColor(s.trim().to_string())),
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let name = String::deserialize(deserializer)?;
        name.parse().map_err(Error::custom)
    }
}
