//! Chalk - colorize console text with ANSI escape sequences.
//!
//! ```
//! use chalk::{Color, RESET};
//!
//! assert_eq!(Color::Red.color("hi"), "\x1b[31mhi\x1b[39m");
//!
//! let style = Color::Blue.new_style().with_background(Color::Green);
//! assert_eq!(style.style("x"), format!("\x1b[42m\x1b[34mx{}", RESET));
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod style;
pub mod theme;

pub use color::Color;
pub use config::Config;
pub use error::{ChalkError, Result};
pub use style::{Style, RESET};
pub use theme::Theme;
