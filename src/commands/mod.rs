//! Subcommand handlers for the chalk binary.

pub mod codes;
pub mod paint;
pub mod swatch;
pub mod theme;
