//! `chalk paint` handler

use anyhow::Result;

use chalk::{Color, Style};

/// Print `text` in the requested colors.
///
/// Foreground-only output uses the short single-sequence form; a background
/// switches to the full style form.
pub fn handle(fg: Option<Color>, bg: Option<Color>, text: &str) -> Result<()> {
    println!("{}", render(fg, bg, text));
    Ok(())
}

fn render(fg: Option<Color>, bg: Option<Color>, text: &str) -> String {
    let fg = fg.unwrap_or(Color::Reset);
    match bg {
        None => fg.color(text),
        Some(bg) => Style::new(fg, bg).style(text),
    }
}
