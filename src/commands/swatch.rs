//! `chalk swatch` handler

use anyhow::Result;

use chalk::{Color, Style};

/// Print one line per foreground color, rendered on every background.
pub fn handle() -> Result<()> {
    for line in lines() {
        println!("{}", line);
    }
    Ok(())
}

fn lines() -> Vec<String> {
    Color::ALL
        .iter()
        .map(|&fg| {
            Color::ALL
                .iter()
                .map(|&bg| Style::new(fg, bg).style(&format!(" {:^7} ", fg.name())))
                .collect::<String>()
        })
        .collect()
}
