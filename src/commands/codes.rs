//! `chalk codes` handler

use anyhow::Result;

use chalk::Color;

pub fn handle() -> Result<()> {
    for row in table() {
        println!("{}", row);
    }
    Ok(())
}

fn table() -> Vec<String> {
    let mut rows = vec![format!("{:<8} {:>5} {:>3} {:>3}", "name", "index", "fg", "bg")];
    rows.extend(Color::ALL.into_iter().chain([Color::Reset]).map(|c| {
        format!(
            "{:<8} {:>5} {:>3} {:>3}",
            c.name(),
            c.value(),
            c.fg_code(),
            c.bg_code()
        )
    }));
    rows
}
