//! chalk - print colorized text from the command line.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chalk::Color;

#[derive(Parser)]
#[command(name = "chalk", version, about = "Colorize console text with ANSI escape sequences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print text in the given colors
    Paint {
        /// Foreground color (black, red, green, yellow, blue, magenta, cyan, white, reset)
        #[arg(long)]
        fg: Option<Color>,
        /// Background color
        #[arg(long)]
        bg: Option<Color>,
        /// Text to print (joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Show every foreground color on every background color
    Swatch,
    /// List color names with their index and escape codes
    Codes,
    /// Show each role of the configured theme
    Theme {
        /// Read this config file instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,
        /// Use this preset instead of the configured one
        #[arg(long)]
        preset: Option<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("CHALK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Paint { fg, bg, text } => commands::paint::handle(fg, bg, &text.join(" ")),
        Commands::Swatch => commands::swatch::handle(),
        Commands::Codes => commands::codes::handle(),
        Commands::Theme { config, preset } => {
            commands::theme::handle(config.as_deref(), preset.as_deref())
        }
    }
}
