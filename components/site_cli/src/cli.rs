//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use theme_store::{ParseThemeError, Theme};

/// Theme toggle and OOP performance shootout, in a shell.
#[derive(Parser, Debug)]
#[command(name = "site-cli", version, about)]
pub struct Cli {
    /// Directory holding the persisted preferences file
    #[arg(long, default_value = ".site-data")]
    pub data_dir: PathBuf,

    /// Run the performance shootout once and exit
    #[arg(long)]
    pub bench: bool,

    /// Samples per benchmark trial
    #[arg(long, default_value_t = shootout::DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Set the theme preference ('dark' or 'light') and exit
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<Theme>,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

fn parse_theme(raw: &str) -> Result<Theme, String> {
    raw.parse()
        .map_err(|e: ParseThemeError| e.to_string())
}
