//! Site shell entry point.
//!
//! Parses CLI arguments, sets up logging, and dispatches to the one-shot
//! flags or the interactive shell.

use clap::Parser;
use site_cli::{shell, Cli, Session, SiteError};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .init();

    let mut session = match Session::new(&cli.data_dir, cli.samples) {
        Ok(session) => session,
        Err(SiteError::Store(e)) => {
            eprintln!("Error: could not load preferences: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(theme) = cli.theme {
        if let Err(e) = session.set_theme(theme) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        println!("Theme set to {}", theme);
        return;
    }

    if cli.bench {
        if let Err(e) = session.run_shootout() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = shell::run_shell(&mut session) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
