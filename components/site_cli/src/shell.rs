//! Interactive shell.
//!
//! The shell stands in for the page's click targets: `theme` is the theme
//! switch, `bench` is the run-tests button. A failing command prints its
//! error and returns to the prompt; only editor failures end the shell.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{SiteError, SiteResult};
use crate::session::Session;

/// Runs the interactive shell until `exit` or end of input.
pub fn run_shell(session: &mut Session) -> SiteResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| SiteError::Shell(format!("failed to initialize editor: {}", e)))?;

    println!("Shootout site shell");
    println!("Type 'help' for commands.");
    println!();

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(trimmed);

                match trimmed {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "theme" => match session.toggle_theme() {
                        Ok(theme) => println!("Theme set to {}", theme),
                        Err(e) => eprintln!("Error: {}", e),
                    },
                    "bench" => match session.run_shootout() {
                        Ok(true) => {}
                        Ok(false) => println!("A benchmark run is already in progress."),
                        Err(e) => eprintln!("Error: {}", e),
                    },
                    "status" => print_status(session),
                    "help" => print_help(),
                    other => println!("Unknown command '{}'. Type 'help'.", other),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => return Err(SiteError::Shell(e.to_string())),
        }
    }

    Ok(())
}

fn print_status(session: &Session) {
    let page = session.page();
    let page = page.borrow();
    println!("Theme: {}", session.current_theme());
    println!("Body classes: {}", page.body.classes().join(" "));
    println!(
        "Run control: '{}' ({})",
        page.run_button.label(),
        if page.run_button.is_disabled() {
            "disabled"
        } else {
            "enabled"
        }
    );
    println!("Result lines: {}", page.results.len());
}

fn print_help() {
    println!("Commands:");
    println!("  theme    Toggle between dark and light");
    println!("  bench    Run the OOP performance shootout");
    println!("  status   Show page state");
    println!("  help     Show this help");
    println!("  exit     Leave the shell");
}
