//! Shootout benchmark CLI
//!
//! Headless runner for the OOP shootout: same trials as the page driver,
//! run inline, with optional JSON output.

use std::process;

use event_loop::Timers;
use shootout::driver::{TRIAL_CLOSURE, TRIAL_STRUCT};
use shootout::suite::{format_results_json, RunMode, Suite};
use shootout::workloads;

fn print_usage() {
    println!("Shootout Benchmark Tool");
    println!();
    println!("Usage:");
    println!("  shootout-bench                  Run the shootout");
    println!("  shootout-bench --samples <N>    Samples per trial (default 5)");
    println!("  shootout-bench --json           Output results as JSON");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut json_output = false;
    let mut samples = shootout::DEFAULT_SAMPLES;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                json_output = true;
            }
            "--samples" => {
                i += 1;
                samples = match args.get(i).map(|raw| raw.parse::<usize>()) {
                    Some(Ok(n)) if n > 0 => n,
                    _ => {
                        eprintln!("Error: --samples expects a positive integer");
                        process::exit(1);
                    }
                };
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Error: Unknown argument '{}'", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let timers = Timers::new();
    let mut suite = Suite::new().with_samples(samples);

    let struct_timers = timers.clone();
    suite.add(TRIAL_STRUCT, move || {
        workloads::struct_population(&struct_timers);
    });
    let closure_timers = timers.clone();
    suite.add(TRIAL_CLOSURE, move || {
        workloads::closure_population(&closure_timers);
    });

    if !json_output {
        println!("Running the OOP shootout ({} samples per trial)...\n", samples);
        suite.on_cycle(|result| println!("{}", result));
    }

    let Some(report) = suite.run(RunMode::Inline) else {
        // Inline runs always produce a report.
        eprintln!("Error: benchmark produced no report");
        process::exit(1);
    };

    if json_output {
        match format_results_json(&report.results) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error formatting JSON: {}", e);
                process::exit(1);
            }
        }
    } else {
        match report.fastest() {
            Some(fastest) => println!("\nFastest is {}", fastest.name),
            None => println!("\nNo trials ran"),
        }

        let total_ms: f64 = report
            .results
            .iter()
            .map(|r| r.mean_ms * r.samples as f64)
            .sum();
        println!("Total time: {:.2} ms ({:.2} s)", total_ms, total_ms / 1000.0);
    }
}
