//! The OOP performance shootout.
//!
//! This crate provides the benchmark side of the site:
//!
//! - a small suite abstraction with named trials, per-trial (`cycle`) and
//!   run-completion (`complete`) callbacks, and an inline or task-queue run
//!   mode;
//! - the two bulk workloads being compared (struct-based vs closure-based
//!   persona construction);
//! - the driver that wires the suite to the page surface;
//! - the `shootout-bench` binary for headless runs.
//!
//! # Examples
//!
//! ```
//! use event_loop::Timers;
//! use shootout::{RunMode, Suite};
//!
//! let timers = Timers::new();
//! let mut suite = Suite::new().with_samples(1);
//! suite.add("Instantiation by struct", move || {
//!     shootout::workloads::struct_population(&timers);
//! });
//! let report = suite.run(RunMode::Inline).unwrap();
//! assert_eq!(report.results.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod driver;
pub mod suite;
pub mod workloads;

pub use suite::{RunMode, Suite, SuiteReport, TrialResult, DEFAULT_SAMPLES};
