//! Benchmark suite and result types.
//!
//! The consumed surface mirrors the classic browser benchmarking helpers:
//! named trials are added to a suite, `cycle` fires once per finished trial,
//! `complete` fires once at the end with a fastest-by-name query, and the
//! run is either inline or spread over event-loop tasks so results stream
//! between turns.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::mem;
use std::rc::Rc;
use std::time::{Duration, Instant};

use event_loop::{Spawner, Task};
use serde::Serialize;

/// Samples per trial when the caller does not override it.
pub const DEFAULT_SAMPLES: usize = 5;

/// A named, timed workload registered on a suite.
pub struct Trial {
    name: String,
    body: Box<dyn FnMut()>,
}

impl Trial {
    fn run(&mut self, samples: usize) -> TrialResult {
        let mut total = Duration::ZERO;
        for _ in 0..samples {
            let start = Instant::now();
            (self.body)();
            total += start.elapsed();
        }
        let mean_ms = total.as_secs_f64() * 1000.0 / samples as f64;
        let ops_per_sec = if mean_ms > 0.0 { 1000.0 / mean_ms } else { 0.0 };
        TrialResult {
            name: self.name.clone(),
            samples,
            mean_ms,
            ops_per_sec,
        }
    }
}

impl std::fmt::Debug for Trial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trial").field("name", &self.name).finish()
    }
}

/// Result of one completed trial.
#[derive(Debug, Clone, Serialize)]
pub struct TrialResult {
    /// Name of the trial.
    pub name: String,
    /// Number of samples the mean covers.
    pub samples: usize,
    /// Mean wall-clock duration per sample, in milliseconds.
    pub mean_ms: f64,
    /// Workload executions per second implied by the mean.
    pub ops_per_sec: f64,
}

impl std::fmt::Display for TrialResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x {:.1} ops/sec ({} runs sampled)",
            self.name, self.ops_per_sec, self.samples
        )
    }
}

/// All results of one suite run.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    /// Results in trial registration order.
    pub results: Vec<TrialResult>,
}

impl SuiteReport {
    /// Returns the trial with the highest ops/sec, if any trial ran.
    pub fn fastest(&self) -> Option<&TrialResult> {
        self.results.iter().max_by(|a, b| {
            a.ops_per_sec
                .partial_cmp(&b.ops_per_sec)
                .unwrap_or(Ordering::Equal)
        })
    }
}

/// Formats trial results as pretty-printed JSON.
pub fn format_results_json(results: &[TrialResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

/// How a suite run is scheduled.
#[derive(Debug)]
pub enum RunMode<'a> {
    /// Run every trial synchronously in the calling turn.
    Inline,
    /// Schedule one event-loop task per trial plus a completion task, so
    /// callbacks fire between turns and the caller's loop stays responsive.
    Task(&'a Spawner),
}

type CycleHandler = Box<dyn FnMut(&TrialResult)>;
type CompleteHandler = Box<dyn FnOnce(&SuiteReport)>;

/// A collection of named trials plus lifecycle callbacks.
pub struct Suite {
    trials: Vec<Trial>,
    on_cycle: Option<CycleHandler>,
    on_complete: Option<CompleteHandler>,
    samples: usize,
}

impl Suite {
    /// Creates an empty suite with the default sample count.
    pub fn new() -> Self {
        Self {
            trials: Vec::new(),
            on_cycle: None,
            on_complete: None,
            samples: DEFAULT_SAMPLES,
        }
    }

    /// Overrides the per-trial sample count (clamped to at least 1).
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples.max(1);
        self
    }

    /// Registers a named trial.
    pub fn add<F>(&mut self, name: &str, body: F)
    where
        F: FnMut() + 'static,
    {
        self.trials.push(Trial {
            name: name.to_string(),
            body: Box::new(body),
        });
    }

    /// Subscribes the per-trial-completion callback.
    pub fn on_cycle<F>(&mut self, handler: F)
    where
        F: FnMut(&TrialResult) + 'static,
    {
        self.on_cycle = Some(Box::new(handler));
    }

    /// Subscribes the run-completion callback.
    pub fn on_complete<F>(&mut self, handler: F)
    where
        F: FnOnce(&SuiteReport) + 'static,
    {
        self.on_complete = Some(Box::new(handler));
    }

    /// Returns the number of registered trials.
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// Returns true if no trial has been registered.
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Runs the suite.
    ///
    /// Inline mode runs everything now and returns the report. Task mode
    /// only schedules work and returns `None`; results are observed through
    /// the callbacks once the event loop drains.
    pub fn run(self, mode: RunMode<'_>) -> Option<SuiteReport> {
        let mut run = SuiteRun {
            trials: self.trials,
            on_cycle: self.on_cycle,
            on_complete: self.on_complete,
            samples: self.samples,
            results: Vec::new(),
        };
        match mode {
            RunMode::Inline => {
                for index in 0..run.trials.len() {
                    run.run_trial(index);
                }
                Some(run.complete())
            }
            RunMode::Task(spawner) => {
                let shared = Rc::new(RefCell::new(run));
                let count = shared.borrow().trials.len();
                for index in 0..count {
                    let shared = Rc::clone(&shared);
                    spawner.enqueue(Task::new(move || {
                        shared.borrow_mut().run_trial(index);
                        Ok(())
                    }));
                }
                spawner.enqueue(Task::new(move || {
                    shared.borrow_mut().complete();
                    Ok(())
                }));
                None
            }
        }
    }
}

impl Default for Suite {
    fn default() -> Self {
        Self::new()
    }
}

struct SuiteRun {
    trials: Vec<Trial>,
    on_cycle: Option<CycleHandler>,
    on_complete: Option<CompleteHandler>,
    samples: usize,
    results: Vec<TrialResult>,
}

impl SuiteRun {
    fn run_trial(&mut self, index: usize) {
        let result = self.trials[index].run(self.samples);
        if let Some(handler) = self.on_cycle.as_mut() {
            handler(&result);
        }
        self.results.push(result);
    }

    fn complete(&mut self) -> SuiteReport {
        let report = SuiteReport {
            results: mem::take(&mut self.results),
        };
        if let Some(handler) = self.on_complete.take() {
            handler(&report);
        }
        report
    }
}
