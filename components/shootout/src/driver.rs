//! Benchmark driver: wires the suite to the page surface.
//!
//! Triggering a run clears the results panel, disables the run control for
//! the duration, and registers the two population workloads as named
//! trials. Per-trial results and the final fastest verdict are appended to
//! the panel by the suite callbacks; the completion callback also restores
//! the control. The run itself is spread over event-loop tasks, so lines
//! appear as the caller drains its loop.

use std::cell::RefCell;
use std::rc::Rc;

use event_loop::{Spawner, Timers};
use page_model::{page::RUN_BUTTON_LABEL, Page};

use crate::suite::{RunMode, Suite};
use crate::workloads;

/// Name of the struct-variant trial.
pub const TRIAL_STRUCT: &str = "Instantiation by struct";

/// Name of the closure-variant trial.
pub const TRIAL_CLOSURE: &str = "Instantiation by closure";

/// Label shown on the run control while a run is in flight.
pub const RUNNING_LABEL: &str = "Running tests...";

/// Starts a shootout run against the given page.
///
/// Schedules the trials on the caller's event loop; exactly three lines are
/// appended to the results panel once the loop drains (one per trial plus
/// the fastest verdict), and the run control is re-enabled by the
/// completion callback.
pub fn trigger(page: Rc<RefCell<Page>>, spawner: &Spawner, timers: &Timers, samples: usize) {
    {
        let mut page = page.borrow_mut();
        page.results.clear();
        page.run_button.set_label(RUNNING_LABEL);
        page.run_button.set_disabled(true);
    }

    let mut suite = Suite::new().with_samples(samples);

    let struct_timers = timers.clone();
    suite.add(TRIAL_STRUCT, move || {
        workloads::struct_population(&struct_timers);
    });
    let closure_timers = timers.clone();
    suite.add(TRIAL_CLOSURE, move || {
        workloads::closure_population(&closure_timers);
    });

    let cycle_page = Rc::clone(&page);
    suite.on_cycle(move |result| {
        cycle_page.borrow_mut().results.append(&result.to_string());
    });

    let complete_page = Rc::clone(&page);
    suite.on_complete(move |report| {
        let mut page = complete_page.borrow_mut();
        if let Some(fastest) = report.fastest() {
            page.results.append(&format!("Fastest is {}", fastest.name));
        }
        page.run_button.set_label(RUN_BUTTON_LABEL);
        page.run_button.set_disabled(false);
    });

    suite.run(RunMode::Task(spawner));
}
