//! Benchmark driver against the page surface, end to end.

use std::cell::RefCell;
use std::rc::Rc;

use event_loop::EventLoop;
use page_model::{page::RUN_BUTTON_LABEL, CaptureWriter, Page};
use shootout::driver::{self, RUNNING_LABEL, TRIAL_CLOSURE, TRIAL_STRUCT};

fn capture_page() -> (Rc<RefCell<Page>>, Rc<RefCell<Vec<String>>>) {
    let captured = Rc::new(RefCell::new(Vec::new()));
    let page = Rc::new(RefCell::new(Page::with_writer(Box::new(
        CaptureWriter::new(captured.clone()),
    ))));
    (page, captured)
}

#[test]
fn results_stream_between_turns() {
    let mut event_loop = EventLoop::new();
    let (page, _) = capture_page();

    driver::trigger(
        Rc::clone(&page),
        &event_loop.spawner(),
        &event_loop.timers(),
        1,
    );

    // Nothing has run yet; the control is already disabled.
    assert!(page.borrow().run_button.is_disabled());
    assert_eq!(page.borrow().results.len(), 0);

    // First turn: first trial's line appears, run still in flight.
    event_loop.turn().unwrap();
    assert_eq!(page.borrow().results.len(), 1);
    assert!(page.borrow().run_button.is_disabled());
    assert_eq!(page.borrow().run_button.label(), RUNNING_LABEL);

    // Second turn: second trial.
    event_loop.turn().unwrap();
    assert_eq!(page.borrow().results.len(), 2);
    assert!(page.borrow().run_button.is_disabled());

    // Completion turn: verdict appended, control restored.
    event_loop.turn().unwrap();
    let snapshot = page.borrow();
    assert_eq!(snapshot.results.len(), 3);
    assert!(!snapshot.run_button.is_disabled());
    assert_eq!(snapshot.run_button.label(), RUN_BUTTON_LABEL);
}

#[test]
fn verdict_names_one_of_the_trials() {
    let mut event_loop = EventLoop::new();
    let (page, _) = capture_page();

    driver::trigger(
        Rc::clone(&page),
        &event_loop.spawner(),
        &event_loop.timers(),
        1,
    );
    event_loop.run_until_done().unwrap();

    let snapshot = page.borrow();
    let verdict = snapshot.results.lines().last().unwrap().clone();
    let named = verdict
        .strip_prefix("Fastest is ")
        .expect("verdict line starts with 'Fastest is '");
    assert!(named == TRIAL_STRUCT || named == TRIAL_CLOSURE);
}

#[test]
fn benchmark_leaves_no_recovery_interval_on_the_loop() {
    let mut event_loop = EventLoop::new();
    let (page, _) = capture_page();

    driver::trigger(
        Rc::clone(&page),
        &event_loop.spawner(),
        &event_loop.timers(),
        1,
    );
    event_loop.run_until_done().unwrap();

    // No persona is exercised during the workloads, so none slept.
    assert_eq!(event_loop.timers().active(), 0);
}
