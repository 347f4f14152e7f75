//! Unit tests for the interval timer service

use event_loop::Timers;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

const SECOND: Duration = Duration::from_secs(1);

#[test]
fn new_service_has_no_intervals() {
    let timers = Timers::new();
    assert_eq!(timers.active(), 0);
    assert_eq!(timers.now(), Duration::ZERO);
}

#[test]
fn advance_moves_the_virtual_clock() {
    let timers = Timers::new();
    timers.advance(Duration::from_millis(1500));
    assert_eq!(timers.now(), Duration::from_millis(1500));
}

#[test]
fn interval_fires_once_per_period() {
    let timers = Timers::new();
    let ticks = Rc::new(Cell::new(0));

    let counter = ticks.clone();
    let _handle = timers.set_interval(SECOND, move || {
        counter.set(counter.get() + 1);
    });

    timers.advance(SECOND);
    assert_eq!(ticks.get(), 1);
    timers.advance(SECOND);
    assert_eq!(ticks.get(), 2);
}

#[test]
fn cancelled_interval_never_fires_again() {
    let timers = Timers::new();
    let ticks = Rc::new(Cell::new(0));

    let counter = ticks.clone();
    let handle = timers.set_interval(SECOND, move || {
        counter.set(counter.get() + 1);
    });

    timers.advance(SECOND);
    handle.cancel();
    timers.advance(Duration::from_secs(10));

    assert_eq!(ticks.get(), 1);
    assert_eq!(timers.active(), 0);
    assert!(handle.is_cancelled());
}

#[test]
fn callback_can_cancel_its_own_handle() {
    let timers = Timers::new();
    let ticks = Rc::new(Cell::new(0));
    let slot: Rc<RefCell<Option<event_loop::IntervalHandle>>> =
        Rc::new(RefCell::new(None));

    let counter = ticks.clone();
    let own = slot.clone();
    let handle = timers.set_interval(SECOND, move || {
        counter.set(counter.get() + 1);
        if counter.get() == 3 {
            if let Some(handle) = own.borrow_mut().take() {
                handle.cancel();
            }
        }
    });
    *slot.borrow_mut() = Some(handle);

    timers.advance(Duration::from_secs(10));
    assert_eq!(ticks.get(), 3);
    assert_eq!(timers.active(), 0);
}

#[test]
fn intervals_fire_in_deadline_order() {
    let timers = Timers::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let fast = order.clone();
    let _fast = timers.set_interval(Duration::from_millis(300), move || {
        fast.borrow_mut().push("fast");
    });
    let slow = order.clone();
    let _slow = timers.set_interval(Duration::from_millis(500), move || {
        slow.borrow_mut().push("slow");
    });

    timers.advance(Duration::from_millis(1000));
    // fast at 300, 600, 900; slow at 500, 1000
    assert_eq!(
        *order.borrow(),
        vec!["fast", "slow", "fast", "fast", "slow"]
    );
}

#[test]
fn callback_can_register_a_new_interval() {
    let timers = Timers::new();
    let ticks = Rc::new(Cell::new(0));

    let service = timers.clone();
    let counter = ticks.clone();
    let outer = timers.set_interval(SECOND, move || {
        let counter = counter.clone();
        let inner = service.set_interval(SECOND, move || {
            counter.set(counter.get() + 1);
        });
        // Cancelled before it can fire; registering mid-advance is the
        // behavior under test.
        inner.cancel();
    });

    timers.advance(Duration::from_secs(3));
    outer.cancel();
    assert_eq!(ticks.get(), 0);
    assert_eq!(timers.active(), 0);
}

#[test]
fn clones_share_the_same_wheel() {
    let timers = Timers::new();
    let clone = timers.clone();
    let ticks = Rc::new(Cell::new(0));

    let counter = ticks.clone();
    let _handle = clone.set_interval(SECOND, move || {
        counter.set(counter.get() + 1);
    });

    timers.advance(SECOND);
    assert_eq!(ticks.get(), 1);
    assert_eq!(timers.active(), 1);
}
