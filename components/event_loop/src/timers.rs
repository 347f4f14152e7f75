//! Interval timer service.
//!
//! A cloneable handle to a shared wheel of recurring timers driven by a
//! virtual clock. Time only moves when [`Timers::advance`] is called, which
//! fires every due interval in deadline order and re-arms the ones that are
//! still alive. Each registration returns an [`IntervalHandle`]; cancelling
//! the handle is the one and only way to stop an interval, including from
//! inside its own callback.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;
use std::time::Duration;

/// Owned handle to a registered interval.
///
/// Dropping the handle does not stop the interval; only [`cancel`] does.
/// Cancellation is idempotent.
///
/// [`cancel`]: IntervalHandle::cancel
#[derive(Debug, Clone)]
pub struct IntervalHandle {
    cancelled: Rc<Cell<bool>>,
}

impl IntervalHandle {
    /// Stops the interval. It will never fire again.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Returns true once the interval has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

struct Slot {
    deadline: Duration,
    seq: u64,
    period: Duration,
    cancelled: Rc<Cell<bool>>,
    callback: Rc<RefCell<dyn FnMut()>>,
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl Eq for Slot {}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slot {
    // Reversed so the BinaryHeap pops the earliest deadline first; seq
    // breaks ties in registration order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Default)]
struct Wheel {
    now: Duration,
    next_seq: u64,
    heap: BinaryHeap<Slot>,
}

/// Cloneable handle to the shared interval wheel.
#[derive(Clone, Default)]
pub struct Timers {
    wheel: Rc<RefCell<Wheel>>,
}

impl Timers {
    /// Creates a new timer service with its clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a recurring callback firing every `period`.
    ///
    /// The first fire is one full period after the current virtual time.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn set_interval<F>(&self, period: Duration, callback: F) -> IntervalHandle
    where
        F: FnMut() + 'static,
    {
        assert!(!period.is_zero(), "interval period must be non-zero");

        let cancelled = Rc::new(Cell::new(false));
        let mut wheel = self.wheel.borrow_mut();
        let seq = wheel.next_seq;
        wheel.next_seq += 1;
        let deadline = wheel.now + period;
        wheel.heap.push(Slot {
            deadline,
            seq,
            period,
            cancelled: Rc::clone(&cancelled),
            callback: Rc::new(RefCell::new(callback)),
        });
        IntervalHandle { cancelled }
    }

    /// Moves the virtual clock forward, firing every due interval in
    /// deadline order.
    ///
    /// The wheel's internal borrow is released while a callback runs, so
    /// callbacks may register new intervals or cancel existing ones
    /// (including their own). A cancelled entry is dropped at its next due
    /// time without firing. Must not be called from inside a callback.
    pub fn advance(&self, by: Duration) {
        let target = self.wheel.borrow().now + by;
        loop {
            let slot = {
                let mut wheel = self.wheel.borrow_mut();
                let due = wheel
                    .heap
                    .peek()
                    .map_or(false, |slot| slot.deadline <= target);
                if due {
                    wheel.heap.pop()
                } else {
                    None
                }
            };
            let Some(slot) = slot else { break };
            if slot.cancelled.get() {
                continue;
            }

            self.wheel.borrow_mut().now = slot.deadline;
            (&mut *slot.callback.borrow_mut())();

            // The callback may have cancelled its own handle; only re-arm
            // live entries.
            if !slot.cancelled.get() {
                let mut wheel = self.wheel.borrow_mut();
                wheel.heap.push(Slot {
                    deadline: slot.deadline + slot.period,
                    ..slot
                });
            }
        }
        self.wheel.borrow_mut().now = target;
    }

    /// Returns the current virtual time.
    pub fn now(&self) -> Duration {
        self.wheel.borrow().now
    }

    /// Returns the number of live (non-cancelled) intervals.
    pub fn active(&self) -> usize {
        self.wheel
            .borrow()
            .heap
            .iter()
            .filter(|slot| !slot.cancelled.get())
            .count()
    }
}

impl std::fmt::Debug for Timers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let wheel = self.wheel.borrow();
        f.debug_struct("Timers")
            .field("now", &wheel.now)
            .field("entries", &wheel.heap.len())
            .finish()
    }
}
