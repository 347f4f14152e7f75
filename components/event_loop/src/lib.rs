//! Single-threaded event loop for the site shell.
//!
//! Provides the two scheduling primitives the rest of the workspace needs:
//!
//! - a FIFO task queue drained one task per turn, used by the benchmark
//!   suite's non-blocking run mode;
//! - an interval timer service with a virtual clock and cancellation
//!   handles, used by sleeping personas for their recovery ticks.
//!
//! Everything here is single-threaded: callbacks are plain boxed closures
//! without `Send` bounds, and shared state is `Rc`/`RefCell`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod event_loop;
pub mod task_queue;
pub mod timers;

pub use event_loop::{EventLoop, Spawner};
pub use task_queue::{Task, TaskError, TaskQueue};
pub use timers::{IntervalHandle, Timers};
