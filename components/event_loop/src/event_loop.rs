//! Event loop implementation.
//!
//! Coordinates task execution for the site shell: one FIFO task queue plus
//! the interval timer service shared with sleeping personas.

use std::cell::RefCell;
use std::rc::Rc;

use crate::task_queue::{Task, TaskError, TaskQueue};
use crate::timers::Timers;

/// Cloneable handle for enqueueing tasks onto an [`EventLoop`].
///
/// The queue is shared, so a running task may enqueue follow-up work
/// through a spawner it captured.
#[derive(Clone)]
pub struct Spawner {
    tasks: Rc<RefCell<TaskQueue>>,
}

impl Spawner {
    /// Adds a task to the end of the queue.
    pub fn enqueue(&self, task: Task) {
        self.tasks.borrow_mut().enqueue(task);
    }
}

impl std::fmt::Debug for Spawner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spawner")
            .field("pending", &self.tasks.borrow().len())
            .finish()
    }
}

/// The single-threaded event loop.
///
/// Each turn takes the oldest task from the queue and executes it. Interval
/// timers are owned by the loop but driven separately through the
/// [`Timers`] handle, since they follow a virtual clock rather than queue
/// order.
#[derive(Debug, Default)]
pub struct EventLoop {
    tasks: Rc<RefCell<TaskQueue>>,
    timers: Timers,
}

impl EventLoop {
    /// Creates a new loop with an empty queue and a fresh timer service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle for enqueueing tasks.
    pub fn spawner(&self) -> Spawner {
        Spawner {
            tasks: Rc::clone(&self.tasks),
        }
    }

    /// Returns a handle to the loop's timer service.
    pub fn timers(&self) -> Timers {
        self.timers.clone()
    }

    /// Adds a task to the end of the queue.
    pub fn enqueue(&self, task: Task) {
        self.tasks.borrow_mut().enqueue(task);
    }

    /// Runs queued tasks until the queue is empty.
    ///
    /// Tasks enqueued while the loop runs are executed in the same call.
    /// The first task error stops the drain and is propagated.
    pub fn run_until_done(&mut self) -> Result<(), TaskError> {
        while self.turn()? {}
        Ok(())
    }

    /// Executes at most one task.
    ///
    /// Returns `Ok(true)` if a task ran, `Ok(false)` if the queue was empty.
    pub fn turn(&mut self) -> Result<bool, TaskError> {
        let task = self.tasks.borrow_mut().dequeue();
        match task {
            Some(task) => {
                task.run()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns true if no task is queued.
    pub fn is_idle(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Returns the number of queued tasks.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.borrow().len()
    }
}
