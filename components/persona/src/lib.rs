//! The benchmarked entity: a named agent with an energy/sleep state machine.
//!
//! Two representations of the same behavior live here, and measuring the
//! difference between them is the whole point of the shootout:
//!
//! - [`StructPersona`]: a struct with inherent methods over one shared
//!   state cell; calls are statically dispatched.
//! - [`ClosurePersona`]: a factory building a record of boxed closures,
//!   each capturing its own clone of the state cell; calls go through
//!   dynamic dispatch.
//!
//! Both implement the [`Persona`] trait so workloads and the benchmark
//! driver are written once against the shared contract. The state machine:
//! an awake persona answers queries and loses energy when exercised; at
//! zero energy it falls asleep, answers nothing, and recovers one energy
//! point per second on a recurring timer until it crosses the wake
//! threshold, at which point the timer is cancelled through its own handle.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::time::Duration;

pub mod closure_persona;
pub mod struct_persona;

pub use closure_persona::ClosurePersona;
pub use struct_persona::StructPersona;

/// Energy level every persona starts with.
pub const INITIAL_ENERGY: i32 = 10;

/// A recovering persona wakes once its energy exceeds this.
pub const WAKE_THRESHOLD: i32 = 5;

/// Period of the recovery interval started on falling asleep.
pub const RECOVERY_PERIOD: Duration = Duration::from_secs(1);

/// The one reflective thought every persona ponders.
pub const DEEPEST_THOUGHTS: &str = "What _do_ snozzberries taste like?";

/// Shared contract of both persona representations.
pub trait Persona {
    /// Returns the persona's greeting, or `None` while sleeping.
    fn ask_name(&self) -> Option<String>;

    /// Returns the persona's pondered thought, or `None` while sleeping.
    fn ask_thoughts(&self) -> Option<String>;

    /// Burns `exertion` energy. No-op while sleeping; falling to zero or
    /// below puts the persona to sleep and starts its recovery interval.
    fn exercise(&mut self, exertion: i32);
}
