//! Struct-with-methods representation.

use std::cell::RefCell;
use std::rc::Rc;

use event_loop::{IntervalHandle, Timers};

use crate::{Persona, DEEPEST_THOUGHTS, INITIAL_ENERGY, RECOVERY_PERIOD, WAKE_THRESHOLD};

#[derive(Debug)]
struct State {
    name: String,
    energy_level: i32,
    sleeping: bool,
    rest_interval: Option<IntervalHandle>,
}

/// A persona as a plain struct with inherent methods.
///
/// State lives in one shared cell so the recovery tick can reach it after
/// the persona has been moved into a population; the cell is the only
/// indirection, and every call is statically dispatched.
#[derive(Debug)]
pub struct StructPersona {
    state: Rc<RefCell<State>>,
    timers: Timers,
}

impl StructPersona {
    /// Creates an awake persona with full energy.
    pub fn new(name: impl Into<String>, timers: Timers) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                name: name.into(),
                energy_level: INITIAL_ENERGY,
                sleeping: false,
                rest_interval: None,
            })),
            timers,
        }
    }

    /// Returns the greeting, or `None` while sleeping.
    pub fn ask_name(&self) -> Option<String> {
        let state = self.state.borrow();
        if state.sleeping {
            return None;
        }
        Some(format!(
            r#"{name} says "Howdy! I'm {name}!""#,
            name = state.name
        ))
    }

    /// Returns the pondered thought, or `None` while sleeping.
    pub fn ask_thoughts(&self) -> Option<String> {
        let state = self.state.borrow();
        if state.sleeping {
            return None;
        }
        Some(format!(
            r#"{name} ponders the universe, then speaks: "{thoughts}""#,
            name = state.name,
            thoughts = DEEPEST_THOUGHTS
        ))
    }

    /// Burns energy; at zero or below the persona falls asleep and starts
    /// recovering.
    pub fn exercise(&mut self, exertion: i32) {
        let mut state = self.state.borrow_mut();
        if state.sleeping {
            return;
        }
        state.energy_level -= exertion;
        if state.energy_level <= 0 {
            state.sleeping = true;
            let rest_state = Rc::clone(&self.state);
            state.rest_interval = Some(
                self.timers
                    .set_interval(RECOVERY_PERIOD, move || rest(&rest_state)),
            );
        }
    }

    /// Returns true while the persona is sleeping.
    pub fn is_sleeping(&self) -> bool {
        self.state.borrow().sleeping
    }

    /// Returns the current energy level.
    pub fn energy_level(&self) -> i32 {
        self.state.borrow().energy_level
    }
}

// Recovery tick. Fires only while sleeping; waking cancels the interval
// through the handle stored at registration.
fn rest(state: &Rc<RefCell<State>>) {
    let mut state = state.borrow_mut();
    state.energy_level += 1;
    if state.energy_level > WAKE_THRESHOLD {
        state.sleeping = false;
        if let Some(interval) = state.rest_interval.take() {
            interval.cancel();
        }
    }
}

impl Persona for StructPersona {
    fn ask_name(&self) -> Option<String> {
        StructPersona::ask_name(self)
    }

    fn ask_thoughts(&self) -> Option<String> {
        StructPersona::ask_thoughts(self)
    }

    fn exercise(&mut self, exertion: i32) {
        StructPersona::exercise(self, exertion);
    }
}
