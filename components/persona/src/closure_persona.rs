//! Closure-record representation.

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

/// A persona as a record of boxed closures over captured state.
///
/// The factory allocates one state cell plus one boxed closure per
/// operation, each closure capturing its own clone of the cell; every call
/// is dynamically dispatched. Construction cost and call cost are the
/// counterpoint to [`crate::StructPersona`].
pub struct ClosurePersona {
    ask_name: Box<dyn Fn() -> Option<String>>,
    ask_thoughts: Box<dyn Fn() -> Option<String>>,
    exercise: Box<dyn Fn(i32)>,
    sleeping: Box<dyn Fn() -> bool>,
    energy_level: Box<dyn Fn() -> i32>,
}

impl ClosurePersona {
    /// Builds the closure record for an awake persona with full energy.
    pub fn new(name: impl Into<String>, timers: Timers) -> Self {
        let state = Rc::new(RefCell::new(State {
            name: name.into(),
            energy_level: INITIAL_ENERGY,
            sleeping: false,
            rest_interval: None,
        }));

        let ask_name = {
            let state = Rc::clone(&state);
            Box::new(move || {
                let state = state.borrow();
                if state.sleeping {
                    return None;
                }
                Some(format!(
                    r#"{name} says "Howdy! I'm {name}!""#,
                    name = state.name
                ))
            }) as Box<dyn Fn() -> Option<String>>
        };

        let ask_thoughts = {
            let state = Rc::clone(&state);
            Box::new(move || {
                let state = state.borrow();
                if state.sleeping {
                    return None;
                }
                Some(format!(
                    r#"{name} ponders the universe, then speaks: "{thoughts}""#,
                    name = state.name,
                    thoughts = DEEPEST_THOUGHTS
                ))
            }) as Box<dyn Fn() -> Option<String>>
        };

        let exercise = {
            let state = Rc::clone(&state);
            Box::new(move |exertion: i32| {
                let mut st = state.borrow_mut();
                if st.sleeping {
                    return;
                }
                st.energy_level -= exertion;
                if st.energy_level <= 0 {
                    st.sleeping = true;
                    let rest_state = Rc::clone(&state);
                    st.rest_interval = Some(
                        timers.set_interval(RECOVERY_PERIOD, move || rest(&rest_state)),
                    );
                }
            }) as Box<dyn Fn(i32)>
        };

        let sleeping = {
            let state = Rc::clone(&state);
            Box::new(move || state.borrow().sleeping) as Box<dyn Fn() -> bool>
        };

        let energy_level = {
            let state = Rc::clone(&state);
            Box::new(move || state.borrow().energy_level) as Box<dyn Fn() -> i32>
        };

        Self {
            ask_name,
            ask_thoughts,
            exercise,
            sleeping,
            energy_level,
        }
    }

    /// Returns the greeting, or `None` while sleeping.
    pub fn ask_name(&self) -> Option<String> {
        (self.ask_name)()
    }

    /// Returns the pondered thought, or `None` while sleeping.
    pub fn ask_thoughts(&self) -> Option<String> {
        (self.ask_thoughts)()
    }

    /// Burns energy; at zero or below the persona falls asleep and starts
    /// recovering.
    pub fn exercise(&self, exertion: i32) {
        (self.exercise)(exertion);
    }

    /// Returns true while the persona is sleeping.
    pub fn is_sleeping(&self) -> bool {
        (self.sleeping)()
    }

    /// Returns the current energy level.
    pub fn energy_level(&self) -> i32 {
        (self.energy_level)()
    }
}

// Recovery tick. Each representation carries its own copy; the two
// factories share no code beyond the trait.
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

impl Persona for ClosurePersona {
    fn ask_name(&self) -> Option<String> {
        ClosurePersona::ask_name(self)
    }

    fn ask_thoughts(&self) -> Option<String> {
        ClosurePersona::ask_thoughts(self)
    }

    fn exercise(&mut self, exertion: i32) {
        ClosurePersona::exercise(self, exertion);
    }
}

impl std::fmt::Debug for ClosurePersona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosurePersona")
            .field("sleeping", &self.is_sleeping())
            .field("energy_level", &self.energy_level())
            .finish_non_exhaustive()
    }
}
