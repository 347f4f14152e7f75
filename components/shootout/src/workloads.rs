//! The two bulk workloads being compared.
//!
//! Each workload has the same shape: an instantiation phase building the
//! whole population through one variant's constructor, then a read phase
//! asking every persona its name and thoughts in index order. Nothing
//! exercises a persona, so none sleeps and the recovery branch stays cold
//! while timing.

use std::hint::black_box;

use event_loop::Timers;
use persona::{ClosurePersona, StructPersona};

/// Personas constructed per workload run.
pub const POPULATION: usize = 10_000;

/// Name prefix; personas are named `Neo0`..`Neo9999`.
pub const NAME_PREFIX: &str = "Neo";

/// Builds and queries a population of [`StructPersona`]s.
pub fn struct_population(timers: &Timers) {
    let mut people = Vec::with_capacity(POPULATION);
    for i in 0..POPULATION {
        people.push(StructPersona::new(format!("{NAME_PREFIX}{i}"), timers.clone()));
    }
    for person in &people {
        black_box(person.ask_name());
        black_box(person.ask_thoughts());
    }
}

/// Builds and queries a population of [`ClosurePersona`]s.
pub fn closure_population(timers: &Timers) {
    let mut people = Vec::with_capacity(POPULATION);
    for i in 0..POPULATION {
        people.push(ClosurePersona::new(format!("{NAME_PREFIX}{i}"), timers.clone()));
    }
    for person in &people {
        black_box(person.ask_name());
        black_box(person.ask_thoughts());
    }
}
