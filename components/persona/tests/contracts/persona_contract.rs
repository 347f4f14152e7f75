//! Shared state-machine contract, checked against both representations.

use event_loop::Timers;
use persona::{ClosurePersona, Persona, StructPersona, DEEPEST_THOUGHTS, RECOVERY_PERIOD};

fn awake_persona_answers_queries<P: Persona>(make: impl Fn(&str, Timers) -> P) {
    let persona = make("Neo", Timers::new());

    let greeting = persona.ask_name().expect("awake persona greets");
    assert_eq!(greeting, r#"Neo says "Howdy! I'm Neo!""#);

    let thoughts = persona.ask_thoughts().expect("awake persona ponders");
    assert_eq!(
        thoughts,
        format!(r#"Neo ponders the universe, then speaks: "{}""#, DEEPEST_THOUGHTS)
    );
}

fn light_exercise_leaves_persona_awake<P: Persona>(make: impl Fn(&str, Timers) -> P) {
    let timers = Timers::new();
    let mut persona = make("Neo", timers.clone());

    persona.exercise(9);
    assert!(persona.ask_name().is_some());
    // Still awake, so no recovery interval exists.
    assert_eq!(timers.active(), 0);
}

fn exhaustion_silences_queries<P: Persona>(make: impl Fn(&str, Timers) -> P) {
    let timers = Timers::new();
    let mut persona = make("Neo", timers.clone());

    persona.exercise(10);
    assert!(persona.ask_name().is_none());
    assert!(persona.ask_thoughts().is_none());
    assert_eq!(timers.active(), 1);
}

fn sleeping_exercise_does_not_deepen_sleep<P: Persona>(make: impl Fn(&str, Timers) -> P) {
    let timers = Timers::new();
    let mut persona = make("Neo", timers.clone());

    persona.exercise(10);
    persona.exercise(100);

    // Recovery still takes exactly six ticks from zero energy.
    timers.advance(RECOVERY_PERIOD * 5);
    assert!(persona.ask_name().is_none());
    timers.advance(RECOVERY_PERIOD);
    assert!(persona.ask_name().is_some());
}

fn recovery_wakes_and_releases_the_interval<P: Persona>(make: impl Fn(&str, Timers) -> P) {
    let timers = Timers::new();
    let mut persona = make("Neo", timers.clone());

    persona.exercise(10);
    timers.advance(RECOVERY_PERIOD * 6);

    assert!(persona.ask_name().is_some());
    assert_eq!(timers.active(), 0, "wake must cancel the recovery interval");

    // Long after waking nothing fires again.
    timers.advance(RECOVERY_PERIOD * 60);
    assert!(persona.ask_name().is_some());
    assert_eq!(timers.active(), 0);
}

fn repeated_sleep_cycles_behave_identically<P: Persona>(make: impl Fn(&str, Timers) -> P) {
    let timers = Timers::new();
    let mut persona = make("Neo", timers.clone());

    for _ in 0..3 {
        persona.exercise(6);
        persona.exercise(6);
        assert!(persona.ask_name().is_none());
        timers.advance(RECOVERY_PERIOD * 10);
        assert!(persona.ask_name().is_some());
        assert_eq!(timers.active(), 0);
    }
}

macro_rules! contract {
    ($name:ident, $check:ident) => {
        mod $name {
            use super::*;

            #[test]
            fn struct_persona() {
                $check(|name, timers| StructPersona::new(name, timers));
            }

            #[test]
            fn closure_persona() {
                $check(|name, timers| ClosurePersona::new(name, timers));
            }
        }
    };
}

contract!(answers_queries, awake_persona_answers_queries);
contract!(light_exercise, light_exercise_leaves_persona_awake);
contract!(exhaustion, exhaustion_silences_queries);
contract!(sleeping_exercise, sleeping_exercise_does_not_deepen_sleep);
contract!(recovery, recovery_wakes_and_releases_the_interval);
contract!(repeated_cycles, repeated_sleep_cycles_behave_identically);
