//! Persona state machine on the shared timer wheel.

use event_loop::Timers;
use persona::{ClosurePersona, Persona, StructPersona, RECOVERY_PERIOD};

#[test]
fn several_sleepers_recover_independently() {
    let timers = Timers::new();
    let mut early = StructPersona::new("Neo0", timers.clone());
    let mut late = StructPersona::new("Neo1", timers.clone());

    early.exercise(10); // energy 0: wakes after 6 ticks
    timers.advance(RECOVERY_PERIOD * 2);
    late.exercise(12); // energy -2: wakes 8 ticks after this point

    assert_eq!(timers.active(), 2);

    timers.advance(RECOVERY_PERIOD * 4); // early at 6 ticks total
    assert!(early.ask_name().is_some());
    assert!(late.ask_name().is_none());
    assert_eq!(timers.active(), 1);

    timers.advance(RECOVERY_PERIOD * 4); // late at 8 ticks since exhaustion
    assert!(late.ask_name().is_some());
    assert_eq!(timers.active(), 0);
}

#[test]
fn mixed_variants_share_one_wheel() {
    let timers = Timers::new();
    let mut by_struct = StructPersona::new("Neo", timers.clone());
    let by_closure = ClosurePersona::new("Trinity", timers.clone());

    Persona::exercise(&mut by_struct, 10);
    by_closure.exercise(10);
    assert_eq!(timers.active(), 2);

    timers.advance(RECOVERY_PERIOD * 6);
    assert!(by_struct.ask_name().is_some());
    assert!(by_closure.ask_name().is_some());
    assert_eq!(timers.active(), 0);
}

#[test]
fn waking_through_recovery_restores_full_query_behavior() {
    let timers = Timers::new();
    let mut persona = StructPersona::new("Neo", timers.clone());

    persona.exercise(10);
    assert!(persona.ask_name().is_none());
    assert!(persona.ask_thoughts().is_none());

    timers.advance(RECOVERY_PERIOD * 6);

    assert_eq!(
        persona.ask_name().unwrap(),
        r#"Neo says "Howdy! I'm Neo!""#
    );
    assert!(persona
        .ask_thoughts()
        .unwrap()
        .contains("ponders the universe"));
}
