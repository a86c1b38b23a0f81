//! Property-Based Tests for TAMA Core
//!
//! Uses `proptest` to verify the stat and lifecycle invariants under random
//! interleavings of player actions and elapsed time.

use proptest::prelude::*;

use tama_core::config::PetsConfig;
use tama_core::{Action, AnimalType, PetCollection, PetError, PetEvent, PetId, SimTime, STAT_MAX};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// One step of a play session: either an action or some time passing.
#[derive(Debug, Clone)]
enum Step {
    Act(Action),
    Wait(u64),
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Nap), Just(Action::Play), Just(Action::Eat)]
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => arb_action().prop_map(Step::Act),
        1 => (0..25_000u64).prop_map(Step::Wait),
    ]
}

/// Drive a single pet through `steps`, returning every stats event observed.
fn run_session(initial_stat: u8, steps: &[Step]) -> (PetCollection, PetId, Vec<PetEvent>) {
    let mut pets = PetCollection::new(PetsConfig {
        initial_stat,
        ..PetsConfig::default()
    });
    let id = pets
        .create_pet("Prop", AnimalType::Dog, SimTime::ZERO)
        .expect("fresh collection accepts a pet");

    let mut now = SimTime::ZERO;
    let mut events = pets.drain_events();
    for step in steps {
        match step {
            Step::Act(action) => {
                let _ = pets.perform(id, *action, now);
            }
            Step::Wait(ms) => {
                now = SimTime(now.0 + ms);
                pets.advance_to(now);
            }
        }
        events.extend(pets.drain_events());
    }
    (pets, id, events)
}

// ---------------------------------------------------------------------------
// Property: Stats are always clamped to [0, 100]
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn stats_always_clamped(
        initial in 0..=100u8,
        steps in prop::collection::vec(arb_step(), 0..80),
    ) {
        let (_, _, events) = run_session(initial, &steps);
        for event in &events {
            if let PetEvent::StatsUpdated { stats, .. } = event {
                prop_assert!(stats.energy <= STAT_MAX);
                prop_assert!(stats.fullness <= STAT_MAX);
                prop_assert!(stats.happiness <= STAT_MAX);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property: A pet runs away at most once, exactly when a stat hits zero
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn runs_away_once_on_first_empty_stat(
        steps in prop::collection::vec(arb_step(), 0..120),
    ) {
        let (pets, id, events) = run_session(50, &steps);

        let removals: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e, PetEvent::Removed { .. }))
            .map(|(i, _)| i)
            .collect();
        prop_assert!(removals.len() <= 1);

        let first_empty = events.iter().position(|e| {
            matches!(e, PetEvent::StatsUpdated { stats, .. } if stats.is_depleted())
        });

        match (first_empty, removals.first()) {
            (Some(empty_at), Some(&removed_at)) => {
                // stats, log line, then removal.
                prop_assert_eq!(removed_at, empty_at + 2);
                prop_assert!(pets.get(id).is_none());
            }
            (None, None) => prop_assert!(pets.get(id).is_some()),
            other => prop_assert!(false, "mismatched depletion/removal: {:?}", other),
        }
    }
}

// ---------------------------------------------------------------------------
// Property: Nothing touches a pet after it has gone
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn no_updates_after_run_away(
        steps in prop::collection::vec(arb_step(), 0..120),
    ) {
        let (_, id, events) = run_session(30, &steps);

        if let Some(removed_at) = events.iter().position(|e| *e == PetEvent::Removed { id }) {
            let later_updates = events[removed_at..]
                .iter()
                .filter(|e| matches!(e, PetEvent::StatsUpdated { .. }))
                .count();
            prop_assert_eq!(later_updates, 0);
        }
    }
}

// ---------------------------------------------------------------------------
// Property: The collection never exceeds capacity
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn capacity_never_exceeded(
        capacity in 1..8usize,
        attempts in 0..20usize,
    ) {
        let mut pets = PetCollection::new(PetsConfig {
            capacity,
            ..PetsConfig::default()
        });

        for i in 0..attempts {
            let result = pets.create_pet(&format!("Pet {i}"), AnimalType::Cat, SimTime::ZERO);
            if i < capacity {
                prop_assert!(result.is_ok());
            } else {
                let is_capacity_error = matches!(result, Err(PetError::CapacityExceeded { .. }));
                prop_assert!(is_capacity_error);
            }
            prop_assert!(pets.len() <= capacity);
        }
    }
}

// ---------------------------------------------------------------------------
// Property: One big time jump equals many small ones
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn decay_is_step_size_independent(
        total in 0..200_000u64,
        chunk in 1..30_000u64,
    ) {
        let mut jumped = PetCollection::default();
        let mut stepped = PetCollection::default();
        let a = jumped.create_pet("A", AnimalType::Rabbit, SimTime::ZERO).expect("created");
        let b = stepped.create_pet("A", AnimalType::Rabbit, SimTime::ZERO).expect("created");

        jumped.advance_to(SimTime(total));
        let mut now = 0;
        while now < total {
            now = (now + chunk).min(total);
            stepped.advance_to(SimTime(now));
        }

        prop_assert_eq!(jumped.get(a).map(|p| p.stats()), stepped.get(b).map(|p| p.stats()));
        prop_assert_eq!(jumped.counters().snapshot(), stepped.counters().snapshot());
    }
}
