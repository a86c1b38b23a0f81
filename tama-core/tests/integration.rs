//! Integration Tests: End-to-End Pet Scenarios
//!
//! Full lifecycles through the public API: create → act → decay → run away,
//! capacity handling, and restart.

use std::time::Duration;

use tama_core::config::{PetsConfig, TamaConfig};
use tama_core::{Action, AnimalType, PetCollection, PetError, PetEvent, SimTime, Stats};

fn secs(s: u64) -> SimTime {
    SimTime::ZERO + Duration::from_secs(s)
}

// ---------------------------------------------------------------------------
// Scenario: nap, play, then feed until the pet runs away
// ---------------------------------------------------------------------------

#[test]
fn nap_play_then_overfeed() {
    let mut pets = PetCollection::default();
    let rex = pets.create_pet("Rex", AnimalType::Dog, secs(0)).expect("created");
    assert_eq!(pets.get(rex).map(|p| p.stats()), Some(Stats::uniform(50)));

    let after_nap = pets.perform(rex, Action::Nap, secs(1)).expect("nap");
    assert_eq!(
        after_nap,
        Stats {
            energy: 90,
            fullness: 40,
            happiness: 40
        }
    );

    let after_play = pets.perform(rex, Action::Play, secs(2)).expect("play");
    assert_eq!(
        after_play,
        Stats {
            energy: 80,
            fullness: 30,
            happiness: 70
        }
    );

    // Each meal costs 15 energy: 80 → 65 → 50 → 35 → 20 → 5 → 0.
    let mut meals = 0;
    while pets.get(rex).is_some() {
        pets.perform(rex, Action::Eat, secs(3)).expect("still around");
        meals += 1;
        assert!(meals <= 6, "pet should have run away by now");
    }
    assert_eq!(meals, 6);

    let events = pets.drain_events();
    assert_eq!(
        events.last(),
        Some(&PetEvent::log("Rex ran away due to neglect 😢"))
    );
    assert!(matches!(
        pets.perform(rex, Action::Eat, secs(4)),
        Err(PetError::DeadPet(_))
    ));
}

// ---------------------------------------------------------------------------
// Scenario: four pets fit, the fifth is refused with no side effects
// ---------------------------------------------------------------------------

#[test]
fn fifth_pet_is_refused() {
    let mut pets = PetCollection::default();
    let animals = AnimalType::ALL;
    for (i, animal) in animals.iter().enumerate() {
        pets.create_pet(&format!("Pet{i}"), *animal, secs(0))
            .expect("within capacity");
    }
    pets.drain_events();
    let tasks_before = pets.pending_decay_tasks();
    let views_before = pets.views();

    let err = pets
        .create_pet("Extra", AnimalType::Dog, secs(0))
        .expect_err("over capacity");
    assert!(matches!(
        err,
        PetError::CapacityExceeded {
            limit: 4,
            current: 4
        }
    ));
    assert_eq!(err.to_string(), "You can only have 4 pets!");
    assert!(err.is_user_facing());

    assert_eq!(pets.views(), views_before);
    assert_eq!(pets.pending_decay_tasks(), tasks_before);
    assert_eq!(
        pets.drain_events(),
        vec![PetEvent::Alert {
            message: "You can only have 4 pets!".into()
        }]
    );
}

// ---------------------------------------------------------------------------
// Scenario: restart silences every timer
// ---------------------------------------------------------------------------

#[test]
fn restart_then_time_passes_quietly() {
    let mut pets = PetCollection::default();
    for name in ["Mochi", "Pepper"] {
        pets.create_pet(name, AnimalType::Cat, secs(0)).expect("created");
    }
    pets.advance_to(secs(15));
    pets.restart();
    pets.drain_events();

    for minute in 1..=10 {
        assert_eq!(pets.advance_to(secs(minute * 60)), 0);
    }
    assert!(pets.drain_events().is_empty());
    assert_eq!(pets.next_deadline(), None);
}

// ---------------------------------------------------------------------------
// Scenario: pets decay independently, on their own cadence
// ---------------------------------------------------------------------------

#[test]
fn pets_keep_their_own_cadence() {
    let mut pets = PetCollection::default();
    let early = pets.create_pet("Early", AnimalType::Dog, secs(0)).expect("created");
    let late = pets.create_pet("Late", AnimalType::Dog, secs(5)).expect("created");

    pets.advance_to(secs(12));
    assert_eq!(pets.get(early).map(|p| p.stats()), Some(Stats::uniform(40)));
    assert_eq!(pets.get(late).map(|p| p.stats()), Some(Stats::uniform(50)));

    pets.advance_to(secs(15));
    assert_eq!(pets.get(late).map(|p| p.stats()), Some(Stats::uniform(40)));
}

// ---------------------------------------------------------------------------
// Scenario: neglect empties the collection, then it refills
// ---------------------------------------------------------------------------

#[test]
fn neglected_pets_all_leave_and_slots_reopen() {
    let mut pets = PetCollection::default();
    for i in 0..4 {
        pets.create_pet(&format!("Pet{i}"), AnimalType::Chicken, secs(0))
            .expect("created");
    }
    assert!(pets.is_full());

    pets.advance_to(secs(50));
    assert!(pets.is_empty());
    assert_eq!(pets.counters().snapshot().run_aways, 4);

    pets.create_pet("Again", AnimalType::Chicken, secs(51))
        .expect("room again");
}

// ---------------------------------------------------------------------------
// Config-driven tuning flows into the collection
// ---------------------------------------------------------------------------

#[test]
fn config_tunes_capacity_and_decay() {
    let config = TamaConfig::from_toml(
        r#"
        [pets]
        capacity = 1
        decay_period_ms = 1000
        decay_amount = 25
        "#,
    )
    .expect("valid");

    let mut pets = PetCollection::new(config.pets.clone());
    let id = pets.create_pet("Quick", AnimalType::Rabbit, SimTime::ZERO).expect("created");
    assert!(pets.create_pet("Second", AnimalType::Rabbit, SimTime::ZERO).is_err());

    pets.advance_to(SimTime(1_000));
    assert_eq!(pets.get(id).map(|p| p.stats()), Some(Stats::uniform(25)));
    pets.advance_to(SimTime(2_000));
    assert!(pets.get(id).is_none());

    let defaults = PetCollection::new(PetsConfig::default());
    assert_eq!(defaults.capacity(), 4);
}
