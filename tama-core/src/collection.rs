//! The pet collection: capacity, lifecycle, and decay processing.
//!
//! [`PetCollection`] is the single owner of all simulation state. Every
//! operation takes the current [`SimTime`] and first applies any decay that
//! came due before it, so action and decay effects on a pet always land in
//! the order they were triggered.

use tracing::{debug, info, warn};

use crate::action::Action;
use crate::config::PetsConfig;
use crate::decay::DecayScheduler;
use crate::error::{PetError, Result};
use crate::events::PetEvent;
use crate::metrics::SimCounters;
use crate::pet::{Effect, Pet, PetView};
use crate::types::{AnimalType, PetId, SimTime, Stats};

/// Insertion-ordered set of live pets with a hard capacity.
///
/// Invariant: every pet in the collection is alive. A pet whose stats hit
/// zero is removed in the same step that detected it.
#[derive(Debug)]
pub struct PetCollection {
    config: PetsConfig,
    pets: Vec<Pet>,
    scheduler: DecayScheduler,
    events: Vec<PetEvent>,
    counters: SimCounters,
    next_id: u64,
}

impl PetCollection {
    /// Create an empty collection.
    ///
    /// An `initial_stat` of zero is raised to 1; a pet must not start depleted.
    #[must_use]
    pub fn new(mut config: PetsConfig) -> Self {
        if config.initial_stat == 0 {
            warn!("pets.initial_stat = 0 would create depleted pets; using 1");
            config.initial_stat = 1;
        }
        let scheduler = DecayScheduler::new(config.decay_period());
        Self {
            pets: Vec::with_capacity(config.capacity),
            config,
            scheduler,
            events: Vec::new(),
            counters: SimCounters::new(),
            next_id: 1,
        }
    }

    /// Maximum number of live pets.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Number of live pets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pets.len()
    }

    /// Whether there are no live pets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Whether another pet would exceed capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pets.len() >= self.config.capacity
    }

    /// Live pets in creation order.
    #[must_use]
    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Look up a live pet.
    #[must_use]
    pub fn get(&self, id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id() == id)
    }

    /// Snapshots of every live pet in creation order.
    #[must_use]
    pub fn views(&self) -> Vec<PetView> {
        self.pets.iter().map(Pet::view).collect()
    }

    /// Lifetime activity counters.
    #[must_use]
    pub fn counters(&self) -> &SimCounters {
        &self.counters
    }

    /// Take every event emitted since the last drain, in emission order.
    pub fn drain_events(&mut self) -> Vec<PetEvent> {
        std::mem::take(&mut self.events)
    }

    /// When the next decay firing is due, if any pet is alive.
    pub fn next_deadline(&mut self) -> Option<SimTime> {
        self.scheduler.next_deadline()
    }

    /// Number of decay tasks still scheduled.
    #[must_use]
    pub fn pending_decay_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Create a pet and start its decay timer.
    ///
    /// Decay due before `now` is applied first, so a pet that runs away at
    /// the same moment frees its slot.
    ///
    /// # Errors
    /// - `PetError::InvalidName` if `name` is blank.
    /// - `PetError::CapacityExceeded` if the collection is full.
    ///
    /// Both leave the collection unchanged and emit an alert.
    pub fn create_pet(&mut self, name: &str, animal: AnimalType, now: SimTime) -> Result<PetId> {
        self.advance_to(now);

        if name.trim().is_empty() {
            return Err(self.reject(PetError::InvalidName));
        }
        if self.is_full() {
            return Err(self.reject(PetError::CapacityExceeded {
                limit: self.config.capacity,
                current: self.pets.len(),
            }));
        }

        let id = PetId(self.next_id);
        let mut pet = Pet::new(id, name, animal, self.config.initial_stat)?;
        self.next_id += 1;

        pet.attach_decay(self.scheduler.schedule(id, now));
        self.events.push(PetEvent::Created { pet: pet.view() });
        info!(pet = %id, name = %pet.name(), animal = %animal, "Pet created");

        self.pets.push(pet);
        SimCounters::bump(&self.counters.pets_created);
        Ok(id)
    }

    /// Apply a player action to a live pet.
    ///
    /// Returns the pet's stats after the action. If the action empties a stat
    /// the pet runs away before this returns.
    ///
    /// # Errors
    /// - `PetError::DeadPet` if the pet has run away or was cleared.
    /// - `PetError::UnknownPet` if the id was never issued.
    pub fn perform(&mut self, id: PetId, action: Action, now: SimTime) -> Result<Stats> {
        self.advance_to(now);

        let Some(index) = self.position(id) else {
            let err = self.missing(id);
            debug!(pet = %id, action = %action, "Ignoring action: {err}");
            return Err(err);
        };

        let effect = self.pets[index].perform(action)?;
        let stats = effect.stats;
        SimCounters::bump(&self.counters.actions_performed);
        debug!(pet = %id, action = %action, %stats, "Action applied");

        self.apply_effect(id, effect);
        Ok(stats)
    }

    /// Remove a pet because it ran away.
    ///
    /// Cancels its decay task and emits the removal and a history line.
    /// Returns `false` if the pet was not in the collection.
    pub fn remove_pet(&mut self, id: PetId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let mut pet = self.pets.remove(index);
        pet.mark_gone();
        if let Some(handle) = pet.take_decay() {
            self.scheduler.cancel(handle);
        }

        self.events.push(PetEvent::Removed { id });
        self.events.push(PetEvent::log(format!(
            "{} ran away due to neglect 😢",
            pet.name()
        )));
        SimCounters::bump(&self.counters.run_aways);
        info!(pet = %id, name = %pet.name(), "Pet ran away");
        true
    }

    /// Clear every pet and cancel every decay task.
    pub fn restart(&mut self) {
        for mut pet in self.pets.drain(..) {
            pet.mark_gone();
            if let Some(handle) = pet.take_decay() {
                self.scheduler.cancel(handle);
            }
            self.events.push(PetEvent::Removed { id: pet.id() });
        }
        self.scheduler.cancel_all();

        self.events.push(PetEvent::HistoryCleared);
        self.events
            .push(PetEvent::log("Game restarted! Create a new pet 😊"));
        SimCounters::bump(&self.counters.restarts);
        info!("Game restarted");
    }

    /// Apply every decay firing due at or before `now`, in due order.
    ///
    /// Returns how many firings touched a live pet.
    pub fn advance_to(&mut self, now: SimTime) -> usize {
        let mut applied = 0;
        while let Some(firing) = self.scheduler.pop_due(now) {
            let Some(index) = self.position(firing.pet) else {
                debug!(task = %firing.task, pet = %firing.pet, "Decay fired for a missing pet");
                self.scheduler.retire(firing);
                continue;
            };

            let effect = match self.pets[index].decay(self.config.decay_amount) {
                Ok(effect) => effect,
                Err(_) => {
                    self.scheduler.retire(firing);
                    continue;
                }
            };
            applied += 1;
            SimCounters::bump(&self.counters.decay_ticks);
            debug!(pet = %firing.pet, due = %firing.due, stats = %effect.stats, "Decay applied");

            self.apply_effect(firing.pet, effect);
            // A pet that just ran away had its task cancelled; this is then a no-op.
            self.scheduler.reschedule(firing);
        }
        applied
    }

    fn apply_effect(&mut self, id: PetId, effect: Effect) {
        self.events.push(PetEvent::StatsUpdated {
            id,
            stats: effect.stats,
        });
        self.events.push(PetEvent::log(effect.message));
        if effect.depleted {
            self.remove_pet(id);
        }
    }

    fn reject(&mut self, err: PetError) -> PetError {
        self.events.push(PetEvent::Alert {
            message: err.to_string(),
        });
        SimCounters::bump(&self.counters.creations_rejected);
        warn!("Pet creation rejected: {err}");
        err
    }

    fn position(&self, id: PetId) -> Option<usize> {
        self.pets.iter().position(|pet| pet.id() == id)
    }

    fn missing(&self, id: PetId) -> PetError {
        if id.0 > 0 && id.0 < self.next_id {
            PetError::DeadPet(id)
        } else {
            PetError::UnknownPet(id)
        }
    }
}

impl Default for PetCollection {
    fn default() -> Self {
        Self::new(PetsConfig::default())
    }
}
