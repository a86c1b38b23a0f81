//! A single pet: identity, stats, and the alive/ran-away state machine.

use serde::Serialize;

use crate::action::Action;
use crate::decay::DecayHandle;
use crate::error::{PetError, Result};
use crate::types::{AnimalType, PetId, StatDelta, Stats};

/// A virtual pet.
///
/// Stats only change through [`Pet::perform`] and [`Pet::decay`], and both
/// refuse to touch a pet that is no longer alive.
#[derive(Debug)]
pub struct Pet {
    id: PetId,
    name: String,
    animal: AnimalType,
    stats: Stats,
    alive: bool,
    decay: Option<DecayHandle>,
}

/// Outcome of one stat mutation (action or decay firing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    /// Stats after clamping.
    pub stats: Stats,
    /// History line describing what happened.
    pub message: String,
    /// Whether a stat hit zero. The owner must remove the pet.
    pub depleted: bool,
}

/// Read-only copy of a pet's visible state, handed to presentation hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetView {
    /// Identity key.
    pub id: PetId,
    /// Display name.
    pub name: String,
    /// Species.
    pub animal: AnimalType,
    /// Current stats.
    pub stats: Stats,
}

impl Pet {
    /// Create a live pet with every stat at `initial_stat`.
    ///
    /// # Errors
    /// Returns `PetError::InvalidName` if `name` is empty or whitespace.
    pub fn new(id: PetId, name: impl Into<String>, animal: AnimalType, initial_stat: u8) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PetError::InvalidName);
        }
        Ok(Self {
            id,
            name,
            animal,
            stats: Stats::uniform(initial_stat),
            alive: true,
            decay: None,
        })
    }

    /// Identity key.
    #[must_use]
    pub fn id(&self) -> PetId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Species.
    #[must_use]
    pub fn animal(&self) -> AnimalType {
        self.animal
    }

    /// Current stats.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Whether the pet is still around.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[cfg(test)]
    pub(crate) fn decay_handle(&self) -> Option<&DecayHandle> {
        self.decay.as_ref()
    }

    /// Snapshot for presentation.
    #[must_use]
    pub fn view(&self) -> PetView {
        PetView {
            id: self.id,
            name: self.name.clone(),
            animal: self.animal,
            stats: self.stats,
        }
    }

    /// Apply a player action.
    ///
    /// # Errors
    /// Returns `PetError::DeadPet` if the pet is no longer alive. Stats are
    /// left untouched in that case.
    pub fn perform(&mut self, action: Action) -> Result<Effect> {
        let message = action.describe(&self.name);
        self.mutate(action.delta(), message)
    }

    /// Apply one passive decay firing of `amount` to every stat.
    ///
    /// # Errors
    /// Returns `PetError::DeadPet` if the pet is no longer alive.
    pub fn decay(&mut self, amount: u8) -> Result<Effect> {
        let message = format!("{} is getting tired, hungry, and bored...", self.name);
        self.mutate(StatDelta::uniform(-i16::from(amount)), message)
    }

    fn mutate(&mut self, delta: StatDelta, message: String) -> Result<Effect> {
        if !self.alive {
            return Err(PetError::DeadPet(self.id));
        }
        self.stats = self.stats.apply(delta);
        Ok(Effect {
            stats: self.stats,
            message,
            depleted: self.stats.is_depleted(),
        })
    }

    /// Mark the pet as gone. Returns `true` only on the call that performs
    /// the alive → gone transition.
    pub fn mark_gone(&mut self) -> bool {
        std::mem::replace(&mut self.alive, false)
    }

    pub(crate) fn attach_decay(&mut self, handle: DecayHandle) {
        self.decay = Some(handle);
    }

    pub(crate) fn take_decay(&mut self) -> Option<DecayHandle> {
        self.decay.take()
    }
}
