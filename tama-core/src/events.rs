//! Change notifications emitted by the engine.
//!
//! The engine buffers these in emission order; the integration layer drains
//! them and forwards each one to the presentation hooks.

use serde::Serialize;

use crate::pet::PetView;
use crate::types::{PetId, Stats};

/// Something the presentation layer should reflect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PetEvent {
    /// A pet joined the collection and should be drawn.
    Created {
        /// The new pet.
        pet: PetView,
    },

    /// A pet's stats changed.
    StatsUpdated {
        /// Which pet.
        id: PetId,
        /// Its stats after the change.
        stats: Stats,
    },

    /// A pet left the collection and its view should go.
    Removed {
        /// Which pet.
        id: PetId,
    },

    /// A line for the history box.
    Log {
        /// Human-readable text.
        message: String,
    },

    /// The history box should be emptied.
    HistoryCleared,

    /// A user-facing error (capacity, bad name) worth an alert.
    Alert {
        /// Human-readable text.
        message: String,
    },
}

impl PetEvent {
    /// Shorthand for a [`PetEvent::Log`].
    #[must_use]
    pub fn log(message: impl Into<String>) -> Self {
        Self::Log {
            message: message.into(),
        }
    }

    /// The pet this event concerns, if any.
    #[must_use]
    pub fn pet_id(&self) -> Option<PetId> {
        match self {
            Self::Created { pet } => Some(pet.id),
            Self::StatsUpdated { id, .. } | Self::Removed { id } => Some(*id),
            Self::Log { .. } | Self::HistoryCleared | Self::Alert { .. } => None,
        }
    }
}
