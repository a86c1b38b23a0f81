//! Error types for the pet simulation engine.

use thiserror::Error;

/// Top-level error type for all pet simulation operations.
#[derive(Error, Debug)]
pub enum PetError {
    /// The collection already holds its maximum number of live pets.
    #[error("You can only have {limit} pets!")]
    CapacityExceeded {
        /// Maximum allowed.
        limit: usize,
        /// Current count.
        current: usize,
    },

    /// A manually supplied pet name was empty or whitespace.
    #[error("Pet name must not be blank")]
    InvalidName,

    /// The pet has run away or was cleared by a restart.
    #[error("Pet {0} is no longer around")]
    DeadPet(crate::PetId),

    /// No pet with this id was ever created.
    #[error("Unknown pet: {0}")]
    UnknownPet(crate::PetId),

    /// The species name did not match any known animal.
    #[error("Unknown animal type: {0:?}")]
    UnknownAnimal(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PetError {
    /// Whether this error should be shown to the player rather than just logged.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. } | Self::InvalidName | Self::UnknownAnimal(_)
        )
    }
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, PetError>;
