//! Runtime error types.

use tama_core::PetError;
use thiserror::Error;

/// Errors returned by [`GameHandle`](crate::GameHandle) requests.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The engine rejected the request.
    #[error(transparent)]
    Core(#[from] PetError),

    /// The game loop has shut down.
    #[error("Game loop is no longer running")]
    Closed,
}

impl RuntimeError {
    /// The engine error, if that is what this is.
    #[must_use]
    pub fn as_core(&self) -> Option<&PetError> {
        match self {
            Self::Core(err) => Some(err),
            Self::Closed => None,
        }
    }
}
