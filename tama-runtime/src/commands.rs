//! Requests sent to the game loop and the handle that sends them.

use tama_core::metrics::CounterSnapshot;
use tama_core::{Action, AnimalType, PetError, PetId, PetView, Stats};
use tama_names::NameSource;
use tokio::sync::{mpsc, oneshot};

use crate::error::RuntimeError;

/// Reply channel for a request.
pub(crate) type Reply<T> = oneshot::Sender<Result<T, PetError>>;

/// A request to the game loop.
#[derive(Debug)]
pub(crate) enum Command {
    Create {
        source: NameSource,
        animal: AnimalType,
        reply: Reply<PetId>,
    },
    Act {
        pet: PetId,
        action: Action,
        reply: Reply<Stats>,
    },
    Restart {
        reply: Reply<()>,
    },
    Snapshot {
        reply: oneshot::Sender<GameSnapshot>,
    },
    Shutdown,
}

/// Point-in-time view of the whole game.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    /// Live pets in creation order.
    pub pets: Vec<PetView>,
    /// Maximum number of live pets.
    pub capacity: usize,
    /// Lifetime counters.
    pub counters: CounterSnapshot,
}

/// Cloneable front door to a running game loop.
#[derive(Debug, Clone)]
pub struct GameHandle {
    tx: mpsc::Sender<Command>,
}

impl GameHandle {
    pub(crate) fn new(tx: mpsc::Sender<Command>) -> Self {
        Self { tx }
    }

    /// Create a pet. A random name is looked up without blocking the loop.
    ///
    /// # Errors
    /// `RuntimeError::Core` for capacity or name problems,
    /// `RuntimeError::Closed` if the loop has stopped.
    pub async fn create_pet(&self, source: NameSource, animal: AnimalType) -> Result<PetId, RuntimeError> {
        self.request(|reply| Command::Create {
            source,
            animal,
            reply,
        })
        .await
    }

    /// Nap, play, or eat with a pet. Returns the stats afterwards.
    ///
    /// # Errors
    /// `RuntimeError::Core(PetError::DeadPet)` if the pet has gone.
    pub async fn act(&self, pet: PetId, action: Action) -> Result<Stats, RuntimeError> {
        self.request(|reply| Command::Act { pet, action, reply }).await
    }

    /// Clear every pet and the history.
    ///
    /// # Errors
    /// `RuntimeError::Closed` if the loop has stopped.
    pub async fn restart(&self) -> Result<(), RuntimeError> {
        self.request(|reply| Command::Restart { reply }).await
    }

    /// Current pets and counters.
    ///
    /// # Errors
    /// `RuntimeError::Closed` if the loop has stopped.
    pub async fn snapshot(&self) -> Result<GameSnapshot, RuntimeError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Snapshot { reply })
            .await
            .map_err(|_| RuntimeError::Closed)?;
        rx.await.map_err(|_| RuntimeError::Closed)
    }

    /// Ask the loop to stop. Pending decay is dropped.
    pub async fn shutdown(&self) {
        // Already stopped is fine.
        let _ = self.tx.send(Command::Shutdown).await;
    }

    async fn request<T>(&self, make: impl FnOnce(Reply<T>) -> Command) -> Result<T, RuntimeError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| RuntimeError::Closed)?;
        Ok(rx.await.map_err(|_| RuntimeError::Closed)??)
    }
}
