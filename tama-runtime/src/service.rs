//! The game loop.
//!
//! One tokio task owns the [`PetCollection`] and is the only thing that
//! mutates it. It wakes for three reasons: a command from a [`GameHandle`], a
//! finished name lookup, or the next decay deadline. Each wake-up is handled
//! to completion before the next, so no two mutations ever interleave.
//!
//! Random-name lookups run on their own task. The creation they belong to
//! resumes when the result comes back and is checked against the collection
//! as it is *then*, not as it was when the lookup started.

use std::sync::Arc;

use tama_core::config::TamaConfig;
use tama_core::{AnimalType, PetCollection, PetId, SimTime};
use tama_names::{NameClient, NameLookup, NameResolution, NameSource};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, trace, warn};

use crate::commands::{Command, GameHandle, GameSnapshot, Reply};
use crate::hooks::{self, PresentationHooks};

/// History line shown when a random name could not be fetched.
pub const NAME_FAILURE_NOTICE: &str = "Oops, something went wrong while fetching a name.";

const COMMAND_BUFFER: usize = 64;

/// A random-name lookup that finished while the loop kept running.
struct ResolvedName {
    animal: AnimalType,
    resolution: NameResolution,
    reply: Reply<PetId>,
}

enum Wake {
    Command(Option<Command>),
    Resolved(ResolvedName),
    Decay,
}

/// Single-owner event loop driving the simulation.
///
/// `N` supplies random names; production uses [`NameClient`].
pub struct GameLoop<H, N = NameClient> {
    pets: PetCollection,
    names: Arc<N>,
    fallback_name: String,
    hooks: H,
    commands: mpsc::Receiver<Command>,
    resolved_tx: mpsc::UnboundedSender<ResolvedName>,
    resolved_rx: mpsc::UnboundedReceiver<ResolvedName>,
    epoch: Instant,
}

impl<H: PresentationHooks, N: NameLookup> GameLoop<H, N> {
    /// Build a loop and the handle that talks to it.
    ///
    /// Simulation time starts counting now.
    #[must_use]
    pub fn new(config: &TamaConfig, names: N, hooks: H) -> (Self, GameHandle) {
        let (tx, commands) = mpsc::channel(COMMAND_BUFFER);
        let (resolved_tx, resolved_rx) = mpsc::unbounded_channel();
        let game = Self {
            pets: PetCollection::new(config.pets.clone()),
            names: Arc::new(names),
            fallback_name: config.names.fallback_name.clone(),
            hooks,
            commands,
            resolved_tx,
            resolved_rx,
            epoch: Instant::now(),
        };
        (game, GameHandle::new(tx))
    }

    /// Run until shut down or every handle is dropped.
    pub async fn run(mut self) {
        info!(capacity = self.pets.capacity(), "Game loop started");
        loop {
            let deadline = self
                .pets
                .next_deadline()
                .map(|due| self.epoch + due.as_duration());

            let wake = tokio::select! {
                cmd = self.commands.recv() => Wake::Command(cmd),
                Some(resolved) = self.resolved_rx.recv() => Wake::Resolved(resolved),
                () = sleep_until(deadline) => Wake::Decay,
            };

            match wake {
                Wake::Command(None | Some(Command::Shutdown)) => break,
                Wake::Command(Some(cmd)) => self.handle(cmd),
                Wake::Resolved(resolved) => self.finish_create(resolved),
                Wake::Decay => {
                    let now = self.now();
                    let fired = self.pets.advance_to(now);
                    debug!(%now, fired, "Decay wake-up");
                }
            }
            self.flush();
        }
        info!("Game loop stopped");
    }

    fn handle(&mut self, cmd: Command) {
        let now = self.now();
        match cmd {
            Command::Create {
                source: NameSource::Manual(name),
                animal,
                reply,
            } => {
                let result = self.pets.create_pet(&name, animal, now);
                let _ = reply.send(result);
            }
            Command::Create {
                source: NameSource::Random,
                animal,
                reply,
            } => self.start_lookup(animal, reply),
            Command::Act { pet, action, reply } => {
                let result = self.pets.perform(pet, action, now);
                if let Err(err) = &result {
                    debug!(%pet, %action, "Action ignored: {err}");
                }
                let _ = reply.send(result);
            }
            Command::Restart { reply } => {
                self.pets.restart();
                let _ = reply.send(Ok(()));
            }
            Command::Snapshot { reply } => {
                self.pets.advance_to(now);
                let _ = reply.send(GameSnapshot {
                    pets: self.pets.views(),
                    capacity: self.pets.capacity(),
                    counters: self.pets.counters().snapshot(),
                });
            }
            Command::Shutdown => {}
        }
    }

    fn start_lookup(&self, animal: AnimalType, reply: Reply<PetId>) {
        let names = Arc::clone(&self.names);
        let done = self.resolved_tx.clone();
        tokio::spawn(async move {
            let resolution = names.resolve().await;
            // The loop is gone if this fails; so is anyone waiting on `reply`.
            let _ = done.send(ResolvedName {
                animal,
                resolution,
                reply,
            });
        });
    }

    fn finish_create(&mut self, resolved: ResolvedName) {
        let ResolvedName {
            animal,
            resolution,
            reply,
        } = resolved;

        if let NameResolution::Failed { reason } = &resolution {
            warn!(fallback = %self.fallback_name, "Random name lookup failed: {reason}");
            // Keep history order: anything already emitted goes first.
            self.flush();
            self.hooks.log(NAME_FAILURE_NOTICE);
        }

        let name = resolution.into_name(&self.fallback_name);
        let now = self.now();
        let _ = reply.send(self.pets.create_pet(&name, animal, now));
    }

    fn flush(&mut self) {
        for event in self.pets.drain_events() {
            trace!(pet = ?event.pet_id(), "Dispatching event");
            hooks::dispatch(&mut self.hooks, event);
        }
    }

    fn now(&self) -> SimTime {
        SimTime::from_elapsed(self.epoch.elapsed())
    }
}

impl<H: PresentationHooks + Send + 'static, N: NameLookup> GameLoop<H, N> {
    /// Run the loop on its own task.
    #[must_use]
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

/// Build a loop, spawn it, and return its handle.
pub fn start<H: PresentationHooks + Send + 'static, N: NameLookup>(
    config: &TamaConfig,
    names: N,
    hooks: H,
) -> (GameHandle, JoinHandle<()>) {
    let (game, handle) = GameLoop::new(config, names, hooks);
    (handle, game.spawn())
}
