//! Presentation hooks.
//!
//! The game loop turns every engine event into one call on a
//! [`PresentationHooks`] implementation. Views are keyed by [`PetId`], so an
//! implementation keeps a `PetId → view` map instead of searching by name.

use std::sync::Arc;

use parking_lot::Mutex;
use tama_core::{PetEvent, PetId, PetView, Stats};

/// What a front end must provide to show the game.
pub trait PresentationHooks {
    /// Draw a newly created pet.
    fn render(&mut self, pet: &PetView);

    /// Refresh a pet's displayed stats.
    fn update_stats(&mut self, id: PetId, stats: Stats);

    /// Append a line to the history.
    fn log(&mut self, message: &str);

    /// Drop a pet's view.
    fn remove(&mut self, id: PetId);

    /// Empty the history.
    fn clear_history(&mut self) {}

    /// Show a user-facing error. Defaults to a history line.
    fn alert(&mut self, message: &str) {
        self.log(message);
    }
}

/// Forward one engine event to the matching hook.
pub fn dispatch<H: PresentationHooks + ?Sized>(hooks: &mut H, event: PetEvent) {
    match event {
        PetEvent::Created { pet } => hooks.render(&pet),
        PetEvent::StatsUpdated { id, stats } => hooks.update_stats(id, stats),
        PetEvent::Removed { id } => hooks.remove(id),
        PetEvent::Log { message } => hooks.log(&message),
        PetEvent::HistoryCleared => hooks.clear_history(),
        PetEvent::Alert { message } => hooks.alert(&message),
    }
}

/// Hooks that record every call as a [`PetEvent`].
///
/// Clones share the same buffer, so one copy can be handed to the game loop
/// while another is inspected.
#[derive(Debug, Clone, Default)]
pub struct RecordingHooks {
    events: Arc<Mutex<Vec<PetEvent>>>,
}

impl RecordingHooks {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything recorded so far.
    #[must_use]
    pub fn take(&self) -> Vec<PetEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Copies of the history lines recorded so far.
    #[must_use]
    pub fn logs(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                PetEvent::Log { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: PetEvent) {
        self.events.lock().push(event);
    }
}

impl PresentationHooks for RecordingHooks {
    fn render(&mut self, pet: &PetView) {
        self.push(PetEvent::Created { pet: pet.clone() });
    }

    fn update_stats(&mut self, id: PetId, stats: Stats) {
        self.push(PetEvent::StatsUpdated { id, stats });
    }

    fn log(&mut self, message: &str) {
        self.push(PetEvent::log(message));
    }

    fn remove(&mut self, id: PetId) {
        self.push(PetEvent::Removed { id });
    }

    fn clear_history(&mut self) {
        self.push(PetEvent::HistoryCleared);
    }

    fn alert(&mut self, message: &str) {
        self.push(PetEvent::Alert {
            message: message.to_string(),
        });
    }
}
