//! Lifetime counters for a pet collection.
//!
//! Counters are `AtomicU64` so a snapshot can be read through a shared
//! reference while the collection is being driven elsewhere.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for engine activity since startup. Restarts do not reset them.
#[derive(Debug)]
pub struct SimCounters {
    /// Pets successfully created.
    pub pets_created: AtomicU64,
    /// Creation attempts rejected (capacity or invalid name).
    pub creations_rejected: AtomicU64,
    /// Player actions applied.
    pub actions_performed: AtomicU64,
    /// Decay firings applied to a live pet.
    pub decay_ticks: AtomicU64,
    /// Pets that ran away.
    pub run_aways: AtomicU64,
    /// Restarts performed.
    pub restarts: AtomicU64,
}

impl SimCounters {
    /// Create a new set of zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pets_created: AtomicU64::new(0),
            creations_rejected: AtomicU64::new(0),
            actions_performed: AtomicU64::new(0),
            decay_ticks: AtomicU64::new(0),
            run_aways: AtomicU64::new(0),
            restarts: AtomicU64::new(0),
        }
    }

    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot all counters.
    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            pets_created: self.pets_created.load(Ordering::Relaxed),
            creations_rejected: self.creations_rejected.load(Ordering::Relaxed),
            actions_performed: self.actions_performed.load(Ordering::Relaxed),
            decay_ticks: self.decay_ticks.load(Ordering::Relaxed),
            run_aways: self.run_aways.load(Ordering::Relaxed),
            restarts: self.restarts.load(Ordering::Relaxed),
        }
    }
}

impl Default for SimCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot of counter values at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    /// Pets successfully created.
    pub pets_created: u64,
    /// Creation attempts rejected.
    pub creations_rejected: u64,
    /// Player actions applied.
    pub actions_performed: u64,
    /// Decay firings applied.
    pub decay_ticks: u64,
    /// Pets that ran away.
    pub run_aways: u64,
    /// Restarts performed.
    pub restarts: u64,
}

impl std::fmt::Display for CounterSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "created={} rejected={} actions={} decay_ticks={} run_aways={} restarts={}",
            self.pets_created,
            self.creations_rejected,
            self.actions_performed,
            self.decay_ticks,
            self.run_aways,
            self.restarts,
        )
    }
}
