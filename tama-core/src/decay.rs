//! Passive decay scheduling.
//!
//! Every live pet owns one decay task. A task fires once per period; after a
//! firing the owner either reschedules it (exactly one period after the due
//! time, not after "now") or retires it. Nothing reschedules implicitly, so a
//! task whose pet is gone simply stops.
//!
//! Tasks live in a min-heap ordered by due time, FIFO among equal due times.
//! Cancellation is lazy: the task is dropped from the live set and its heap
//! entry is discarded when it reaches the top.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::time::Duration;

use crate::types::{PetId, SimTime};

/// Identifier of one scheduled decay task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decay-{}", self.0)
    }
}

/// Exclusive reference to a pet's decay task.
///
/// Not `Clone`: exactly one owner can cancel it.
#[derive(Debug, PartialEq, Eq)]
pub struct DecayHandle {
    task: TaskId,
    pet: PetId,
}

impl DecayHandle {
    /// The scheduled task.
    #[must_use]
    pub fn task(&self) -> TaskId {
        self.task
    }

    /// The pet this task decays.
    #[must_use]
    pub fn pet(&self) -> PetId {
        self.pet
    }
}

/// A task that has come due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Firing {
    /// The task that fired.
    pub task: TaskId,
    /// The pet it decays.
    pub pet: PetId,
    /// When it was due (not when it was observed).
    pub due: SimTime,
}

#[derive(Debug)]
struct Scheduled {
    due: SimTime,
    seq: u64,
    task: TaskId,
    pet: PetId,
}

// BinaryHeap is a max-heap; invert so the earliest due time pops first.
impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Cancellable, self-rescheduling decay timers keyed by pet.
#[derive(Debug)]
pub struct DecayScheduler {
    period: Duration,
    heap: BinaryHeap<Scheduled>,
    live: HashMap<TaskId, PetId>,
    next_task: u64,
    next_seq: u64,
}

impl DecayScheduler {
    /// Create a scheduler whose tasks fire every `period`.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            next_task: 0,
            next_seq: 0,
        }
    }

    /// Time between firings.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of live (not cancelled, not retired) tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no tasks are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Start a decay task for `pet`; it first fires one period after `now`.
    pub fn schedule(&mut self, pet: PetId, now: SimTime) -> DecayHandle {
        let task = TaskId(self.next_task);
        self.next_task += 1;
        self.live.insert(task, pet);
        self.push(task, pet, now + self.period);
        DecayHandle { task, pet }
    }

    /// Cancel a task. Returns `false` if it had already been cancelled or retired.
    pub fn cancel(&mut self, handle: DecayHandle) -> bool {
        self.live.remove(&handle.task).is_some()
    }

    /// Cancel every task.
    pub fn cancel_all(&mut self) {
        self.live.clear();
        self.heap.clear();
    }

    /// Pop the earliest task due at or before `now`.
    ///
    /// The task stays live until it is rescheduled, retired, or cancelled.
    pub fn pop_due(&mut self, now: SimTime) -> Option<Firing> {
        self.prune();
        if self.heap.peek().is_some_and(|top| top.due <= now) {
            let entry = self.heap.pop()?;
            return Some(Firing {
                task: entry.task,
                pet: entry.pet,
                due: entry.due,
            });
        }
        None
    }

    /// Queue the next firing one period after `firing.due`.
    ///
    /// Returns `false` (and does nothing) if the task was cancelled meanwhile.
    pub fn reschedule(&mut self, firing: Firing) -> bool {
        if !self.live.contains_key(&firing.task) {
            return false;
        }
        self.push(firing.task, firing.pet, firing.due + self.period);
        true
    }

    /// Stop a task that fired for a pet that no longer exists.
    pub fn retire(&mut self, firing: Firing) {
        self.live.remove(&firing.task);
    }

    /// Earliest pending due time among live tasks.
    pub fn next_deadline(&mut self) -> Option<SimTime> {
        self.prune();
        self.heap.peek().map(|top| top.due)
    }

    fn push(&mut self, task: TaskId, pet: PetId, due: SimTime) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled { due, seq, task, pet });
    }

    fn prune(&mut self) {
        while self
            .heap
            .peek()
            .is_some_and(|top| !self.live.contains_key(&top.task))
        {
            self.heap.pop();
        }
    }
}
