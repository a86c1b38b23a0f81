//! Core type definitions for the pet simulation.
//!
//! Identity, species, the three-stat block, and simulation time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use std::time::Duration;

use crate::error::PetError;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Unique identifier for a pet, issued by the [`PetCollection`](crate::PetCollection).
///
/// Ids are never reused within one collection, including across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PetId(pub u64);

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The species a pet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    /// A dog.
    Dog,
    /// A cat.
    Cat,
    /// A rabbit.
    Rabbit,
    /// A chicken.
    Chicken,
}

impl AnimalType {
    /// Every species, in menu order.
    pub const ALL: [Self; 4] = [Self::Dog, Self::Cat, Self::Rabbit, Self::Chicken];

    /// Lowercase name of the species.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Rabbit => "rabbit",
            Self::Chicken => "chicken",
        }
    }
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimalType {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|animal| animal.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PetError::UnknownAnimal(wanted.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Lowest value a stat can hold. A pet with any stat here runs away.
pub const STAT_MIN: u8 = 0;
/// Highest value a stat can hold.
pub const STAT_MAX: u8 = 100;

/// The three decaying stats of a pet. Each is always within
/// [`STAT_MIN`]..=[`STAT_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    /// Tired (0) to rested (100).
    pub energy: u8,
    /// Starving (0) to stuffed (100).
    pub fullness: u8,
    /// Bored (0) to delighted (100).
    pub happiness: u8,
}

impl Stats {
    /// All three stats at the same value, clamped into range.
    #[must_use]
    pub fn uniform(value: u8) -> Self {
        let value = value.min(STAT_MAX);
        Self {
            energy: value,
            fullness: value,
            happiness: value,
        }
    }

    /// Apply a signed change to every stat and clamp the result.
    ///
    /// The arithmetic happens in a wider type, so an out-of-range value is
    /// never stored.
    #[must_use]
    pub fn apply(self, delta: StatDelta) -> Self {
        Self {
            energy: clamp_stat(i16::from(self.energy) + delta.energy),
            fullness: clamp_stat(i16::from(self.fullness) + delta.fullness),
            happiness: clamp_stat(i16::from(self.happiness) + delta.happiness),
        }
    }

    /// Whether any stat has bottomed out.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.energy == STAT_MIN || self.fullness == STAT_MIN || self.happiness == STAT_MIN
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::uniform(50)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Energy: {}, Fullness: {}, Happiness: {}",
            self.energy, self.fullness, self.happiness
        )
    }
}

/// A signed change to each of the three stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatDelta {
    /// Change applied to energy.
    pub energy: i16,
    /// Change applied to fullness.
    pub fullness: i16,
    /// Change applied to happiness.
    pub happiness: i16,
}

impl StatDelta {
    /// The same change to every stat.
    #[must_use]
    pub const fn uniform(amount: i16) -> Self {
        Self {
            energy: amount,
            fullness: amount,
            happiness: amount,
        }
    }
}

fn clamp_stat(value: i16) -> u8 {
    let clamped = value.clamp(i16::from(STAT_MIN), i16::from(STAT_MAX));
    u8::try_from(clamped).unwrap_or(STAT_MAX)
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// Simulation time in milliseconds since the engine epoch.
///
/// The core never reads a clock; callers pass `SimTime` in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct SimTime(pub u64);

impl SimTime {
    /// The engine epoch.
    pub const ZERO: Self = Self(0);

    /// Time point `elapsed` after the epoch, saturating at `u64::MAX` millis.
    #[must_use]
    pub fn from_elapsed(elapsed: Duration) -> Self {
        Self(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
    }

    /// Offset of this time point from the epoch.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Add<Duration> for SimTime {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        let millis = u64::try_from(rhs.as_millis()).unwrap_or(u64::MAX);
        Self(self.0.saturating_add(millis))
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_clamps_at_both_ends() {
        let stats = Stats {
            energy: 95,
            fullness: 5,
            happiness: 50,
        };
        let next = stats.apply(StatDelta {
            energy: 40,
            fullness: -10,
            happiness: 0,
        });
        assert_eq!(next.energy, 100);
        assert_eq!(next.fullness, 0);
        assert_eq!(next.happiness, 50);
    }

    #[test]
    fn depleted_only_at_the_floor() {
        assert!(!Stats::uniform(100).is_depleted());
        assert!(!Stats::uniform(1).is_depleted());
        let one_empty = Stats {
            energy: 40,
            fullness: 0,
            happiness: 90,
        };
        assert!(one_empty.is_depleted());
    }

    #[test]
    fn uniform_caps_initial_value() {
        assert_eq!(Stats::uniform(250), Stats::uniform(100));
    }

    #[test]
    fn animal_parses_case_insensitively() {
        assert_eq!("Dog".parse::<AnimalType>().ok(), Some(AnimalType::Dog));
        assert_eq!(" chicken ".parse::<AnimalType>().ok(), Some(AnimalType::Chicken));
        assert!(matches!(
            "dragon".parse::<AnimalType>(),
            Err(PetError::UnknownAnimal(name)) if name == "dragon"
        ));
    }

    #[test]
    fn sim_time_adds_durations() {
        let t = SimTime(1_500) + Duration::from_secs(10);
        assert_eq!(t, SimTime(11_500));
        assert_eq!(SimTime::from_elapsed(Duration::from_millis(42)), SimTime(42));
    }
}
