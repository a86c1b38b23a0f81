//! Player actions and their stat effects.
//!
//! | Action | Energy | Fullness | Happiness |
//! |--------|--------|----------|-----------|
//! | Nap    | +40    | −10      | −10       |
//! | Play   | −10    | −10      | +30       |
//! | Eat    | −15    | +30      | +5        |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::StatDelta;

/// Something the player can do with a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Take a nap together. Restores energy.
    Nap,
    /// Play together. Raises happiness.
    Play,
    /// Feed the pet. Raises fullness.
    Eat,
}

impl Action {
    /// Every action, in button order.
    pub const ALL: [Self; 3] = [Self::Nap, Self::Play, Self::Eat];

    /// Stat change applied by this action, before clamping.
    #[must_use]
    pub const fn delta(self) -> StatDelta {
        match self {
            Self::Nap => StatDelta {
                energy: 40,
                fullness: -10,
                happiness: -10,
            },
            Self::Play => StatDelta {
                energy: -10,
                fullness: -10,
                happiness: 30,
            },
            Self::Eat => StatDelta {
                energy: -15,
                fullness: 30,
                happiness: 5,
            },
        }
    }

    /// History line describing this action done with `pet_name`.
    #[must_use]
    pub fn describe(self, pet_name: &str) -> String {
        match self {
            Self::Nap => format!("You took a nap with {pet_name}."),
            Self::Play => format!("You played with {pet_name}."),
            Self::Eat => format!("You fed {pet_name}."),
        }
    }

    /// Lowercase verb for this action.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nap => "nap",
            Self::Play => "play",
            Self::Eat => "eat",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown action: {wanted:?}"))
    }
}
