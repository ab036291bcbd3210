//! Two-die rolls and their metadata.
//!
//! Every check in the engine rides on a single 2d6 roll. Snake eyes and
//! boxcars are flagged as criticals, and doubles are recorded, but neither
//! changes the success arithmetic; they are descriptive metadata for the
//! narrative layer.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// A critical roll: the extreme ends of 2d6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Critical {
    /// Boxcars, a natural 12.
    Success,
    /// Snake eyes, a natural 2.
    Failure,
}

/// The result of rolling two six-sided dice.
///
/// Both dice are clamped into `[1, 6]` on construction, so a roll built
/// with [`DiceRoll::new`] for a scripted outcome is always a roll that
/// could have happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    first: u32,
    second: u32,
}

impl DiceRoll {
    /// Build a roll from explicit die values, each clamped into `[1, 6]`.
    pub fn new(first: u32, second: u32) -> Self {
        Self {
            first: first.clamp(1, 6),
            second: second.clamp(1, 6),
        }
    }

    /// Roll two dice with the given RNG.
    pub fn roll(rng: &mut StdRng) -> Self {
        Self {
            first: rng.random_range(1..=6),
            second: rng.random_range(1..=6),
        }
    }

    /// The first die's value.
    pub fn first(&self) -> u32 {
        self.first
    }

    /// The second die's value.
    pub fn second(&self) -> u32 {
        self.second
    }

    /// Sum of both dice, always in `[2, 12]`.
    pub fn total(&self) -> u32 {
        self.first + self.second
    }

    /// Whether both dice show the same value.
    pub fn is_doubles(&self) -> bool {
        self.first == self.second
    }

    /// The critical flag for this roll, if it is one.
    pub fn critical(&self) -> Option<Critical> {
        match self.total() {
            2 => Some(Critical::Failure),
            12 => Some(Critical::Success),
            _ => None,
        }
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}] = {}", self.first, self.second, self.total())
    }
}
