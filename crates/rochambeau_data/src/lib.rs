//! # Rochambeau Data
//!
//! Plain data types shared by the engine and the application: breed
//! identifiers, interaction outcomes, neighbor directions and census counts.

pub mod census;
pub mod direction;

pub use census::Census;
pub use direction::{Direction, Neighborhood};

use serde::{Deserialize, Serialize};

/// Identifier of a breed, always in `[0, num_breeds)` for the arena it lives in.
pub type Breed = u8;

/// Result of pitting two neighboring cells against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Same breed, or neither dominates the other.
    NoChange,
    /// The first cell is taken over by the second cell's breed.
    FirstConverts,
    /// The second cell is taken over by the first cell's breed.
    SecondConverts,
}

impl Outcome {
    #[must_use]
    pub fn is_conversion(self) -> bool {
        !matches!(self, Outcome::NoChange)
    }
}

/// Lifecycle phase of an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Uninitialized,
    Running,
    /// A single breed holds every cell.
    Absorbed,
}
