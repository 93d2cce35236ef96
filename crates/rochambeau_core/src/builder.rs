//! Validated construction of arenas.

use crate::arena::Arena;
use crate::config::ArenaConfig;
use crate::dominance::DominanceRule;
use crate::error::{ArenaError, Result};
use crate::random::{self, RandomSource};
use rand_chacha::ChaCha8Rng;
use rochambeau_data::Neighborhood;

pub const DEFAULT_NUM_BREEDS: usize = 3;
pub const DEFAULT_ARENA_SIZE: usize = 100;
pub const MIN_BREEDS: usize = 2;
pub const MAX_BREEDS: usize = u8::MAX as usize;
pub const MAX_ARENA_SIZE: usize = 4096;

/// Collects and validates arena parameters.
///
/// ```
/// use rochambeau_core::builder::ArenaBuilder;
///
/// let mut arena = ArenaBuilder::new()
///     .num_breeds(3)
///     .arena_size(50)
///     .seed(42)
///     .build()
///     .unwrap();
/// arena.init();
/// arena.advance_by(10_000).unwrap();
/// assert_eq!(arena.generation(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaBuilder {
    num_breeds: usize,
    arena_size: usize,
    neighborhood: Neighborhood,
    dominance_radius: Option<usize>,
    seed: Option<u64>,
}

impl Default for ArenaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ArenaBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            num_breeds: DEFAULT_NUM_BREEDS,
            arena_size: DEFAULT_ARENA_SIZE,
            neighborhood: Neighborhood::default(),
            dominance_radius: None,
            seed: None,
        }
    }

    #[must_use]
    pub fn from_config(config: &ArenaConfig) -> Self {
        Self {
            num_breeds: config.num_breeds,
            arena_size: config.arena_size,
            neighborhood: config.neighborhood,
            dominance_radius: config.dominance_radius,
            seed: config.seed,
        }
    }

    #[must_use]
    pub fn num_breeds(mut self, num_breeds: usize) -> Self {
        self.num_breeds = num_breeds;
        self
    }

    #[must_use]
    pub fn arena_size(mut self, arena_size: usize) -> Self {
        self.arena_size = arena_size;
        self
    }

    #[must_use]
    pub fn neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Restricts dominance to breeds at most `radius` steps away on the cycle.
    #[must_use]
    pub fn dominance_radius(mut self, radius: usize) -> Self {
        self.dominance_radius = Some(radius);
        self
    }

    /// Makes [`build`](Self::build) deterministic.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_BREEDS..=MAX_BREEDS).contains(&self.num_breeds) {
            return Err(ArenaError::BreedCount {
                actual: self.num_breeds,
                min: MIN_BREEDS,
                max: MAX_BREEDS,
            });
        }
        if !(1..=MAX_ARENA_SIZE).contains(&self.arena_size) {
            return Err(ArenaError::ArenaSize {
                actual: self.arena_size,
                max: MAX_ARENA_SIZE,
            });
        }
        if let Some(radius) = self.dominance_radius {
            let max = self.num_breeds / 2;
            if !(1..=max).contains(&radius) {
                return Err(ArenaError::DominanceRadius {
                    actual: radius,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Builds an uninitialized arena on a ChaCha generator, seeded from the
    /// configured seed or from OS entropy.
    pub fn build(self) -> Result<Arena<ChaCha8Rng>> {
        let rng = match self.seed {
            Some(seed) => random::seeded(seed),
            None => random::from_entropy(),
        };
        self.build_with(rng)
    }

    /// Builds an uninitialized arena drawing from `rng`. Any configured seed
    /// is ignored.
    pub fn build_with<R: RandomSource>(self, rng: R) -> Result<Arena<R>> {
        self.validate()?;
        // validate() bounds num_breeds to u8 and the radius to num_breeds / 2
        let num_breeds = self.num_breeds as u8;
        let rule = match self.dominance_radius {
            Some(radius) => DominanceRule::with_radius(num_breeds, radius as u8),
            None => DominanceRule::new(num_breeds),
        };
        tracing::debug!(
            num_breeds,
            arena_size = self.arena_size,
            neighborhood = ?self.neighborhood,
            radius = rule.radius(),
            seeded = self.seed.is_some(),
            "Building arena"
        );
        Ok(Arena::new(
            num_breeds,
            self.arena_size,
            self.neighborhood,
            rule,
            rng,
        ))
    }
}
