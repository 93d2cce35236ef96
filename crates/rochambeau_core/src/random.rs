//! Sources of randomness driving the arena.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rochambeau_data::{Breed, Direction, Neighborhood};

/// Supplies the random choices made by an arena.
///
/// Implemented for the `rand` generators the engine ships with; tests can
/// implement it directly to script exact cell and direction choices.
pub trait RandomSource {
    /// Uniform cell in an `arena_size × arena_size` grid.
    fn next_cell(&mut self, arena_size: usize) -> (usize, usize);

    /// Uniform direction among those of `neighborhood`.
    fn next_direction(&mut self, neighborhood: Neighborhood) -> Direction;

    /// Uniform breed in `[0, num_breeds)`.
    fn next_breed(&mut self, num_breeds: u8) -> Breed;
}

macro_rules! impl_random_source {
    ($($rng:ty),* $(,)?) => {
        $(
            impl RandomSource for $rng {
                #[inline]
                fn next_cell(&mut self, arena_size: usize) -> (usize, usize) {
                    (self.gen_range(0..arena_size), self.gen_range(0..arena_size))
                }

                #[inline]
                fn next_direction(&mut self, neighborhood: Neighborhood) -> Direction {
                    let dirs = neighborhood.directions();
                    dirs[self.gen_range(0..dirs.len())]
                }

                #[inline]
                fn next_breed(&mut self, num_breeds: u8) -> Breed {
                    self.gen_range(0..num_breeds)
                }
            }
        )*
    };
}

impl_random_source!(ChaCha8Rng, StdRng);

/// Deterministic generator for reproducible runs.
#[must_use]
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generator seeded from OS entropy.
#[must_use]
pub fn from_entropy() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}
