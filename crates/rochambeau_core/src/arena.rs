//! The arena: terrain, dominance rule and random source stepped together.

use crate::dominance::DominanceRule;
use crate::error::{ArenaError, Result};
use crate::random::RandomSource;
use crate::terrain::TerrainGrid;
use crate::view::{ArenaView, Shared};
use rand_chacha::ChaCha8Rng;
use rochambeau_data::{Breed, Census, Neighborhood, Outcome, Phase};
use std::sync::Arc;

/// A square field of competing breeds.
///
/// Built through [`ArenaBuilder`](crate::builder::ArenaBuilder). The arena is
/// stepped by whoever owns it; other threads observe it through
/// [`ArenaView`]s, which only ever see terrain published at a
/// [`checkpoint`](Arena::checkpoint).
#[derive(Debug)]
pub struct Arena<R = ChaCha8Rng> {
    num_breeds: u8,
    arena_size: usize,
    area: u64,
    neighborhood: Neighborhood,
    rule: DominanceRule,
    terrain: TerrainGrid,
    census: Census,
    rng: R,
    interactions: u64,
    conversions: u64,
    phase: Phase,
    spare: Option<Arc<TerrainGrid>>,
    shared: Arc<Shared>,
}

impl<R: RandomSource> Arena<R> {
    pub(crate) fn new(
        num_breeds: u8,
        arena_size: usize,
        neighborhood: Neighborhood,
        rule: DominanceRule,
        rng: R,
    ) -> Self {
        Self {
            num_breeds,
            arena_size,
            area: (arena_size * arena_size) as u64,
            neighborhood,
            rule,
            terrain: TerrainGrid::new(arena_size),
            census: Census::new(num_breeds as usize),
            rng,
            interactions: 0,
            conversions: 0,
            phase: Phase::Uninitialized,
            spare: None,
            shared: Arc::new(Shared::new(num_breeds, arena_size)),
        }
    }

    /// Gives every cell an independent uniform breed and resets all counters.
    pub fn init(&mut self) {
        let num_breeds = self.num_breeds;
        let rng = &mut self.rng;
        self.terrain.fill_with(|| rng.next_breed(num_breeds));
        self.census = self.terrain.census(num_breeds as usize);
        self.interactions = 0;
        self.conversions = 0;
        self.phase = if self.census.sole_survivor().is_some() {
            Phase::Absorbed
        } else {
            Phase::Running
        };
        self.publish();

        tracing::info!(
            num_breeds = self.num_breeds,
            arena_size = self.arena_size,
            survivors = self.census.survivors(),
            absorbed = self.is_absorbed(),
            "Arena initialized"
        );
    }

    /// Performs one interaction between a random cell and a random neighbor.
    pub fn advance(&mut self) -> Result<Outcome> {
        self.ensure_initialized()?;
        Ok(self.interact())
    }

    /// Performs `count` interactions.
    pub fn advance_by(&mut self, count: usize) -> Result<()> {
        self.ensure_initialized()?;
        for _ in 0..count {
            self.interact();
        }
        Ok(())
    }

    #[inline]
    fn interact(&mut self) -> Outcome {
        let (row, col) = self.rng.next_cell(self.arena_size);
        let direction = self.rng.next_direction(self.neighborhood);
        let (n_row, n_col) = self.terrain.neighbor(row, col, direction);
        let first = self.terrain.get(row, col);
        let second = self.terrain.get(n_row, n_col);

        let outcome = self.rule.outcome(first, second);
        match outcome {
            Outcome::NoChange => {}
            Outcome::FirstConverts => self.convert(row, col, first, second),
            Outcome::SecondConverts => self.convert(n_row, n_col, second, first),
        }
        self.interactions += 1;
        outcome
    }

    fn convert(&mut self, row: usize, col: usize, loser: Breed, winner: Breed) {
        self.terrain.set(row, col, winner);
        self.census.transfer(loser, winner);
        self.conversions += 1;
        if self.census.count(winner) == self.area {
            self.phase = Phase::Absorbed;
            tracing::info!(
                breed = winner,
                generation = self.generation(),
                interactions = self.interactions + 1,
                "Arena absorbed"
            );
        }
    }

    /// Publishes the current terrain to every [`ArenaView`] and reports
    /// whether the arena is absorbed.
    pub fn checkpoint(&mut self) -> Result<bool> {
        self.ensure_initialized()?;
        debug_assert_eq!(
            self.terrain.uniform_breed().is_some(),
            self.is_absorbed(),
            "incremental census diverged from terrain"
        );
        self.publish();
        Ok(self.is_absorbed())
    }

    fn publish(&mut self) {
        let mut next = self
            .spare
            .take()
            .unwrap_or_else(|| Arc::new(TerrainGrid::new(self.arena_size)));
        // Clones only if a reader still holds the old snapshot.
        if let Err(err) = self.terrain.snapshot_into(Arc::make_mut(&mut next)) {
            tracing::error!(%err, "Discarding snapshot buffer");
            next = Arc::new(self.terrain.clone());
        }
        self.spare = self
            .shared
            .publish(next, self.interactions, self.is_absorbed());
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.phase == Phase::Uninitialized {
            Err(ArenaError::Uninitialized)
        } else {
            Ok(())
        }
    }
}

impl<R> Arena<R> {
    #[must_use]
    pub fn num_breeds(&self) -> u8 {
        self.num_breeds
    }

    #[must_use]
    pub fn arena_size(&self) -> usize {
        self.arena_size
    }

    #[must_use]
    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    #[must_use]
    pub fn rule(&self) -> DominanceRule {
        self.rule
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_absorbed(&self) -> bool {
        self.phase == Phase::Absorbed
    }

    /// Elementary interactions since the last `init`.
    #[must_use]
    pub fn interactions(&self) -> u64 {
        self.interactions
    }

    /// Interactions that changed a cell.
    #[must_use]
    pub fn conversions(&self) -> u64 {
        self.conversions
    }

    /// Interactions normalized by grid area.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.interactions / self.area
    }

    #[must_use]
    pub fn census(&self) -> &Census {
        &self.census
    }

    /// The breed holding every cell once absorbed.
    #[must_use]
    pub fn winner(&self) -> Option<Breed> {
        if self.is_absorbed() {
            self.census.sole_survivor()
        } else {
            None
        }
    }

    pub fn terrain(&self) -> Result<&TerrainGrid> {
        if self.phase == Phase::Uninitialized {
            Err(ArenaError::Uninitialized)
        } else {
            Ok(&self.terrain)
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Breed> {
        self.terrain()?.try_get(row, col)
    }

    /// Copies the working terrain into `buffer`.
    ///
    /// Returns the interaction count the copy reflects.
    pub fn snapshot_into(&self, buffer: &mut TerrainGrid) -> Result<u64> {
        self.terrain()?.snapshot_into(buffer)?;
        Ok(self.interactions)
    }

    #[must_use]
    pub fn new_buffer(&self) -> TerrainGrid {
        TerrainGrid::new(self.arena_size)
    }

    #[must_use]
    pub fn view(&self) -> ArenaView {
        ArenaView::new(Arc::clone(&self.shared))
    }
}
