//! Read-only access to an arena from other threads.
//!
//! The stepping thread owns the working terrain. At every check point it
//! copies that terrain into a spare buffer and swaps it in as the published
//! snapshot; readers clone the published `Arc` and copy out of it without
//! holding any lock. A view therefore always sees the terrain exactly as it
//! was at the last check point, at most one batch behind the stepping thread.

use crate::error::{ArenaError, Result};
use crate::terrain::TerrainGrid;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
struct Published {
    terrain: Option<Arc<TerrainGrid>>,
    interactions: u64,
}

/// State shared between an arena and its views.
#[derive(Debug)]
pub(crate) struct Shared {
    num_breeds: u8,
    arena_size: usize,
    published: RwLock<Published>,
    interactions: AtomicU64,
    absorbed: AtomicBool,
}

impl Shared {
    pub(crate) fn new(num_breeds: u8, arena_size: usize) -> Self {
        Self {
            num_breeds,
            arena_size,
            published: RwLock::new(Published::default()),
            interactions: AtomicU64::new(0),
            absorbed: AtomicBool::new(false),
        }
    }

    /// Installs `terrain` as the current snapshot and returns the one it replaces.
    ///
    /// The counters are stored while the write lock is held, so a reader that
    /// observes them never snapshots an older terrain.
    pub(crate) fn publish(
        &self,
        terrain: Arc<TerrainGrid>,
        interactions: u64,
        absorbed: bool,
    ) -> Option<Arc<TerrainGrid>> {
        let mut slot = self
            .published
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        slot.interactions = interactions;
        let previous = slot.terrain.replace(terrain);
        self.interactions.store(interactions, Ordering::Release);
        self.absorbed.store(absorbed, Ordering::Release);
        previous
    }

    fn latest(&self) -> (Option<Arc<TerrainGrid>>, u64) {
        let slot = self
            .published
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        (slot.terrain.clone(), slot.interactions)
    }
}

/// Cloneable, thread-safe window onto an [`Arena`](crate::arena::Arena).
#[derive(Debug, Clone)]
pub struct ArenaView {
    shared: Arc<Shared>,
}

impl ArenaView {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    #[must_use]
    pub fn num_breeds(&self) -> u8 {
        self.shared.num_breeds
    }

    #[must_use]
    pub fn arena_size(&self) -> usize {
        self.shared.arena_size
    }

    /// Interactions reflected by the latest published snapshot.
    #[must_use]
    pub fn interactions(&self) -> u64 {
        self.shared.interactions.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        let area = (self.shared.arena_size * self.shared.arena_size) as u64;
        self.interactions() / area
    }

    /// Whether the latest published snapshot is a single breed.
    #[must_use]
    pub fn is_absorbed(&self) -> bool {
        self.shared.absorbed.load(Ordering::Acquire)
    }

    /// Whether a snapshot has been published, i.e. the arena was initialized.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.shared.latest().0.is_some()
    }

    /// Buffer with the dimensions [`snapshot_into`](Self::snapshot_into) expects.
    #[must_use]
    pub fn new_buffer(&self) -> TerrainGrid {
        TerrainGrid::new(self.shared.arena_size)
    }

    /// Copies the latest published terrain into `buffer`.
    ///
    /// Returns the interaction count the copy reflects.
    pub fn snapshot_into(&self, buffer: &mut TerrainGrid) -> Result<u64> {
        let (terrain, interactions) = self.shared.latest();
        let terrain = terrain.ok_or(ArenaError::Uninitialized)?;
        terrain.snapshot_into(buffer)?;
        Ok(interactions)
    }

    /// Allocating variant of [`snapshot_into`](Self::snapshot_into).
    pub fn snapshot(&self) -> Result<(TerrainGrid, u64)> {
        let mut buffer = self.new_buffer();
        let interactions = self.snapshot_into(&mut buffer)?;
        Ok((buffer, interactions))
    }
}
