//! # Rochambeau Core
//!
//! Simulation engine for cyclic-dominance competition ("generalized
//! rock-paper-scissors") among breeds on a square toroidal grid.
//!
//! This crate contains:
//! - The dominance rule deciding which of two breeds converts the other
//! - The terrain grid and its wraparound neighborhood
//! - Pluggable random sources (seeded ChaCha for reproducible runs)
//! - The arena stepping algorithm with generation and absorption bookkeeping
//! - Lock-light snapshot publication for concurrent readers
//! - A dedicated stepping thread with cooperative cancellation
//!
//! ## Example
//!
//! ```
//! use rochambeau_core::builder::ArenaBuilder;
//!
//! let mut arena = ArenaBuilder::new()
//!     .num_breeds(3)
//!     .arena_size(20)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! arena.init();
//!
//! let view = arena.view();
//! arena.advance_by(4_000).unwrap();
//! arena.checkpoint().unwrap();
//!
//! let (snapshot, interactions) = view.snapshot().unwrap();
//! assert_eq!(interactions, 4_000);
//! assert!(snapshot.cells().iter().all(|&b| b < 3));
//! ```

/// Arena state and the stepping algorithm
pub mod arena;
/// Parameter validation and arena construction
pub mod builder;
/// Configuration file structures
pub mod config;
/// Cyclic dominance rule
pub mod dominance;
/// Background stepping thread
pub mod driver;
/// Error types
pub mod error;
/// Throughput counters and logging setup
pub mod metrics;
/// Random source abstraction
pub mod random;
/// Toroidal breed grid
pub mod terrain;
/// Thread-safe read access to a running arena
pub mod view;

pub use arena::Arena;
pub use builder::ArenaBuilder;
pub use dominance::DominanceRule;
pub use driver::{Driver, DriverHandle, DriverOutcome, StopReason, StopToken};
pub use error::ArenaError;
pub use metrics::{init_logging, Metrics};
pub use random::RandomSource;
pub use rochambeau_data::{Breed, Census, Direction, Neighborhood, Outcome, Phase};
pub use terrain::TerrainGrid;
pub use view::ArenaView;
