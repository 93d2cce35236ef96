//! Configuration management for arena runs.
//!
//! Strongly-typed structures mapping to `rochambeau.toml`. Every field has a
//! default, so a file only needs to name what it changes.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `rochambeau.toml` (overrides defaults)
//! 3. Command-line flags (override both)
//!
//! ## Example `rochambeau.toml`
//!
//! ```toml
//! log_level = "info"
//! status_interval_ms = 500
//!
//! [arena]
//! num_breeds = 5
//! arena_size = 200
//! neighborhood = "moore"
//! seed = 42
//!
//! [driver]
//! pause_ms = 0
//! max_generations = 10000
//! ```

use crate::builder::{DEFAULT_ARENA_SIZE, DEFAULT_NUM_BREEDS, MAX_ARENA_SIZE, MAX_BREEDS};
use rochambeau_data::Neighborhood;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters fixed for the lifetime of an arena.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ArenaConfig {
    pub num_breeds: usize,
    pub arena_size: usize,
    pub neighborhood: Neighborhood,
    /// Narrower dominance band; `None` means half the breed cycle.
    pub dominance_radius: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            num_breeds: DEFAULT_NUM_BREEDS,
            arena_size: DEFAULT_ARENA_SIZE,
            neighborhood: Neighborhood::VonNeumann,
            dominance_radius: None,
            seed: None,
        }
    }
}

/// Pacing of the stepping thread.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DriverConfig {
    /// Interactions per batch; defaults to a twentieth of the grid area.
    pub batch_size: Option<usize>,
    /// Sleep between batches.
    pub pause_ms: u64,
    pub stop_on_absorption: bool,
    pub max_generations: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            batch_size: None,
            pause_ms: 2,
            stop_on_absorption: true,
            max_generations: None,
        }
    }
}

impl DriverConfig {
    #[must_use]
    pub fn batch_size_for(&self, arena_size: usize) -> usize {
        self.batch_size
            .unwrap_or(arena_size * arena_size / 20)
            .max(1)
    }

    #[must_use]
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// How often the application samples and logs the arena.
    pub status_interval_ms: u64,
    /// Default tracing filter; `RUST_LOG` takes precedence.
    pub log_level: String,
    pub arena: ArenaConfig,
    pub driver: DriverConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            status_interval_ms: 1000,
            log_level: "info".to_string(),
            arena: ArenaConfig::default(),
            driver: DriverConfig::default(),
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.arena.num_breeds >= 2,
            "Number of breeds must be at least 2"
        );
        anyhow::ensure!(
            self.arena.num_breeds <= MAX_BREEDS,
            "Number of breeds too large (max {MAX_BREEDS})"
        );
        anyhow::ensure!(self.arena.arena_size > 0, "Arena size must be positive");
        anyhow::ensure!(
            self.arena.arena_size <= MAX_ARENA_SIZE,
            "Arena size too large (max {MAX_ARENA_SIZE})"
        );
        if let Some(radius) = self.arena.dominance_radius {
            anyhow::ensure!(
                radius >= 1 && radius <= self.arena.num_breeds / 2,
                "Dominance radius must be in [1, {}]",
                self.arena.num_breeds / 2
            );
        }

        anyhow::ensure!(
            self.driver.batch_size != Some(0),
            "Batch size must be positive"
        );
        anyhow::ensure!(
            self.driver.pause_ms <= 10_000,
            "Pause between batches too long (max 10000 ms)"
        );

        anyhow::ensure!(
            self.status_interval_ms > 0,
            "Status interval must be positive"
        );
        anyhow::ensure!(
            tracing_subscriber::EnvFilter::try_new(&self.log_level).is_ok(),
            "Invalid log level '{}'",
            self.log_level
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hash of everything that affects simulation results.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.arena).as_bytes());
        hasher.update(format!("{:?}", self.driver).as_bytes());
        hex::encode(hasher.finalize())
    }
}
