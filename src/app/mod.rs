//! Headless application: drives an arena to completion while sampling it.

pub mod report;
pub mod shutdown;

pub use report::RunReport;
pub use shutdown::ShutdownManager;

use anyhow::{Context, Result};
use rochambeau_core::config::AppConfig;
use rochambeau_core::{ArenaBuilder, ArenaView, Driver, TerrainGrid};
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

pub const DEFAULT_CONFIG_PATH: &str = "rochambeau.toml";

pub struct App {
    pub config: AppConfig,
    shutdown: ShutdownManager,
}

impl App {
    /// Reads `path`, falling back to defaults when it is missing or invalid.
    /// A missing file is created with the default configuration. Runs before
    /// logging is set up, so problems go to stderr.
    pub fn load_config(path: &Path) -> AppConfig {
        match std::fs::read_to_string(path) {
            Ok(content) => match AppConfig::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("Warning: Failed to load {}: {}", path.display(), e);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let default = AppConfig::default();
                if let Ok(toml_str) = toml::to_string(&default) {
                    if let Err(e) = std::fs::write(path, toml_str) {
                        eprintln!("Warning: Failed to write {}: {}", path.display(), e);
                    }
                }
                return default;
            }
            Err(e) => {
                eprintln!("Warning: Failed to read {}: {}", path.display(), e);
            }
        }
        AppConfig::default()
    }

    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate().context("invalid configuration")?;
        Ok(Self {
            config,
            shutdown: ShutdownManager::new(),
        })
    }

    pub fn shutdown(&self) -> &ShutdownManager {
        &self.shutdown
    }

    /// Builds a fresh arena, steps it on a driver thread until it stops, and
    /// reports the result. Ctrl-C requests a graceful stop.
    pub async fn run(&self) -> Result<RunReport> {
        let started = Instant::now();
        let fingerprint = self.config.fingerprint();
        let mut arena = ArenaBuilder::from_config(&self.config.arena).build()?;
        arena.init();
        tracing::info!(
            fingerprint = %fingerprint,
            seed = ?self.config.arena.seed,
            "Starting run"
        );

        let handle =
            Driver::spawn_with_token(arena, &self.config.driver, self.shutdown.token())?;
        let view = handle.view().clone();
        let metrics = handle.metrics();
        let mut buffer = view.new_buffer();
        let mut finished = tokio::task::spawn_blocking(move || handle.join());

        let mut ticker =
            tokio::time::interval(Duration::from_millis(self.config.status_interval_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let outcome = loop {
            tokio::select! {
                joined = &mut finished => break joined??,
                _ = &mut ctrl_c, if !self.shutdown.is_shutdown_requested() => {
                    self.shutdown.request_shutdown();
                }
                _ = ticker.tick() => {
                    log_status(&view, &mut buffer);
                }
            }
        };
        let report = RunReport::new(
            &outcome.arena,
            outcome.reason,
            outcome.batches,
            self.config.arena.seed,
            fingerprint,
            &metrics,
            started.elapsed(),
        );
        tracing::info!(
            reason = ?report.reason,
            generation = report.generation,
            winner = ?report.winner,
            "Run finished"
        );
        Ok(report)
    }
}

fn log_status(view: &ArenaView, buffer: &mut TerrainGrid) {
    match view.snapshot_into(buffer) {
        Ok(interactions) => {
            let census = buffer.census(view.num_breeds() as usize);
            let (leader, count) = census.leader().unwrap_or_default();
            tracing::info!(
                generation = interactions / (view.arena_size() * view.arena_size()) as u64,
                survivors = census.survivors(),
                leader,
                leader_share = census.share(leader),
                leader_cells = count,
                "Arena status"
            );
        }
        Err(e) => tracing::warn!(error = %e, "Snapshot failed"),
    }
}
