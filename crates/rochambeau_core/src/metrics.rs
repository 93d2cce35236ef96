//! Throughput metrics for the stepping thread.
//!
//! Provides structured logging and counters for monitoring how fast an arena
//! is being driven.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Batches between periodic throughput log lines.
const LOG_EVERY_BATCHES: u64 = 1000;

/// Counters updated by the stepping thread and read by anyone.
#[derive(Debug)]
pub struct Metrics {
    batch_count: AtomicU64,
    interaction_count: AtomicU64,
    busy_nanos: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            batch_count: AtomicU64::new(0),
            interaction_count: AtomicU64::new(0),
            busy_nanos: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed batch of `interactions` that took `duration`.
    pub fn record_batch(&self, duration: Duration, interactions: u64, generation: u64) {
        let batches = self.batch_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.interaction_count
            .fetch_add(interactions, Ordering::Relaxed);
        self.busy_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);

        if batches.is_multiple_of(LOG_EVERY_BATCHES) {
            tracing::info!(
                batches,
                generation,
                interactions_per_sec = self.interactions_per_second() as u64,
                duration_us = duration.as_micros() as u64,
                "Arena batch"
            );
        }
    }

    #[must_use]
    pub fn batch_count(&self) -> u64 {
        self.batch_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn interaction_count(&self) -> u64 {
        self.interaction_count.load(Ordering::Relaxed)
    }

    /// Time spent stepping, excluding pauses between batches.
    #[must_use]
    pub fn busy_time(&self) -> Duration {
        Duration::from_nanos(self.busy_nanos.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Interactions per second of busy time.
    #[must_use]
    pub fn interactions_per_second(&self) -> f64 {
        let busy = self.busy_time().as_secs_f64();
        if busy > 0.0 {
            self.interaction_count() as f64 / busy
        } else {
            0.0
        }
    }
}

/// Installs a global `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to `default_level`. Later calls are no-ops.
pub fn init_logging(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
