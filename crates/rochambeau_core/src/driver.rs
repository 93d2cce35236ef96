//! Dedicated thread stepping an arena in batches.
//!
//! The driver owns the arena while it runs. Each batch is followed by a
//! check point, so views see fresh terrain once per batch, and then by a short
//! pause. Cancellation is only observed between batches: a cancelled driver
//! always finishes the batch it is in and hands back a consistent arena.

use crate::arena::Arena;
use crate::config::DriverConfig;
use crate::error::{ArenaError, Result};
use crate::metrics::Metrics;
use crate::random::RandomSource;
use crate::view::ArenaView;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Cooperative cancellation flag shared with a running driver.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Why a driver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    Cancelled,
    Absorbed,
    GenerationLimit,
}

/// What a finished driver hands back.
#[derive(Debug)]
pub struct DriverOutcome<R> {
    pub arena: Arena<R>,
    pub reason: StopReason,
    pub batches: u64,
}

#[derive(Debug, Clone, Copy)]
struct Pacing {
    batch_size: usize,
    pause: Duration,
    stop_on_absorption: bool,
    max_generations: Option<u64>,
}

impl Pacing {
    fn new(config: &DriverConfig, arena_size: usize) -> Self {
        Self {
            batch_size: config.batch_size_for(arena_size),
            pause: config.pause(),
            stop_on_absorption: config.stop_on_absorption,
            max_generations: config.max_generations,
        }
    }
}

pub struct Driver;

impl Driver {
    /// Moves an initialized `arena` onto a new thread and starts stepping it.
    pub fn spawn<R>(arena: Arena<R>, config: &DriverConfig) -> anyhow::Result<DriverHandle<R>>
    where
        R: RandomSource + Send + 'static,
    {
        Self::spawn_with_token(arena, config, StopToken::new())
    }

    /// Like [`spawn`](Self::spawn), observing an existing `token`.
    pub fn spawn_with_token<R>(
        arena: Arena<R>,
        config: &DriverConfig,
        token: StopToken,
    ) -> anyhow::Result<DriverHandle<R>>
    where
        R: RandomSource + Send + 'static,
    {
        if arena.terrain().is_err() {
            return Err(ArenaError::Uninitialized.into());
        }
        let pacing = Pacing::new(config, arena.arena_size());
        let view = arena.view();
        let metrics = Arc::new(Metrics::new());

        let thread_token = token.clone();
        let thread_metrics = Arc::clone(&metrics);
        let handle = thread::Builder::new()
            .name("arena-driver".to_string())
            .spawn(move || run(arena, pacing, &thread_token, &thread_metrics))?;

        tracing::info!(
            batch_size = pacing.batch_size,
            pause_ms = pacing.pause.as_millis() as u64,
            "Arena driver started"
        );
        Ok(DriverHandle {
            view,
            token,
            metrics,
            handle,
        })
    }
}

fn run<R: RandomSource>(
    mut arena: Arena<R>,
    pacing: Pacing,
    token: &StopToken,
    metrics: &Metrics,
) -> Result<DriverOutcome<R>> {
    let limit_reached = |arena: &Arena<R>| {
        pacing
            .max_generations
            .is_some_and(|limit| arena.generation() >= limit)
    };
    let mut batches = 0u64;
    let reason = loop {
        if token.is_cancelled() {
            break StopReason::Cancelled;
        }
        if limit_reached(&arena) {
            break StopReason::GenerationLimit;
        }
        let started = Instant::now();
        arena.advance_by(pacing.batch_size)?;
        let absorbed = arena.checkpoint()?;
        batches += 1;
        metrics.record_batch(
            started.elapsed(),
            pacing.batch_size as u64,
            arena.generation(),
        );

        if absorbed && pacing.stop_on_absorption {
            break StopReason::Absorbed;
        }
        if limit_reached(&arena) {
            break StopReason::GenerationLimit;
        }
        if !pacing.pause.is_zero() {
            thread::sleep(pacing.pause);
        }
    };

    tracing::info!(
        ?reason,
        batches,
        generation = arena.generation(),
        interactions = arena.interactions(),
        "Arena driver stopped"
    );
    Ok(DriverOutcome {
        arena,
        reason,
        batches,
    })
}

/// Control handle for a running driver.
pub struct DriverHandle<R> {
    view: ArenaView,
    token: StopToken,
    metrics: Arc<Metrics>,
    handle: JoinHandle<Result<DriverOutcome<R>>>,
}

impl<R> DriverHandle<R> {
    #[must_use]
    pub fn view(&self) -> &ArenaView {
        &self.view
    }

    #[must_use]
    pub fn stop_token(&self) -> StopToken {
        self.token.clone()
    }

    #[must_use]
    pub fn metrics(&self) -> Arc<Metrics> {
        Arc::clone(&self.metrics)
    }

    /// Asks the driver to stop after its current batch.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the driver to stop and takes the arena back.
    pub fn join(self) -> anyhow::Result<DriverOutcome<R>> {
        let outcome = self
            .handle
            .join()
            .map_err(|_| anyhow::anyhow!("Arena driver thread panicked"))??;
        Ok(outcome)
    }
}
