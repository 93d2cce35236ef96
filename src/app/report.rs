use rochambeau_core::{Arena, Breed, Census, Metrics, Neighborhood, StopReason};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Summary of a finished run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunReport {
    pub num_breeds: u8,
    pub arena_size: usize,
    pub neighborhood: Neighborhood,
    pub seed: Option<u64>,
    pub fingerprint: String,
    pub reason: StopReason,
    pub generation: u64,
    pub interactions: u64,
    pub conversions: u64,
    pub absorbed: bool,
    pub winner: Option<Breed>,
    pub census: Census,
    pub batches: u64,
    pub elapsed_ms: u64,
    pub interactions_per_sec: f64,
}

impl RunReport {
    pub fn new<R>(
        arena: &Arena<R>,
        reason: StopReason,
        batches: u64,
        seed: Option<u64>,
        fingerprint: String,
        metrics: &Metrics,
        elapsed: Duration,
    ) -> Self {
        Self {
            num_breeds: arena.num_breeds(),
            arena_size: arena.arena_size(),
            neighborhood: arena.neighborhood(),
            seed,
            fingerprint,
            reason,
            generation: arena.generation(),
            interactions: arena.interactions(),
            conversions: arena.conversions(),
            absorbed: arena.is_absorbed(),
            winner: arena.winner(),
            census: arena.census().clone(),
            batches,
            elapsed_ms: elapsed.as_millis() as u64,
            interactions_per_sec: metrics.interactions_per_second(),
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} breeds on a {}x{} arena ({:?})",
            self.num_breeds, self.arena_size, self.arena_size, self.neighborhood
        )?;
        writeln!(f, "stopped:      {:?}", self.reason)?;
        writeln!(f, "generation:   {}", self.generation)?;
        writeln!(
            f,
            "interactions: {} ({} conversions)",
            self.interactions, self.conversions
        )?;
        match self.winner {
            Some(breed) => writeln!(f, "winner:       breed {breed}")?,
            None => writeln!(f, "winner:       none ({} breeds left)", self.census.survivors())?,
        }
        for (breed, count) in self.census.counts().iter().enumerate() {
            writeln!(
                f,
                "  breed {breed:>3}: {count:>8} ({:5.1}%)",
                self.census.share(breed as Breed) * 100.0
            )?;
        }
        write!(
            f,
            "elapsed:      {} ms, {:.0} interactions/s",
            self.elapsed_ms, self.interactions_per_sec
        )
    }
}
