#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Periodic spawn trigger for destructible enemy spawners.

use std::time::Duration;

use arena_core::{LifePoints, Millis};

/// Time a spawner waits between two spawn requests.
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(3_000);

/// Life points every spawner starts with.
pub const SPAWNER_LIFE_POINTS: u32 = 100;

/// Outcome of ticking a spawner once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpawnerUpdate {
    /// Nothing to do this tick.
    Keep,
    /// The spawner ran out of life and must be removed by its owner.
    Destroyed,
    /// The owner should materialize one enemy next to the spawner.
    SpawnRequested,
}

/// Life and spawn timer of an enemy spawner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnerState {
    life: LifePoints,
    last_spawn: Option<Millis>,
    spawn_interval: Duration,
}

impl SpawnerState {
    /// Creates a spawner at full life that requests a spawn on its first
    /// update.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            life: LifePoints::full(SPAWNER_LIFE_POINTS),
            last_spawn: None,
            spawn_interval: SPAWN_INTERVAL,
        }
    }

    /// Current life pool.
    #[must_use]
    pub const fn life(&self) -> LifePoints {
        self.life
    }

    /// Adds `delta` life points, clamped to `[0, maximum]`.
    pub fn modify_life(&mut self, delta: i32) {
        self.life.modify(delta);
    }

    /// Whether the spawner has no life left.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.life.is_dead()
    }

    /// Timestamp of the last spawn request.
    #[must_use]
    pub const fn last_spawn(&self) -> Option<Millis> {
        self.last_spawn
    }

    /// Advances the spawner to `now`.
    ///
    /// Destruction wins over a due spawn. The caller must not update the
    /// spawner again before it has acted on a [`SpawnerUpdate::SpawnRequested`].
    pub fn update(&mut self, now: Millis) -> SpawnerUpdate {
        if self.life.is_dead() {
            tracing::debug!(now = now.get(), "spawner destroyed");
            return SpawnerUpdate::Destroyed;
        }

        let due = self
            .last_spawn
            .map_or(true, |last| now.saturating_since(last) >= self.spawn_interval);
        if !due {
            return SpawnerUpdate::Keep;
        }

        self.last_spawn = Some(now);
        tracing::trace!(now = now.get(), "spawn requested");
        SpawnerUpdate::SpawnRequested
    }
}

impl Default for SpawnerState {
    fn default() -> Self {
        Self::new()
    }
}
