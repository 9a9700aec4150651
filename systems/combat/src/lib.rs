#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Combat state shared by every entity that fights: life accounting and
//! cooldown-gated projectile firing.

use std::time::Duration;

use arena_core::{
    AudioSink, Clock, Dimensions, Direction, LifePoints, Millis, PixelPoint, SoundId,
    SoundPlacement, TextureDimensions, VisualRef,
};

/// Pixels a projectile spawns inside its owner's leading edge.
///
/// Starting inside the owner keeps the projectile overlapping the footprint
/// for at least one tick, so an entity standing on top of another can still
/// hit it. This only holds while projectile speed stays below the
/// projectile's larger dimension.
pub const BULLET_INSET: i32 = 2;

/// Offsets from an owner's origin to the spawn point of its projectiles,
/// one per facing direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulletOffsets {
    up: PixelPoint,
    down: PixelPoint,
    left: PixelPoint,
    right: PixelPoint,
}

impl BulletOffsets {
    /// Computes the offsets for an owner firing projectiles of the given
    /// (facing up) dimensions.
    ///
    /// Owners are drawn square in every orientation, so only the owner width
    /// is used; it stands in for the height once the sprite is rotated.
    #[must_use]
    pub const fn compute(owner: Dimensions, projectile: Dimensions) -> Self {
        let centered = (owner.width() - projectile.width()) / 2;
        let far_edge = owner.width() - projectile.height() - BULLET_INSET;
        Self {
            up: PixelPoint::new(centered, BULLET_INSET),
            down: PixelPoint::new(centered, far_edge),
            left: PixelPoint::new(BULLET_INSET, centered),
            right: PixelPoint::new(far_edge, centered),
        }
    }

    /// Offset used when facing `direction`.
    #[must_use]
    pub const fn toward(&self, direction: Direction) -> PixelPoint {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

/// Tunables of a fighting entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatConfig {
    /// Life points the entity spawns with, which are also its maximum.
    pub max_life: u32,
    /// Minimum time between two successful shots.
    pub cooldown: Duration,
    /// Sound played whenever a shot is fired.
    pub firing_sound: SoundId,
}

/// Life, fire-rate and projectile placement of a fighting entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatState {
    life: LifePoints,
    cooldown: Duration,
    last_shot: Option<Millis>,
    offsets: BulletOffsets,
    firing_sound: SoundId,
}

impl CombatState {
    /// Creates a combat state at full life that may fire immediately.
    #[must_use]
    pub fn new(config: CombatConfig, owner: Dimensions, projectile: Dimensions) -> Self {
        Self {
            life: LifePoints::full(config.max_life),
            cooldown: config.cooldown,
            last_shot: None,
            offsets: BulletOffsets::compute(owner, projectile),
            firing_sound: config.firing_sound,
        }
    }

    /// Creates a combat state, reading both sprite sizes from `textures`.
    #[must_use]
    pub fn from_textures(
        config: CombatConfig,
        textures: &impl TextureDimensions,
        owner: VisualRef,
        projectile: VisualRef,
    ) -> Self {
        Self::new(
            config,
            textures.dimensions_of(owner),
            textures.dimensions_of(projectile),
        )
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

    /// Whether the entity can be healed.
    #[must_use]
    pub const fn is_wounded(&self) -> bool {
        self.life.is_wounded()
    }

    /// Whether the entity has no life left.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.life.is_dead()
    }

    /// Projectile spawn offsets computed at construction.
    #[must_use]
    pub const fn offsets(&self) -> &BulletOffsets {
        &self.offsets
    }

    /// Timestamp of the last successful shot.
    #[must_use]
    pub const fn last_shot(&self) -> Option<Millis> {
        self.last_shot
    }

    /// Fires through `factory` when the cooldown has elapsed.
    ///
    /// The factory receives the spawn point for the current facing. The shot
    /// timestamp is read after the factory returns so the time spent building
    /// the projectile counts toward the next cooldown. A denied shot has no
    /// side effects.
    pub fn attempt_shoot<P, F>(
        &mut self,
        clock: &(impl Clock + ?Sized),
        facing: Direction,
        origin: PixelPoint,
        factory: F,
        audio: &mut (impl AudioSink + ?Sized),
    ) -> Option<P>
    where
        F: FnOnce(PixelPoint) -> Option<P>,
    {
        let now = clock.now();
        if let Some(last_shot) = self.last_shot {
            if now.saturating_since(last_shot) < self.cooldown {
                return None;
            }
        }

        let offset = self.offsets.toward(facing);
        let projectile = factory(origin.offset(offset.x(), offset.y()));

        let fired_at = clock.now();
        self.last_shot = Some(fired_at);
        tracing::trace!(?facing, fired_at = fired_at.get(), "shot fired");
        audio.play(self.firing_sound, SoundPlacement::centered());

        projectile
    }
}
