//! Projectiles in flight.

use arena_core::{Dimensions, Direction, PixelPoint, PixelRect, SpriteRenderer};
use arena_system_movement::MovableBody;
use arena_world::LevelGrid;

use crate::kinds::{Faction, ProjectileKind};

/// Outcome of advancing a projectile by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileStep {
    /// The projectile travelled its full speed.
    Flying,
    /// A wall cut the move short; the projectile should be removed.
    HitWall,
}

/// A fired projectile travelling in a straight line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projectile {
    kind: ProjectileKind,
    body: MovableBody,
}

impl Projectile {
    /// Launches a projectile whose upper-left corner sits at `origin`.
    ///
    /// `upright` is the sprite size facing up; horizontal projectiles swap
    /// width and height.
    #[must_use]
    pub fn fire(
        kind: ProjectileKind,
        origin: PixelPoint,
        facing: Direction,
        upright: Dimensions,
    ) -> Self {
        let dimensions = if facing.is_vertical() {
            upright
        } else {
            upright.transposed()
        };
        Self {
            kind,
            body: MovableBody::facing_toward(
                PixelRect::from_origin(origin, dimensions),
                kind.speed(),
                facing,
            ),
        }
    }

    /// Kind of projectile.
    #[must_use]
    pub const fn kind(&self) -> ProjectileKind {
        self.kind
    }

    /// Bounding rectangle in level pixels.
    #[must_use]
    pub const fn rect(&self) -> PixelRect {
        self.body.rect()
    }

    /// Direction of travel.
    #[must_use]
    pub const fn facing(&self) -> Direction {
        self.body.facing()
    }

    /// Side that fired the projectile.
    #[must_use]
    pub const fn faction(&self) -> Faction {
        self.kind.faction()
    }

    /// Life points removed on impact.
    #[must_use]
    pub const fn damage(&self) -> i32 {
        self.kind.damage()
    }

    /// Moves the projectile one tick along its heading.
    pub fn advance(&mut self, grid: &LevelGrid) -> ProjectileStep {
        let facing = self.body.facing();
        let moved = self.body.move_in_direction(facing, grid);
        if moved < self.body.speed() {
            tracing::trace!(kind = ?self.kind, ?facing, moved, "projectile hit a wall");
            ProjectileStep::HitWall
        } else {
            ProjectileStep::Flying
        }
    }

    /// Draws the projectile rotated along its heading.
    pub fn render(&self, camera: PixelPoint, renderer: &mut impl SpriteRenderer) {
        self.body.render(self.kind.sprite(), camera, renderer);
    }
}
