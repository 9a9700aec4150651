//! Tanks: a movable body with a combat record, tagged by kind.

use arena_core::{
    AudioSink, Clock, Dimensions, Direction, LifePoints, PixelPoint, PixelRect, SpriteRenderer,
    TextureDimensions,
};
use arena_system_combat::CombatState;
use arena_system_movement::MovableBody;
use arena_world::LevelGrid;

use crate::{
    kinds::{Faction, FighterKind},
    projectiles::Projectile,
};

/// A tank of any kind, player or enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fighter {
    kind: FighterKind,
    body: MovableBody,
    combat: CombatState,
    projectile_size: Dimensions,
}

impl Fighter {
    /// Places a fresh tank with its upper-left corner at `origin`.
    #[must_use]
    pub fn spawn(kind: FighterKind, origin: PixelPoint, textures: &impl TextureDimensions) -> Self {
        let own_size = textures.dimensions_of(kind.sprite());
        let projectile_size = textures.dimensions_of(kind.projectile().sprite());
        Self {
            kind,
            body: MovableBody::new(PixelRect::from_origin(origin, own_size), kind.speed()),
            combat: CombatState::new(kind.combat_config(), own_size, projectile_size),
            projectile_size,
        }
    }

    /// Kind of tank.
    #[must_use]
    pub const fn kind(&self) -> FighterKind {
        self.kind
    }

    /// Side the tank fights for.
    #[must_use]
    pub const fn faction(&self) -> Faction {
        self.kind.faction()
    }

    /// Movement record.
    #[must_use]
    pub const fn body(&self) -> &MovableBody {
        &self.body
    }

    /// Combat record.
    #[must_use]
    pub const fn combat(&self) -> &CombatState {
        &self.combat
    }

    /// Bounding rectangle in level pixels.
    #[must_use]
    pub const fn rect(&self) -> PixelRect {
        self.body.rect()
    }

    /// Direction the tank is facing.
    #[must_use]
    pub const fn facing(&self) -> Direction {
        self.body.facing()
    }

    /// Current life pool.
    #[must_use]
    pub const fn life(&self) -> LifePoints {
        self.combat.life()
    }

    /// Whether a medipack would heal the tank.
    #[must_use]
    pub const fn is_wounded(&self) -> bool {
        self.combat.is_wounded()
    }

    /// Whether the tank has been destroyed.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.combat.is_dead()
    }

    /// Adds `delta` life points, clamped to the kind's maximum.
    pub fn modify_life(&mut self, delta: i32) {
        self.combat.modify_life(delta);
    }

    /// Moves the tank and returns the pixels travelled.
    pub fn move_in_direction(&mut self, direction: Direction, grid: &LevelGrid) -> i32 {
        self.body.move_in_direction(direction, grid)
    }

    /// Fires the kind's projectile along the current facing if the
    /// cooldown allows it.
    pub fn shoot(
        &mut self,
        clock: &(impl Clock + ?Sized),
        audio: &mut (impl AudioSink + ?Sized),
    ) -> Option<Projectile> {
        let projectile = self.kind.projectile();
        let facing = self.body.facing();
        let size = self.projectile_size;
        self.combat.attempt_shoot(
            clock,
            facing,
            self.body.position(),
            |origin| Some(Projectile::fire(projectile, origin, facing, size)),
            audio,
        )
    }

    /// Applies `projectile` if it overlaps the tank and was fired by the
    /// other side. Returns whether it hit.
    pub fn take_hit(&mut self, projectile: &Projectile) -> bool {
        if projectile.faction() == self.faction() || !projectile.rect().intersects(&self.rect()) {
            return false;
        }
        self.combat.modify_life(-projectile.damage());
        true
    }

    /// Draws the tank rotated along its facing.
    pub fn render(&self, camera: PixelPoint, renderer: &mut impl SpriteRenderer) {
        self.body.render(self.kind.sprite(), camera, renderer);
    }
}
