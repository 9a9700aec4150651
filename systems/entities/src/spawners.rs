//! Enemy spawners anchored to a level tile.

use arena_core::{Millis, PixelPoint, PixelRect, SpriteRenderer, TextureDimensions};
use arena_system_spawning::{SpawnerState, SpawnerUpdate};

use crate::{catalog::ENEMY_SPAWNER_SPRITE, kinds::Faction, projectiles::Projectile};

/// A stationary structure that periodically requests new enemies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spawner {
    rect: PixelRect,
    state: SpawnerState,
}

impl Spawner {
    /// Places a spawner on the tile at `column`, `row`.
    #[must_use]
    pub fn at_tile(
        column: i32,
        row: i32,
        tile_size: i32,
        textures: &impl TextureDimensions,
    ) -> Self {
        let origin = PixelPoint::new(column * tile_size, row * tile_size);
        Self {
            rect: PixelRect::from_origin(origin, textures.dimensions_of(ENEMY_SPAWNER_SPRITE)),
            state: SpawnerState::new(),
        }
    }

    /// Bounding rectangle in level pixels.
    #[must_use]
    pub const fn rect(&self) -> PixelRect {
        self.rect
    }

    /// Life and spawn timer.
    #[must_use]
    pub const fn state(&self) -> &SpawnerState {
        &self.state
    }

    /// Tile holding the spawner's upper-left corner.
    #[must_use]
    pub const fn tile(&self, tile_size: i32) -> (i32, i32) {
        (self.rect.x() / tile_size, self.rect.y() / tile_size)
    }

    /// Whether the spawner has been destroyed.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.state.is_dead()
    }

    /// Advances the spawn timer.
    pub fn update(&mut self, now: Millis) -> SpawnerUpdate {
        self.state.update(now)
    }

    /// Applies a player projectile overlapping the spawner. Enemy fire passes
    /// through. Returns whether it hit.
    pub fn take_hit(&mut self, projectile: &Projectile) -> bool {
        if projectile.faction() != Faction::Player || !projectile.rect().intersects(&self.rect) {
            return false;
        }
        self.state.modify_life(-projectile.damage());
        true
    }

    /// Draws the spawner when visible.
    pub fn render(&self, camera: PixelPoint, renderer: &mut impl SpriteRenderer) {
        if renderer.is_on_screen(&self.rect) {
            renderer.draw_sprite(
                ENEMY_SPAWNER_SPRITE,
                self.rect.x() - camera.x(),
                self.rect.y() - camera.y(),
                0,
            );
        }
    }
}
