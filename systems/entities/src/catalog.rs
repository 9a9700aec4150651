//! Sprite and sound identifiers understood by the renderer and the mixer,
//! together with the sprite sizes the simulation needs.

use arena_core::{Dimensions, SoundId, TextureDimensions, VisualRef};

/// Player tank sprite, facing up.
pub const PLAYER_SPRITE: VisualRef = VisualRef::new(100);
/// Small enemy sprite, facing up.
pub const SMALL_ENEMY_SPRITE: VisualRef = VisualRef::new(101);
/// Medium enemy sprite, facing up.
pub const MEDIUM_ENEMY_SPRITE: VisualRef = VisualRef::new(102);
/// Big enemy sprite, facing up.
pub const BIG_ENEMY_SPRITE: VisualRef = VisualRef::new(103);
/// Enemy spawner sprite.
pub const ENEMY_SPAWNER_SPRITE: VisualRef = VisualRef::new(104);
/// Medipack sprite.
pub const MEDIPACK_SPRITE: VisualRef = VisualRef::new(105);
/// Bullet fired by the player, facing up.
pub const PLAYER_BULLET_SPRITE: VisualRef = VisualRef::new(110);
/// Bullet fired by small enemies, facing up.
pub const SMALL_ENEMY_BULLET_SPRITE: VisualRef = VisualRef::new(111);
/// Bullet fired by medium enemies, facing up.
pub const MEDIUM_ENEMY_BULLET_SPRITE: VisualRef = VisualRef::new(112);
/// Bullet fired by big enemies, facing up.
pub const BIG_ENEMY_BULLET_SPRITE: VisualRef = VisualRef::new(113);

/// Player firing sound.
pub const PLAYER_FIRESHOT_SOUND: SoundId = SoundId::new(1);
/// Played when a medipack heals the player.
pub const PLAYER_HEALED_SOUND: SoundId = SoundId::new(4);
/// Small enemy firing sound.
pub const SMALL_ENEMY_FIRESHOT_SOUND: SoundId = SoundId::new(6);
/// Medium enemy firing sound.
pub const MEDIUM_ENEMY_FIRESHOT_SOUND: SoundId = SoundId::new(7);
/// Big enemy firing sound.
pub const BIG_ENEMY_FIRESHOT_SOUND: SoundId = SoundId::new(8);
/// A bullet hit an enemy.
pub const ENEMY_BULLET_IMPACT_SOUND: SoundId = SoundId::new(9);
/// Small enemy destroyed.
pub const SMALL_ENEMY_EXPLOSION_SOUND: SoundId = SoundId::new(10);
/// Medium enemy destroyed.
pub const MEDIUM_ENEMY_EXPLOSION_SOUND: SoundId = SoundId::new(11);
/// Big enemy destroyed.
pub const BIG_ENEMY_EXPLOSION_SOUND: SoundId = SoundId::new(12);
/// A bullet hit an enemy spawner.
pub const ENEMY_SPAWNER_BULLET_IMPACT_SOUND: SoundId = SoundId::new(13);
/// Enemy spawner destroyed.
pub const ENEMY_SPAWNER_EXPLOSION_SOUND: SoundId = SoundId::new(14);

const SPRITE_SIZES: [(VisualRef, Dimensions); 10] = [
    (PLAYER_SPRITE, Dimensions::new(24, 24)),
    (SMALL_ENEMY_SPRITE, Dimensions::new(20, 20)),
    (MEDIUM_ENEMY_SPRITE, Dimensions::new(24, 24)),
    (BIG_ENEMY_SPRITE, Dimensions::new(28, 28)),
    (ENEMY_SPAWNER_SPRITE, Dimensions::new(32, 32)),
    (MEDIPACK_SPRITE, Dimensions::new(16, 16)),
    (PLAYER_BULLET_SPRITE, Dimensions::new(4, 10)),
    (SMALL_ENEMY_BULLET_SPRITE, Dimensions::new(4, 8)),
    (MEDIUM_ENEMY_BULLET_SPRITE, Dimensions::new(6, 10)),
    (BIG_ENEMY_BULLET_SPRITE, Dimensions::new(8, 12)),
];

/// Built-in sprite sizes, standing in for the loaded textures.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpriteCatalog;

impl SpriteCatalog {
    /// Size of a known sprite.
    #[must_use]
    pub fn get(&self, visual: VisualRef) -> Option<Dimensions> {
        SPRITE_SIZES
            .iter()
            .find(|(candidate, _)| *candidate == visual)
            .map(|(_, dimensions)| *dimensions)
    }
}

impl TextureDimensions for SpriteCatalog {
    fn dimensions_of(&self, visual: VisualRef) -> Dimensions {
        self.get(visual).unwrap_or_else(|| {
            tracing::warn!(visual = visual.get(), "unknown sprite has no size");
            Dimensions::new(0, 0)
        })
    }
}
