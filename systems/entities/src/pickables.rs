//! Items lying on the floor that fighters collect by driving over them.

use arena_core::{
    AudioSink, PixelPoint, PixelRect, SoundPlacement, SpriteRenderer, TextureDimensions, VisualRef,
};

use crate::{
    catalog::{MEDIPACK_SPRITE, PLAYER_HEALED_SOUND},
    fighters::Fighter,
};

/// Life points restored by a medipack.
pub const MEDIPACK_HEALING: i32 = 20;

/// A collectable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pickable {
    /// Restores life to a wounded fighter.
    Medipack {
        /// Bounding rectangle in level pixels.
        rect: PixelRect,
    },
}

impl Pickable {
    /// Medipack with its upper-left corner at `origin`.
    #[must_use]
    pub fn medipack(origin: PixelPoint, textures: &impl TextureDimensions) -> Self {
        Pickable::Medipack {
            rect: PixelRect::from_origin(origin, textures.dimensions_of(MEDIPACK_SPRITE)),
        }
    }

    /// Bounding rectangle in level pixels.
    #[must_use]
    pub const fn rect(&self) -> PixelRect {
        match self {
            Pickable::Medipack { rect } => *rect,
        }
    }

    /// Sprite drawn for the item.
    #[must_use]
    pub const fn sprite(&self) -> VisualRef {
        match self {
            Pickable::Medipack { .. } => MEDIPACK_SPRITE,
        }
    }

    /// Applies the item to a fighter touching it. Returns whether the item
    /// was consumed; a healthy fighter leaves it in place.
    pub fn try_pick_up(
        &self,
        fighter: &mut Fighter,
        audio: &mut (impl AudioSink + ?Sized),
    ) -> bool {
        if !self.rect().intersects(&fighter.rect()) {
            return false;
        }
        match self {
            Pickable::Medipack { .. } => {
                if !fighter.is_wounded() {
                    return false;
                }
                fighter.modify_life(MEDIPACK_HEALING);
                audio.play(PLAYER_HEALED_SOUND, SoundPlacement::centered());
                true
            }
        }
    }

    /// Draws the item when visible.
    pub fn render(&self, camera: PixelPoint, renderer: &mut impl SpriteRenderer) {
        let rect = self.rect();
        if renderer.is_on_screen(&rect) {
            renderer.draw_sprite(self.sprite(), rect.x() - camera.x(), rect.y() - camera.y(), 0);
        }
    }
}
