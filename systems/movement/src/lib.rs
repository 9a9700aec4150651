#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Movement resolution that slides rectangular bodies against the level grid.

use arena_core::{Direction, PixelPoint, PixelRect, SpriteRenderer, VisualRef};
use arena_world::LevelGrid;

/// Rectangular footprint that moves one request at a time across the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovableBody {
    rect: PixelRect,
    facing: Direction,
    speed: i32,
}

impl MovableBody {
    /// Creates a body facing up.
    #[must_use]
    pub const fn new(rect: PixelRect, speed: i32) -> Self {
        Self {
            rect,
            facing: Direction::Up,
            speed,
        }
    }

    /// Creates a body already facing `facing`.
    #[must_use]
    pub const fn facing_toward(rect: PixelRect, speed: i32, facing: Direction) -> Self {
        Self {
            rect,
            facing,
            speed,
        }
    }

    /// Bounding rectangle in level pixels.
    #[must_use]
    pub const fn rect(&self) -> PixelRect {
        self.rect
    }

    /// Upper-left corner of the bounding rectangle.
    #[must_use]
    pub const fn position(&self) -> PixelPoint {
        self.rect.origin()
    }

    /// Direction of the last move request.
    #[must_use]
    pub const fn facing(&self) -> Direction {
        self.facing
    }

    /// Pixels travelled by an unobstructed move.
    #[must_use]
    pub const fn speed(&self) -> i32 {
        self.speed
    }

    /// Sprite rotation matching the facing direction.
    #[must_use]
    pub const fn rotation_degrees(&self) -> u16 {
        self.facing.rotation_degrees()
    }

    /// Moves up to `speed` pixels toward `direction` and returns the pixels
    /// actually travelled.
    ///
    /// Both leading corners probe the grid and the more constrained one wins,
    /// so a wall overlapping only part of the footprint still stops the body.
    /// The body turns toward `direction` even when fully blocked.
    pub fn move_in_direction(&mut self, direction: Direction, grid: &LevelGrid) -> i32 {
        let rect = self.rect;
        let last_column = rect.x() + rect.width() - 1;
        let last_row = rect.y() + rect.height() - 1;

        let (first, second) = match direction {
            Direction::Up => (
                grid.wall_distance(direction, rect.x(), rect.y()),
                grid.wall_distance(direction, last_column, rect.y()),
            ),
            Direction::Down => (
                grid.wall_distance(direction, rect.x(), rect.bottom()),
                grid.wall_distance(direction, last_column, rect.bottom()),
            ),
            Direction::Left => (
                grid.wall_distance(direction, rect.x(), rect.y()),
                grid.wall_distance(direction, rect.x(), last_row),
            ),
            Direction::Right => (
                grid.wall_distance(direction, rect.right(), rect.y()),
                grid.wall_distance(direction, rect.right(), last_row),
            ),
        };

        let moved = self.speed.min(first.min(second)).max(0);
        let (dx, dy) = direction.unit_offset();
        self.rect.translate(dx * moved, dy * moved);
        self.facing = direction;
        moved
    }

    /// Draws the body when visible, offset by the camera position.
    pub fn render(
        &self,
        sprite: VisualRef,
        camera: PixelPoint,
        renderer: &mut impl SpriteRenderer,
    ) {
        if !renderer.is_on_screen(&self.rect) {
            return;
        }
        renderer.draw_sprite(
            sprite,
            self.rect.x() - camera.x(),
            self.rect.y() - camera.y(),
            self.rotation_degrees(),
        );
    }
}
