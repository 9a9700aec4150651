#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the tile arena simulation.
//!
//! This crate defines the vocabulary that connects the level grid, the
//! capability records composed into entities, and the driver that ticks
//! them. Pixel geometry, facing directions, timestamps and life accounting
//! live here, together with the collaborator traits through which the
//! simulation reaches the outside world: the clock, texture dimensions,
//! audio and rendering. Nothing in this crate performs I/O.

use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};

/// Cardinal directions an entity may face and move toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing `y` coordinates.
    #[default]
    Up,
    /// Movement toward increasing `y` coordinates.
    Down,
    /// Movement toward decreasing `x` coordinates.
    Left,
    /// Movement toward increasing `x` coordinates.
    Right,
}

impl Direction {
    /// Every direction, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Clockwise sprite rotation, in degrees, matching the facing direction.
    ///
    /// Sprites are authored facing up.
    #[must_use]
    pub const fn rotation_degrees(self) -> u16 {
        match self {
            Self::Up => 0,
            Self::Right => 90,
            Self::Down => 180,
            Self::Left => 270,
        }
    }

    /// Reports whether the direction moves along the `y` axis.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Unit displacement `(dx, dy)` for one step in this direction.
    #[must_use]
    pub const fn unit_offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Point expressed in level pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    x: i32,
    y: i32,
}

impl PixelPoint {
    /// Creates a new pixel point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the point shifted by the provided offset.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Width and height of a sprite or texture in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    width: i32,
    height: i32,
}

impl Dimensions {
    /// Creates a new dimension pair.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Horizontal extent in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Vertical extent in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// The larger of both extents.
    #[must_use]
    pub const fn larger(&self) -> i32 {
        if self.width > self.height {
            self.width
        } else {
            self.height
        }
    }

    /// Dimensions rotated by a quarter turn.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Axis-aligned bounding rectangle in level pixel coordinates.
///
/// The origin may be negative or lie beyond the grid while an entity is in
/// motion; only the level grid decides which positions are reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl PixelRect {
    /// Creates a rectangle from its origin and extents.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle anchored at `origin` with the given dimensions.
    #[must_use]
    pub const fn from_origin(origin: PixelPoint, dimensions: Dimensions) -> Self {
        Self::new(origin.x, origin.y, dimensions.width, dimensions.height)
    }

    /// Left edge.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Top edge.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Horizontal extent.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Vertical extent.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// First column to the right of the rectangle.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// First row below the rectangle.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Upper-left corner.
    #[must_use]
    pub const fn origin(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }

    /// Extents of the rectangle.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Moves the rectangle by the provided offset.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Reports whether both rectangles share at least one pixel.
    #[must_use]
    pub const fn intersects(&self, other: &PixelRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Monotonic timestamp in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Millis(u64);

impl Millis {
    /// Timestamp at the clock origin.
    pub const ZERO: Millis = Millis(0);

    /// Creates a timestamp from a millisecond count.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Retrieves the millisecond count.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Time elapsed since `earlier`, or zero if `earlier` lies in the future.
    #[must_use]
    pub fn saturating_since(self, earlier: Millis) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }

    /// Timestamp advanced by the provided duration.
    #[must_use]
    pub fn saturating_add(self, duration: Duration) -> Self {
        let delta = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self(self.0.saturating_add(delta))
    }
}

/// Opaque reference to a texture or sprite owned by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VisualRef(u16);

impl VisualRef {
    /// Wraps a renderer-defined identifier.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Retrieves the raw identifier.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }
}

/// Opaque reference to a sound effect owned by the audio collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SoundId(u16);

impl SoundId {
    /// Wraps an audio-defined identifier.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Retrieves the raw identifier.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }
}

/// Index of a tile kind inside a tile catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(u16);

impl TileId {
    /// Creates a tile identifier.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Retrieves the identifier as an index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Life accounting shared by every destructible entity.
///
/// The current value always stays within `[0, maximum]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LifePoints {
    current: u32,
    maximum: u32,
}

impl LifePoints {
    /// Creates a full life pool.
    #[must_use]
    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Remaining life points.
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Upper bound of the life pool.
    #[must_use]
    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    /// Adds `delta` (negative for damage) and clamps to `[0, maximum]`.
    pub fn modify(&mut self, delta: i32) {
        let updated = i64::from(self.current) + i64::from(delta);
        let clamped = updated.clamp(0, i64::from(self.maximum));
        self.current = u32::try_from(clamped).unwrap_or(self.maximum);
    }

    /// Reports whether the pool is below its maximum.
    #[must_use]
    pub const fn is_wounded(&self) -> bool {
        self.current < self.maximum
    }

    /// Reports whether the pool is empty.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.current == 0
    }
}

/// Position of a sound emitter relative to the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SoundPlacement {
    angle: u16,
    distance: u8,
}

impl SoundPlacement {
    /// Placement that disables spatialization: straight ahead, nearest.
    #[must_use]
    pub const fn centered() -> Self {
        Self {
            angle: 0,
            distance: 0,
        }
    }

    /// Creates a placement from a clockwise angle and a distance.
    ///
    /// Angles wrap into `0..360`; `0` is in front, `90` to the right.
    /// Distance `0` is nearest and `255` farthest while still audible.
    #[must_use]
    pub const fn new(angle: u16, distance: u8) -> Self {
        Self {
            angle: angle % 360,
            distance,
        }
    }

    /// Clockwise angle between the emitter and the camera.
    #[must_use]
    pub const fn angle(&self) -> u16 {
        self.angle
    }

    /// Distance between the emitter and the camera.
    #[must_use]
    pub const fn distance(&self) -> u8 {
        self.distance
    }
}

/// Monotonic millisecond time source injected into time-gated operations.
pub trait Clock {
    /// Current timestamp. Successive reads never decrease.
    fn now(&self) -> Millis;
}

/// Wall-clock time measured from the moment the clock was created.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Starts a clock at the current instant.
    #[must_use]
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        let elapsed = self.origin.elapsed().as_millis();
        Millis::new(u64::try_from(elapsed).unwrap_or(u64::MAX))
    }
}

/// Synthetic clock advanced explicitly by the driver or by tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Creates a clock reading the provided timestamp.
    #[must_use]
    pub fn starting_at(now: Millis) -> Self {
        Self {
            now: Cell::new(now.get()),
        }
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let next = Millis::new(self.now.get()).saturating_add(delta);
        self.now.set(next.get());
    }

    /// Moves the clock to `now`. Earlier timestamps are ignored.
    pub fn set(&self, now: Millis) {
        if now.get() > self.now.get() {
            self.now.set(now.get());
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        Millis::new(self.now.get())
    }
}

/// Resolves texture sizes without instantiating the owning entity.
pub trait TextureDimensions {
    /// Pixel dimensions of the referenced visual.
    fn dimensions_of(&self, visual: VisualRef) -> Dimensions;
}

/// Fire-and-forget sound playback.
pub trait AudioSink {
    /// Plays `sound` once. Implementations must not block the caller.
    fn play(&mut self, sound: SoundId, placement: SoundPlacement);
}

/// Receives tile draw calls emitted while rendering the level viewport.
pub trait TileRenderer {
    /// Draws one tile with its upper-left corner at the screen position.
    fn draw_tile(&mut self, visual: VisualRef, screen_x: i32, screen_y: i32);
}

/// Receives sprite draw calls for entities.
pub trait SpriteRenderer {
    /// Reports whether any part of the level-space rectangle is visible.
    fn is_on_screen(&self, rect: &PixelRect) -> bool;

    /// Draws a sprite rotated clockwise by `rotation_degrees`.
    fn draw_sprite(
        &mut self,
        visual: VisualRef,
        screen_x: i32,
        screen_y: i32,
        rotation_degrees: u16,
    );
}
