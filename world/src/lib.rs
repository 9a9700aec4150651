#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative level grid for the tile arena.
//!
//! A [`LevelGrid`] owns the tiles of the current level and answers the
//! pixel-precision collision queries entities rely on before moving. Grids
//! are immutable once loaded; loading a new level produces a fresh grid that
//! replaces the previous one wholesale.

use std::{fs, io::Read, path::Path};

use arena_core::{Direction, TileId, TileRenderer};

pub mod config;
mod level;
pub mod tiles;

pub use config::{ArenaConfig, ConfigError, VerticalMargin};
pub use level::LevelError;
pub use tiles::{Tile, TileCatalog};

use level::{LevelLimits, ParsedLevel};

/// Loaded level: a bounds-checked rectangle of tiles.
#[derive(Clone, Debug)]
pub struct LevelGrid {
    width: u32,
    height: u32,
    tiles: Vec<TileId>,
    catalog: TileCatalog,
    tile_size: i32,
    vertical_margin: VerticalMargin,
    display_columns: i32,
    display_rows: i32,
}

impl LevelGrid {
    /// Parses a level from its textual representation.
    pub fn load_level(
        source: &str,
        catalog: TileCatalog,
        config: &ArenaConfig,
    ) -> Result<Self, LevelError> {
        let settings = config
            .tile_size_in_pixels()
            .and_then(|size| config.display_tiles().map(|tiles| (size, tiles)));
        let (tile_size, (display_columns, display_rows)) = match settings {
            Ok(settings) => settings,
            Err(error) => {
                tracing::error!(%error, "level load aborted");
                return Err(LevelError::InvalidConfig(error));
            }
        };

        let limits = LevelLimits {
            max_width: config.max_level_width,
            max_height: config.max_level_height,
        };
        let parsed = match level::parse(source, &catalog, limits) {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::error!(%error, "level load aborted");
                return Err(error);
            }
        };
        let ParsedLevel {
            width,
            height,
            tiles,
        } = parsed;
        tracing::debug!(width, height, "level loaded");

        Ok(Self {
            width,
            height,
            tiles,
            catalog,
            tile_size,
            vertical_margin: config.vertical_margin,
            display_columns: i32::try_from(display_columns).unwrap_or(i32::MAX),
            display_rows: i32::try_from(display_rows).unwrap_or(i32::MAX),
        })
    }

    /// Reads a level from any byte source.
    pub fn load_level_from_reader(
        mut reader: impl Read,
        catalog: TileCatalog,
        config: &ArenaConfig,
    ) -> Result<Self, LevelError> {
        let mut source = String::new();
        let _ = reader
            .read_to_string(&mut source)
            .map_err(|source| LevelError::SourceUnavailable {
                path: "<reader>".into(),
                source,
            })?;
        Self::load_level(&source, catalog, config)
    }

    /// Reads the level file at `path`.
    pub fn load_level_from_path(
        path: impl AsRef<Path>,
        catalog: TileCatalog,
        config: &ArenaConfig,
    ) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| {
            tracing::error!(path = %path.display(), %source, "could not open level");
            LevelError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::load_level(&source, catalog, config)
    }

    /// Number of tile columns.
    #[must_use]
    pub const fn width_in_tiles(&self) -> u32 {
        self.width
    }

    /// Number of tile rows.
    #[must_use]
    pub const fn height_in_tiles(&self) -> u32 {
        self.height
    }

    /// Edge length of a tile in pixels.
    #[must_use]
    pub const fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Level width in pixels.
    #[must_use]
    pub fn pixel_width(&self) -> i64 {
        i64::from(self.width) * i64::from(self.tile_size)
    }

    /// Level height in pixels.
    #[must_use]
    pub fn pixel_height(&self) -> i64 {
        i64::from(self.height) * i64::from(self.tile_size)
    }

    /// Tile at the given tile coordinates, if they lie inside the level.
    #[must_use]
    pub fn tile_at(&self, column: i32, row: i32) -> Option<&Tile> {
        let column = u32::try_from(column).ok()?;
        let row = u32::try_from(row).ok()?;
        if column >= self.width || row >= self.height {
            return None;
        }
        let index = usize::try_from(u64::from(row) * u64::from(self.width) + u64::from(column))
            .ok()?;
        self.tiles
            .get(index)
            .and_then(|id| self.catalog.get(*id))
    }

    /// Whether the tile blocks movement. Coordinates outside the level count
    /// as walls.
    #[must_use]
    pub fn is_collidable_at(&self, column: i32, row: i32) -> bool {
        self.tile_at(column, row).map_or(true, Tile::is_collidable)
    }

    /// Whether the tile lies strictly inside the border ring that entities
    /// can never reach.
    #[must_use]
    pub fn is_interior(&self, column: i32, row: i32) -> bool {
        let columns = dimension(self.width);
        let rows = match self.vertical_margin {
            VerticalMargin::Height => dimension(self.height),
            VerticalMargin::LegacyWidth => dimension(self.width),
        };
        column > 0 && column < columns - 1 && row > 0 && row < rows - 1
    }

    /// Whether an entity may stand on the tile.
    #[must_use]
    pub fn is_walkable(&self, column: i32, row: i32) -> bool {
        self.is_interior(column, row) && !self.is_collidable_at(column, row)
    }

    /// Iterates over walkable tiles in row-major order.
    pub fn walkable_tiles(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let columns = dimension(self.width);
        let rows = dimension(self.height);
        (0..rows).flat_map(move |row| {
            (0..columns)
                .filter(move |column| self.is_walkable(*column, row))
                .map(move |column| (column, row))
        })
    }

    /// Pixels of free space between the query point and the next wall in
    /// `direction`.
    ///
    /// The exact distance is only computed when the neighboring tile is a
    /// wall; a free neighbor reports a full tile, which is all a caller
    /// moving less than a tile per tick needs to know. Points on or beyond
    /// the border ring and points already inside a wall report zero.
    #[must_use]
    pub fn wall_distance(&self, direction: Direction, x: i32, y: i32) -> i32 {
        let size = self.tile_size;
        let column = x / size;
        let row = y / size;

        if !self.is_interior(column, row) {
            return 0;
        }
        if self.is_collidable_at(column, row) {
            return 0;
        }

        let (dx, dy) = direction.unit_offset();
        if !self.is_collidable_at(column + dx, row + dy) {
            return size;
        }

        match direction {
            Direction::Up => y % size,
            Direction::Down => size - y % size,
            Direction::Left => x % size,
            Direction::Right => size - x % size,
        }
    }

    /// Emits draw calls for every level tile visible from a camera whose
    /// upper-left corner sits at the given level pixel coordinates.
    pub fn render_viewport(
        &self,
        top_left_x: i32,
        top_left_y: i32,
        renderer: &mut impl TileRenderer,
    ) {
        let size = self.tile_size;
        let start_pixel_x = -(top_left_x % size);
        let start_pixel_y = -(top_left_y % size);
        let start_column = top_left_x / size;
        let start_row = top_left_y / size;

        let mut columns = self.display_columns;
        if start_pixel_x < 0 {
            columns += 1;
        }
        let mut rows = self.display_rows;
        if start_pixel_y < 0 {
            rows += 1;
        }

        let mut screen_y = start_pixel_y;
        for row_offset in 0..rows {
            let mut screen_x = start_pixel_x;
            for column_offset in 0..columns {
                let column = start_column + column_offset;
                let row = start_row + row_offset;
                if let Some(tile) = self.tile_at(column, row) {
                    renderer.draw_tile(tile.visual(), screen_x, screen_y);
                }
                screen_x += size;
            }
            screen_y += size;
        }
    }
}

fn dimension(tiles: u32) -> i32 {
    i32::try_from(tiles).unwrap_or(i32::MAX)
}
