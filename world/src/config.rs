//! Arena configuration loaded from TOML.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// Edge length of a tile when the configuration does not override it.
pub const DEFAULT_TILE_SIZE: u32 = 32;
/// Display width assumed when the configuration does not override it.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 640;
/// Display height assumed when the configuration does not override it.
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 480;
/// Widest level accepted by default, in tiles.
pub const DEFAULT_MAX_LEVEL_WIDTH: u32 = 512;
/// Tallest level accepted by default, in tiles.
pub const DEFAULT_MAX_LEVEL_HEIGHT: u32 = 512;

/// Bound used by the wall-distance margin rule on the vertical axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalMargin {
    /// Rows are checked against the level height.
    #[default]
    Height,
    /// Rows are checked against the level width, reproducing the playable
    /// area of levels authored for the first release.
    LegacyWidth,
}

/// Tunables shared by the level grid and the driver.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ArenaConfig {
    /// Edge length of a square tile in pixels.
    pub tile_size: u32,
    /// Width of the display in pixels.
    pub display_width: u32,
    /// Height of the display in pixels.
    pub display_height: u32,
    /// Widest level accepted by the loader, in tiles.
    pub max_level_width: u32,
    /// Tallest level accepted by the loader, in tiles.
    pub max_level_height: u32,
    /// Bound applied to rows by the wall-distance margin rule.
    pub vertical_margin: VerticalMargin,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            display_width: DEFAULT_DISPLAY_WIDTH,
            display_height: DEFAULT_DISPLAY_HEIGHT,
            max_level_width: DEFAULT_MAX_LEVEL_WIDTH,
            max_level_height: DEFAULT_MAX_LEVEL_HEIGHT,
            vertical_margin: VerticalMargin::Height,
        }
    }
}

impl ArenaConfig {
    /// Parses a configuration from TOML text. Missing keys keep defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()
    }

    /// Reads and parses the configuration file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Tile edge length as a pixel coordinate.
    ///
    /// Fails when the size is zero or does not fit an `i32`.
    pub fn tile_size_in_pixels(&self) -> Result<i32, ConfigError> {
        i32::try_from(self.tile_size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or(ConfigError::InvalidTileSize {
                tile_size: self.tile_size,
            })
    }

    /// Number of whole or partial tiles needed to cover the display.
    pub fn display_tiles(&self) -> Result<(u32, u32), ConfigError> {
        let size = self.tile_size_in_pixels()?.unsigned_abs();
        Ok((
            self.display_width.div_ceil(size),
            self.display_height.div_ceil(size),
        ))
    }

    fn validate(self) -> Result<Self, ConfigError> {
        self.tile_size_in_pixels().map(|_| self)
    }
}

/// Errors raised while loading an [`ArenaConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration at {}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The configuration text is not valid TOML for this schema.
    #[error("failed to parse configuration")]
    Parse(#[from] toml::de::Error),
    /// Tiles must have a positive edge length that fits pixel coordinates.
    #[error("tile size must be between 1 and {} (received {tile_size})", i32::MAX)]
    InvalidTileSize {
        /// Rejected value.
        tile_size: u32,
    },
}
