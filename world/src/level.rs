//! Parser for the textual level format.
//!
//! A level is a sequence of rows, one per line, each made of comma-separated
//! tile ids and terminated by a newline. Parsing stops quietly at the first
//! token that is not an integer or at the end of the input; only the rows
//! completed before that point form the level. Ids outside the catalog,
//! rows whose length differs from the first row and levels beyond the
//! configured maximum abort the load.

use std::{io, path::PathBuf};

use arena_core::TileId;

use crate::{config::ConfigError, tiles::TileCatalog};

/// Errors that abort a level load.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    /// The level source could not be opened or read.
    #[error("level source {} is unavailable", path.display())]
    SourceUnavailable {
        /// Requested level file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A tile id does not address an entry of the tile catalog.
    #[error("tile ({column}, {row}) has invalid id {id}")]
    InvalidTileId {
        /// Zero-based column of the offending tile.
        column: u32,
        /// Zero-based row of the offending tile.
        row: u32,
        /// Value read from the source.
        id: i64,
    },
    /// A row does not have as many tiles as the first row.
    #[error("row {row} has {found} tiles, expected {expected}")]
    IrregularRow {
        /// Zero-based index of the offending row.
        row: u32,
        /// Width fixed by the first row.
        expected: u32,
        /// Width of the offending row.
        found: u32,
    },
    /// The configuration handed to the loader is unusable.
    #[error("invalid arena configuration")]
    InvalidConfig(#[source] ConfigError),
    /// The level exceeds the configured maximum size.
    #[error("level exceeds {max_width}x{max_height} tiles (reached {width}x{height})")]
    TooLarge {
        /// Columns read when the limit was crossed.
        width: u32,
        /// Rows read when the limit was crossed.
        height: u32,
        /// Configured column limit.
        max_width: u32,
        /// Configured row limit.
        max_height: u32,
    },
}

impl LevelError {
    /// Reports whether the source was readable but its content is invalid.
    ///
    /// Content failures leave no usable grid; the caller must discard it.
    #[must_use]
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTileId { .. } | Self::IrregularRow { .. } | Self::TooLarge { .. }
        )
    }
}

/// Tiles read from a level source, in row-major order.
#[derive(Debug)]
pub(crate) struct ParsedLevel {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) tiles: Vec<TileId>,
}

/// Maximum level extent accepted by the parser.
#[derive(Clone, Copy, Debug)]
pub(crate) struct LevelLimits {
    pub(crate) max_width: u32,
    pub(crate) max_height: u32,
}

enum RowOutcome {
    Complete(Vec<TileId>),
    Halted,
}

/// Parses `source` against `catalog`.
pub(crate) fn parse(
    source: &str,
    catalog: &TileCatalog,
    limits: LevelLimits,
) -> Result<ParsedLevel, LevelError> {
    let mut width: Option<u32> = None;
    let mut height = 0_u32;
    let mut tiles = Vec::new();

    for chunk in source.split_inclusive('\n') {
        let (line, terminated) = match chunk.strip_suffix('\n') {
            Some(line) => (line.strip_suffix('\r').unwrap_or(line), true),
            None => (chunk, false),
        };
        if line.trim().is_empty() {
            continue;
        }

        let row = match parse_row(line, height, catalog, limits)? {
            RowOutcome::Complete(row) if terminated => row,
            RowOutcome::Complete(_) | RowOutcome::Halted => break,
        };

        if height >= limits.max_height {
            return Err(LevelError::TooLarge {
                width: width.unwrap_or(0),
                height: height + 1,
                max_width: limits.max_width,
                max_height: limits.max_height,
            });
        }

        let found = u32::try_from(row.len()).unwrap_or(u32::MAX);
        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(LevelError::IrregularRow {
                    row: height,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }

        tiles.extend(row);
        height += 1;
    }

    Ok(ParsedLevel {
        width: width.unwrap_or(0),
        height,
        tiles,
    })
}

fn parse_row(
    line: &str,
    row: u32,
    catalog: &TileCatalog,
    limits: LevelLimits,
) -> Result<RowOutcome, LevelError> {
    let mut tiles = Vec::new();
    for (column, token) in (0_u32..).zip(line.split(',')) {
        let Ok(raw) = token.trim().parse::<i64>() else {
            return Ok(RowOutcome::Halted);
        };
        if column >= limits.max_width {
            return Err(LevelError::TooLarge {
                width: column + 1,
                height: row + 1,
                max_width: limits.max_width,
                max_height: limits.max_height,
            });
        }
        let Some(id) = catalog.id_for(raw) else {
            return Err(LevelError::InvalidTileId {
                column,
                row,
                id: raw,
            });
        };
        tiles.push(id);
    }
    Ok(RowOutcome::Complete(tiles))
}
