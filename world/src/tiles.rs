//! Static definition of the tile kinds a level may reference.

use arena_core::{TileId, VisualRef};

/// Visual used by river sand tiles.
pub const RIVER_SAND_VISUAL: VisualRef = VisualRef::new(0);
/// Visual used by grass tiles.
pub const GRASS_VISUAL: VisualRef = VisualRef::new(1);
/// Visual used by stone wall tiles.
pub const STONE_WALL_VISUAL: VisualRef = VisualRef::new(2);
/// Visual used by the first dirt variant.
pub const DIRT_1_VISUAL: VisualRef = VisualRef::new(3);
/// Visual used by the second dirt variant.
pub const DIRT_2_VISUAL: VisualRef = VisualRef::new(4);

/// A square cell kind: what it looks like and whether it blocks movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    visual: VisualRef,
    collidable: bool,
}

impl Tile {
    /// Tile that entities may walk across.
    #[must_use]
    pub const fn floor(visual: VisualRef) -> Self {
        Self {
            visual,
            collidable: false,
        }
    }

    /// Tile that stops entities and projectiles.
    #[must_use]
    pub const fn wall(visual: VisualRef) -> Self {
        Self {
            visual,
            collidable: true,
        }
    }

    /// Visual drawn for the tile.
    #[must_use]
    pub const fn visual(&self) -> VisualRef {
        self.visual
    }

    /// Whether the tile blocks movement.
    #[must_use]
    pub const fn is_collidable(&self) -> bool {
        self.collidable
    }
}

/// Finite, ordered set of tile kinds indexed by [`TileId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
}

impl TileCatalog {
    /// Builds a catalog whose ids follow the order of `tiles`.
    #[must_use]
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// The five tiles levels are authored against: river sand, grass,
    /// stone wall, dirt and dirt again.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Tile::floor(RIVER_SAND_VISUAL),
            Tile::floor(GRASS_VISUAL),
            Tile::wall(STONE_WALL_VISUAL),
            Tile::floor(DIRT_1_VISUAL),
            Tile::floor(DIRT_2_VISUAL),
        ])
    }

    /// Looks up a tile kind.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Number of tile kinds; valid ids are `0..len()`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog defines no tile at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Converts a parsed integer into an id when it addresses a known tile.
    #[must_use]
    pub fn id_for(&self, raw: i64) -> Option<TileId> {
        let index = usize::try_from(raw).ok()?;
        if index >= self.tiles.len() {
            return None;
        }
        u16::try_from(index).ok().map(TileId::new)
    }
}

impl Default for TileCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
