use std::io::Write;

use arena_core::{Direction, TileRenderer, VisualRef};
use arena_world::{
    tiles::{GRASS_VISUAL, STONE_WALL_VISUAL},
    ArenaConfig, ConfigError, LevelError, LevelGrid, TileCatalog,
};

const TILE: i32 = 32;

/// 6x5 level: border walls, a free interior and one wall pillar at (3, 2).
const ARENA: &str = "\
2,2,2,2,2,2
2,1,1,1,1,2
2,1,1,2,1,2
2,1,1,1,1,2
2,2,2,2,2,2
";

fn arena() -> LevelGrid {
    LevelGrid::load_level(ARENA, TileCatalog::standard(), &ArenaConfig::default())
        .expect("arena level is valid")
}

#[test]
fn well_formed_level_reports_its_extent() {
    let grid = LevelGrid::load_level(
        "0,1,3\n4,1,0\n",
        TileCatalog::standard(),
        &ArenaConfig::default(),
    )
    .expect("3x2 level");

    assert_eq!(grid.width_in_tiles(), 3);
    assert_eq!(grid.height_in_tiles(), 2);
    assert_eq!(grid.pixel_width(), 96);
    assert_eq!(grid.pixel_height(), 64);
}

#[test]
fn unknown_tile_id_aborts_the_load() {
    let error = LevelGrid::load_level(
        "1,1,1\n1,99,1\n",
        TileCatalog::standard(),
        &ArenaConfig::default(),
    )
    .expect_err("99 is outside a five tile catalog");

    assert!(matches!(
        error,
        LevelError::InvalidTileId {
            column: 1,
            row: 1,
            id: 99
        }
    ));
    assert!(error.is_content_error());
}

#[test]
fn levels_beyond_configured_maximum_are_rejected() {
    let config = ArenaConfig {
        max_level_width: 4,
        max_level_height: 4,
        ..ArenaConfig::default()
    };
    let error = LevelGrid::load_level(ARENA, TileCatalog::standard(), &config)
        .expect_err("six columns exceed the limit");

    assert!(matches!(error, LevelError::TooLarge { max_width: 4, .. }));
}

#[test]
fn unusable_tile_sizes_fail_the_load() {
    for tile_size in [0, u32::MAX] {
        let config = ArenaConfig {
            tile_size,
            ..ArenaConfig::default()
        };
        let error = LevelGrid::load_level(ARENA, TileCatalog::standard(), &config)
            .expect_err("tile size cannot address pixels");

        assert!(matches!(
            error,
            LevelError::InvalidConfig(ConfigError::InvalidTileSize { tile_size: rejected })
                if rejected == tile_size
        ));
        assert!(!error.is_content_error());
    }
}

#[test]
fn missing_file_is_reported_as_unavailable_source() {
    let directory = tempfile::tempdir().expect("temporary directory");
    let path = directory.path().join("missing.level");

    let error =
        LevelGrid::load_level_from_path(&path, TileCatalog::standard(), &ArenaConfig::default())
            .expect_err("file does not exist");

    assert!(matches!(error, LevelError::SourceUnavailable { .. }));
    assert!(!error.is_content_error());
}

#[test]
fn level_files_load_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temporary file");
    file.write_all(ARENA.as_bytes()).expect("write level");

    let grid = LevelGrid::load_level_from_path(
        file.path(),
        TileCatalog::standard(),
        &ArenaConfig::default(),
    )
    .expect("level on disk is valid");

    assert_eq!(grid.width_in_tiles(), 6);
    assert_eq!(grid.height_in_tiles(), 5);
}

#[test]
fn level_loads_from_reader() {
    let grid = LevelGrid::load_level_from_reader(
        ARENA.as_bytes(),
        TileCatalog::standard(),
        &ArenaConfig::default(),
    )
    .expect("valid level");
    assert_eq!(grid.height_in_tiles(), 5);
}

#[test]
fn distance_next_to_a_wall_is_exact() {
    let grid = arena();

    // Tile (1, 1) has the top border wall above it.
    assert_eq!(grid.wall_distance(Direction::Up, TILE + 5, TILE + 1), 1);
    assert_eq!(grid.wall_distance(Direction::Up, TILE + 5, TILE + 20), 20);
    assert_eq!(grid.wall_distance(Direction::Up, TILE + 5, TILE), 0);

    // Tile (2, 2) has the pillar at (3, 2) to its right.
    assert_eq!(grid.wall_distance(Direction::Right, 3 * TILE - 1, 2 * TILE + 4), 1);
    assert_eq!(grid.wall_distance(Direction::Right, 2 * TILE + 2, 2 * TILE + 4), 30);

    // Tile (4, 2) has the pillar to its left.
    assert_eq!(grid.wall_distance(Direction::Left, 4 * TILE + 1, 2 * TILE + 4), 1);

    // Tile (3, 3) has the pillar above and the border below.
    assert_eq!(grid.wall_distance(Direction::Down, 3 * TILE + 4, 3 * TILE + 31), 1);
}

#[test]
fn distance_in_open_space_is_a_full_tile() {
    let grid = arena();
    assert_eq!(grid.wall_distance(Direction::Down, TILE + 10, TILE + 10), TILE);
    assert_eq!(grid.wall_distance(Direction::Right, TILE + 10, TILE + 10), TILE);
    assert_eq!(grid.wall_distance(Direction::Left, 3 * TILE + 10, TILE + 10), TILE);
}

#[test]
fn border_ring_and_walls_report_no_space() {
    let grid = arena();
    assert_eq!(grid.wall_distance(Direction::Down, 5, 5), 0);
    assert_eq!(grid.wall_distance(Direction::Down, -40, TILE + 5), 0);
    assert_eq!(grid.wall_distance(Direction::Up, 5 * TILE + 5, 2 * TILE), 0);
    assert_eq!(grid.wall_distance(Direction::Up, 3 * TILE + 5, 2 * TILE + 5), 0);
    assert_eq!(grid.wall_distance(Direction::Up, 10_000, 10_000), 0);
}

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<(VisualRef, i32, i32)>,
}

impl TileRenderer for RecordingRenderer {
    fn draw_tile(&mut self, visual: VisualRef, screen_x: i32, screen_y: i32) {
        self.calls.push((visual, screen_x, screen_y));
    }
}

fn small_display() -> ArenaConfig {
    ArenaConfig {
        display_width: 64,
        display_height: 64,
        ..ArenaConfig::default()
    }
}

#[test]
fn aligned_viewport_draws_display_sized_window() {
    let grid = LevelGrid::load_level(ARENA, TileCatalog::standard(), &small_display())
        .expect("valid level");
    let mut renderer = RecordingRenderer::default();

    grid.render_viewport(TILE, TILE, &mut renderer);

    assert_eq!(
        renderer.calls,
        vec![
            (GRASS_VISUAL, 0, 0),
            (GRASS_VISUAL, 32, 0),
            (GRASS_VISUAL, 0, 32),
            (GRASS_VISUAL, 32, 32),
        ]
    );
}

#[test]
fn scrolled_viewport_draws_partial_edge_tiles() {
    let grid = LevelGrid::load_level(ARENA, TileCatalog::standard(), &small_display())
        .expect("valid level");
    let mut renderer = RecordingRenderer::default();

    grid.render_viewport(TILE + 10, 2 * TILE, &mut renderer);

    assert_eq!(renderer.calls.len(), 6);
    assert_eq!(renderer.calls[0], (GRASS_VISUAL, -10, 0));
    assert_eq!(renderer.calls[2], (STONE_WALL_VISUAL, 54, 0));
}

#[test]
fn viewport_skips_tiles_outside_the_level() {
    let grid = LevelGrid::load_level(ARENA, TileCatalog::standard(), &small_display())
        .expect("valid level");
    let mut renderer = RecordingRenderer::default();

    grid.render_viewport(-TILE, -TILE, &mut renderer);

    assert_eq!(renderer.calls, vec![(STONE_WALL_VISUAL, 32, 32)]);
}
