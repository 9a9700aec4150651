//! Match loop tying the arena entities to a manual clock and a seeded RNG.

use std::{fmt, time::Duration};

use anyhow::{bail, Result};
use arena_core::{
    AudioSink, Clock, Direction, ManualClock, Millis, PixelPoint, SoundPlacement, VisualRef,
};
use arena_entities::{
    catalog::{
        ENEMY_BULLET_IMPACT_SOUND, ENEMY_SPAWNER_BULLET_IMPACT_SOUND,
        ENEMY_SPAWNER_EXPLOSION_SOUND, MEDIPACK_SPRITE,
    },
    Fighter, FighterKind, Pickable, Projectile, ProjectileStep, Spawner, SpriteCatalog,
};
use arena_system_spawning::SpawnerUpdate;
use arena_world::LevelGrid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::audio::TracingAudio;

/// Chance per tick that an enemy picks a new heading on its own.
const ENEMY_TURN_CHANCE: f64 = 1.0 / 40.0;
/// Chance per tick that an enemy pulls the trigger.
const ENEMY_FIRE_CHANCE: f64 = 1.0 / 15.0;

/// Parameters of a match that do not come from the level file.
#[derive(Clone, Debug)]
pub(crate) struct MatchSetup {
    pub(crate) seed: u64,
    pub(crate) frame: Duration,
    pub(crate) spawners: Vec<(i32, i32)>,
    pub(crate) medipacks: usize,
}

#[derive(Clone, Debug)]
struct Pilot {
    fighter: Fighter,
    heading: Direction,
}

/// What a finished match looked like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) ticks: u32,
    pub(crate) elapsed: Millis,
    pub(crate) player_life: u32,
    pub(crate) player_max_life: u32,
    pub(crate) player_position: PixelPoint,
    pub(crate) enemies_alive: usize,
    pub(crate) enemies_spawned: u32,
    pub(crate) enemies_destroyed: u32,
    pub(crate) spawners_alive: usize,
    pub(crate) spawners_destroyed: u32,
    pub(crate) medipacks_left: usize,
    pub(crate) shots_fired: u32,
    pub(crate) sounds_played: u64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ticks: {} ({} ms)", self.ticks, self.elapsed.get())?;
        writeln!(
            f,
            "player: {}/{} life at ({}, {})",
            self.player_life,
            self.player_max_life,
            self.player_position.x(),
            self.player_position.y()
        )?;
        writeln!(
            f,
            "enemies: {} alive, {} spawned, {} destroyed",
            self.enemies_alive, self.enemies_spawned, self.enemies_destroyed
        )?;
        writeln!(
            f,
            "spawners: {} alive, {} destroyed",
            self.spawners_alive, self.spawners_destroyed
        )?;
        writeln!(f, "medipacks left: {}", self.medipacks_left)?;
        write!(
            f,
            "shots fired: {}, sounds played: {}",
            self.shots_fired, self.sounds_played
        )
    }
}

/// A running match.
pub(crate) struct Match {
    grid: LevelGrid,
    clock: ManualClock,
    frame: Duration,
    rng: ChaCha8Rng,
    sprites: SpriteCatalog,
    audio: TracingAudio,
    player: Pilot,
    enemies: Vec<Pilot>,
    spawners: Vec<Spawner>,
    projectiles: Vec<Projectile>,
    pickables: Vec<Pickable>,
    ticks: u32,
    enemies_spawned: u32,
    enemies_destroyed: u32,
    spawners_destroyed: u32,
    shots_fired: u32,
}

impl Match {
    /// Places the player on the first free tile, spawners on the requested
    /// tiles (or the last free tile) and medipacks on random free tiles.
    pub(crate) fn new(grid: LevelGrid, setup: MatchSetup) -> Result<Self> {
        let free: Vec<(i32, i32)> = grid.walkable_tiles().collect();
        let (Some(&first), Some(&last)) = (free.first(), free.last()) else {
            bail!("level has no walkable tile to place the player on");
        };

        let spawner_tiles = if setup.spawners.is_empty() {
            vec![last]
        } else {
            setup.spawners
        };
        for &(column, row) in &spawner_tiles {
            if !grid.is_walkable(column, row) {
                bail!("spawner tile ({column}, {row}) is not walkable");
            }
        }

        let sprites = SpriteCatalog;
        let mut rng = ChaCha8Rng::seed_from_u64(setup.seed);
        let tile_size = grid.tile_size();

        let player_size = sprite_width(&sprites, FighterKind::Player.sprite());
        let player = Pilot {
            fighter: Fighter::spawn(
                FighterKind::Player,
                centered_in_tile(first, tile_size, player_size),
                &sprites,
            ),
            heading: Direction::Up,
        };
        let spawners = spawner_tiles
            .iter()
            .map(|&(column, row)| Spawner::at_tile(column, row, tile_size, &sprites))
            .collect();
        let medipack_size = sprite_width(&sprites, MEDIPACK_SPRITE);
        let pickables = (0..setup.medipacks)
            .map(|_| {
                let tile = free[rng.gen_range(0..free.len())];
                Pickable::medipack(centered_in_tile(tile, tile_size, medipack_size), &sprites)
            })
            .collect();

        tracing::info!(
            width = grid.width_in_tiles(),
            height = grid.height_in_tiles(),
            spawners = spawner_tiles.len(),
            medipacks = setup.medipacks,
            seed = setup.seed,
            "match ready"
        );

        Ok(Self {
            grid,
            clock: ManualClock::starting_at(Millis::ZERO),
            frame: setup.frame,
            rng,
            sprites,
            audio: TracingAudio::default(),
            player,
            enemies: Vec::new(),
            spawners,
            projectiles: Vec::new(),
            pickables,
            ticks: 0,
            enemies_spawned: 0,
            enemies_destroyed: 0,
            spawners_destroyed: 0,
            shots_fired: 0,
        })
    }

    /// Runs `ticks` simulation steps and summarizes the outcome.
    pub(crate) fn run(&mut self, ticks: u32) -> Summary {
        for _ in 0..ticks {
            self.tick();
        }
        self.summary()
    }

    fn tick(&mut self) {
        self.update_spawners();
        self.drive_player();
        self.drive_enemies();
        self.advance_projectiles();
        self.remove_destroyed_enemies();
        self.collect_pickables();

        self.ticks += 1;
        self.clock.advance(self.frame);
    }

    fn update_spawners(&mut self) {
        let now = self.clock.now();
        let mut requests = Vec::new();
        let mut index = 0;
        while index < self.spawners.len() {
            match self.spawners[index].update(now) {
                SpawnerUpdate::Keep => index += 1,
                SpawnerUpdate::SpawnRequested => {
                    requests.push(self.spawners[index].tile(self.grid.tile_size()));
                    index += 1;
                }
                SpawnerUpdate::Destroyed => {
                    let spawner = self.spawners.remove(index);
                    self.spawners_destroyed += 1;
                    self.audio
                        .play(ENEMY_SPAWNER_EXPLOSION_SOUND, SoundPlacement::centered());
                    let tile = spawner.tile(self.grid.tile_size());
                    tracing::info!(?tile, "spawner destroyed");
                }
            }
        }

        for tile in requests {
            self.spawn_enemy_near(tile);
        }
    }

    fn spawn_enemy_near(&mut self, (column, row): (i32, i32)) {
        let tile_size = self.grid.tile_size();
        let kind = FighterKind::SmallEnemy;
        let size = sprite_width(&self.sprites, kind.sprite());

        let slot = Direction::ALL.iter().find_map(|direction| {
            let (dx, dy) = direction.unit_offset();
            let tile = (column + dx, row + dy);
            if !self.grid.is_walkable(tile.0, tile.1) {
                return None;
            }
            let candidate =
                Fighter::spawn(kind, centered_in_tile(tile, tile_size, size), &self.sprites);
            let occupied = self
                .enemies
                .iter()
                .map(|pilot| &pilot.fighter)
                .chain(std::iter::once(&self.player.fighter))
                .any(|fighter| fighter.rect().intersects(&candidate.rect()));
            (!occupied).then_some((candidate, *direction))
        });

        match slot {
            Some((fighter, heading)) => {
                self.enemies_spawned += 1;
                tracing::debug!(column, row, ?heading, "enemy spawned");
                self.enemies.push(Pilot { fighter, heading });
            }
            None => tracing::debug!(column, row, "no room next to spawner"),
        }
    }

    fn drive_player(&mut self) {
        if self.player.fighter.is_dead() {
            return;
        }
        let player = &mut self.player;
        if player.fighter.move_in_direction(player.heading, &self.grid) == 0 {
            player.heading = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
        }
        if let Some(projectile) = player.fighter.shoot(&self.clock, &mut self.audio) {
            self.shots_fired += 1;
            self.projectiles.push(projectile);
        }
    }

    fn drive_enemies(&mut self) {
        for pilot in &mut self.enemies {
            let blocked = pilot.fighter.move_in_direction(pilot.heading, &self.grid) == 0;
            if blocked || self.rng.gen_bool(ENEMY_TURN_CHANCE) {
                pilot.heading = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
            }
            if self.rng.gen_bool(ENEMY_FIRE_CHANCE) {
                if let Some(projectile) = pilot.fighter.shoot(&self.clock, &mut self.audio) {
                    self.shots_fired += 1;
                    self.projectiles.push(projectile);
                }
            }
        }
    }

    /// Moves every projectile, then applies hits before discarding the ones
    /// stopped by a wall, so a wall-stopped projectile still strikes whatever
    /// it overlaps.
    fn advance_projectiles(&mut self) {
        let mut projectiles = std::mem::take(&mut self.projectiles);
        let grid = &self.grid;
        let steps: Vec<ProjectileStep> = projectiles
            .iter_mut()
            .map(|projectile| projectile.advance(grid))
            .collect();

        let mut steps = steps.into_iter();
        projectiles.retain(|projectile| {
            let step = steps.next();
            !self.resolve_hit(projectile) && step == Some(ProjectileStep::Flying)
        });
        self.projectiles = projectiles;
    }

    /// Applies the projectile to the first thing it overlaps.
    fn resolve_hit(&mut self, projectile: &Projectile) -> bool {
        if !self.player.fighter.is_dead() && self.player.fighter.take_hit(projectile) {
            tracing::debug!(life = self.player.fighter.life().current(), "player hit");
            return true;
        }
        for pilot in &mut self.enemies {
            if pilot.fighter.take_hit(projectile) {
                self.audio
                    .play(ENEMY_BULLET_IMPACT_SOUND, SoundPlacement::centered());
                return true;
            }
        }
        for spawner in &mut self.spawners {
            if spawner.take_hit(projectile) {
                self.audio
                    .play(ENEMY_SPAWNER_BULLET_IMPACT_SOUND, SoundPlacement::centered());
                return true;
            }
        }
        false
    }

    fn remove_destroyed_enemies(&mut self) {
        let before = self.enemies.len();
        let audio = &mut self.audio;
        self.enemies.retain(|pilot| {
            if !pilot.fighter.is_dead() {
                return true;
            }
            if let Some(sound) = pilot.fighter.kind().explosion_sound() {
                audio.play(sound, SoundPlacement::centered());
            }
            false
        });
        let destroyed = before - self.enemies.len();
        self.enemies_destroyed += u32::try_from(destroyed).unwrap_or(u32::MAX);
    }

    fn collect_pickables(&mut self) {
        if self.player.fighter.is_dead() {
            return;
        }
        let player = &mut self.player.fighter;
        let audio = &mut self.audio;
        self.pickables
            .retain(|pickable| !pickable.try_pick_up(player, audio));
    }

    fn summary(&self) -> Summary {
        let life = self.player.fighter.life();
        Summary {
            ticks: self.ticks,
            elapsed: self.clock.now(),
            player_life: life.current(),
            player_max_life: life.maximum(),
            player_position: self.player.fighter.rect().origin(),
            enemies_alive: self.enemies.len(),
            enemies_spawned: self.enemies_spawned,
            enemies_destroyed: self.enemies_destroyed,
            spawners_alive: self.spawners.len(),
            spawners_destroyed: self.spawners_destroyed,
            medipacks_left: self.pickables.len(),
            shots_fired: self.shots_fired,
            sounds_played: self.audio.played(),
        }
    }
}

fn sprite_width(sprites: &SpriteCatalog, visual: VisualRef) -> i32 {
    sprites.get(visual).map_or(0, |size| size.width())
}

/// Upper-left corner that centers a square sprite of `size` in the tile.
fn centered_in_tile((column, row): (i32, i32), tile_size: i32, size: i32) -> PixelPoint {
    let inset = (tile_size - size) / 2;
    PixelPoint::new(column * tile_size + inset, row * tile_size + inset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::PixelRect;
    use arena_world::{ArenaConfig, TileCatalog};

    const YARD: &str = "\
2,2,2,2,2,2,2,2
2,1,1,1,1,1,1,2
2,1,1,2,1,1,1,2
2,1,1,1,1,2,1,2
2,1,1,1,1,1,1,2
2,2,2,2,2,2,2,2
";

    fn yard() -> LevelGrid {
        LevelGrid::load_level(YARD, TileCatalog::standard(), &ArenaConfig::default())
            .expect("yard is valid")
    }

    fn setup(seed: u64) -> MatchSetup {
        MatchSetup {
            seed,
            frame: Duration::from_millis(16),
            spawners: Vec::new(),
            medipacks: 2,
        }
    }

    #[test]
    fn spawner_requests_an_enemy_on_the_first_tick() {
        let mut arena = Match::new(yard(), setup(1)).expect("match starts");
        let summary = arena.run(1);

        assert_eq!(summary.enemies_spawned, 1);
        assert_eq!(summary.enemies_alive, 1);
        assert_eq!(summary.spawners_alive, 1);
        assert_eq!(summary.elapsed, Millis::new(16));
    }

    #[test]
    fn player_starts_on_the_first_free_tile() {
        let arena = Match::new(yard(), setup(3)).expect("match starts");
        let summary = arena.summary();

        assert_eq!(summary.player_position, PixelPoint::new(36, 36));
        assert_eq!(summary.player_life, 100);
        assert_eq!(summary.medipacks_left, 2);
    }

    #[test]
    fn wall_stopped_projectiles_still_hit_the_fighter_underneath() {
        let mut arena = Match::new(yard(), setup(5)).expect("match starts");
        let below_wall = PixelPoint::new(36, 32);
        arena.player.fighter = Fighter::spawn(FighterKind::Player, below_wall, &arena.sprites);
        arena.enemies.push(Pilot {
            fighter: Fighter::spawn(FighterKind::SmallEnemy, below_wall, &arena.sprites),
            heading: Direction::Up,
        });

        let bullet = arena
            .player
            .fighter
            .shoot(&arena.clock, &mut arena.audio)
            .expect("first shot is free");
        assert_eq!(bullet.rect(), PixelRect::new(46, 34, 4, 10));
        arena.projectiles.push(bullet);

        arena.advance_projectiles();

        assert_eq!(arena.enemies[0].fighter.life().current(), 10);
        assert!(arena.projectiles.is_empty());
    }

    #[test]
    fn spawners_on_walls_are_rejected() {
        let mut wall_setup = setup(0);
        wall_setup.spawners = vec![(3, 2)];
        assert!(Match::new(yard(), wall_setup).is_err());

        let mut border_setup = setup(0);
        border_setup.spawners = vec![(0, 0)];
        assert!(Match::new(yard(), border_setup).is_err());
    }

    #[test]
    fn levels_without_floor_are_rejected() {
        let grid = LevelGrid::load_level(
            "2,2,2\n2,2,2\n2,2,2\n",
            TileCatalog::standard(),
            &ArenaConfig::default(),
        )
        .expect("solid level still loads");
        assert!(Match::new(grid, setup(0)).is_err());
    }

    #[test]
    fn identical_seeds_replay_identically() {
        let first = Match::new(yard(), setup(42)).expect("match starts").run(2_000);
        let second = Match::new(yard(), setup(42)).expect("match starts").run(2_000);

        assert_eq!(first, second);
        assert!(first.shots_fired > 0);
        assert!(first.enemies_spawned >= 1);
    }

    #[test]
    fn summary_lists_every_counter() {
        let summary = Match::new(yard(), setup(7)).expect("match starts").run(0);
        let text = summary.to_string();

        assert!(text.starts_with("ticks: 0 (0 ms)"));
        assert!(text.contains("player: 100/100 life at (36, 36)"));
        assert!(text.contains("spawners: 1 alive, 0 destroyed"));
    }
}
