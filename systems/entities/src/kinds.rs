//! Data tables behind every fighter and projectile kind.

use std::time::Duration;

use arena_core::{SoundId, VisualRef};
use arena_system_combat::CombatConfig;

use crate::catalog::{
    BIG_ENEMY_BULLET_SPRITE, BIG_ENEMY_EXPLOSION_SOUND, BIG_ENEMY_FIRESHOT_SOUND,
    BIG_ENEMY_SPRITE, MEDIUM_ENEMY_BULLET_SPRITE, MEDIUM_ENEMY_EXPLOSION_SOUND,
    MEDIUM_ENEMY_FIRESHOT_SOUND, MEDIUM_ENEMY_SPRITE, PLAYER_BULLET_SPRITE,
    PLAYER_FIRESHOT_SOUND, PLAYER_SPRITE, SMALL_ENEMY_BULLET_SPRITE,
    SMALL_ENEMY_EXPLOSION_SOUND, SMALL_ENEMY_FIRESHOT_SOUND, SMALL_ENEMY_SPRITE,
};

/// Side an entity fights for. Projectiles never hurt their own side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Faction {
    /// The player tank.
    Player,
    /// Enemy tanks and spawners.
    Enemy,
}

/// Every kind of tank in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FighterKind {
    /// The tank steered by the player.
    Player,
    /// Fast, fragile enemy produced by spawners.
    SmallEnemy,
    /// Balanced enemy.
    MediumEnemy,
    /// Slow, heavily armored enemy.
    BigEnemy,
}

impl FighterKind {
    /// All fighter kinds.
    pub const ALL: [FighterKind; 4] = [
        FighterKind::Player,
        FighterKind::SmallEnemy,
        FighterKind::MediumEnemy,
        FighterKind::BigEnemy,
    ];

    /// Sprite drawn for the kind, facing up.
    #[must_use]
    pub const fn sprite(self) -> VisualRef {
        match self {
            FighterKind::Player => PLAYER_SPRITE,
            FighterKind::SmallEnemy => SMALL_ENEMY_SPRITE,
            FighterKind::MediumEnemy => MEDIUM_ENEMY_SPRITE,
            FighterKind::BigEnemy => BIG_ENEMY_SPRITE,
        }
    }

    /// Pixels moved per tick when unobstructed.
    #[must_use]
    pub const fn speed(self) -> i32 {
        match self {
            FighterKind::Player => 4,
            FighterKind::SmallEnemy | FighterKind::MediumEnemy => 2,
            FighterKind::BigEnemy => 1,
        }
    }

    /// Life points at spawn.
    #[must_use]
    pub const fn max_life(self) -> u32 {
        match self {
            FighterKind::Player => 100,
            FighterKind::SmallEnemy => 20,
            FighterKind::MediumEnemy => 40,
            FighterKind::BigEnemy => 80,
        }
    }

    /// Minimum time between two shots.
    #[must_use]
    pub const fn cooldown(self) -> Duration {
        match self {
            FighterKind::Player => Duration::from_millis(250),
            FighterKind::SmallEnemy => Duration::from_millis(1_000),
            FighterKind::MediumEnemy => Duration::from_millis(800),
            FighterKind::BigEnemy => Duration::from_millis(1_500),
        }
    }

    /// Sound played on every shot.
    #[must_use]
    pub const fn firing_sound(self) -> SoundId {
        match self {
            FighterKind::Player => PLAYER_FIRESHOT_SOUND,
            FighterKind::SmallEnemy => SMALL_ENEMY_FIRESHOT_SOUND,
            FighterKind::MediumEnemy => MEDIUM_ENEMY_FIRESHOT_SOUND,
            FighterKind::BigEnemy => BIG_ENEMY_FIRESHOT_SOUND,
        }
    }

    /// Sound played when the tank is destroyed. The player has none.
    #[must_use]
    pub const fn explosion_sound(self) -> Option<SoundId> {
        match self {
            FighterKind::Player => None,
            FighterKind::SmallEnemy => Some(SMALL_ENEMY_EXPLOSION_SOUND),
            FighterKind::MediumEnemy => Some(MEDIUM_ENEMY_EXPLOSION_SOUND),
            FighterKind::BigEnemy => Some(BIG_ENEMY_EXPLOSION_SOUND),
        }
    }

    /// Projectile fired by the kind.
    #[must_use]
    pub const fn projectile(self) -> ProjectileKind {
        match self {
            FighterKind::Player => ProjectileKind::PlayerBullet,
            FighterKind::SmallEnemy => ProjectileKind::SmallEnemyBullet,
            FighterKind::MediumEnemy => ProjectileKind::MediumEnemyBullet,
            FighterKind::BigEnemy => ProjectileKind::BigEnemyBullet,
        }
    }

    /// Side the kind fights for.
    #[must_use]
    pub const fn faction(self) -> Faction {
        match self {
            FighterKind::Player => Faction::Player,
            _ => Faction::Enemy,
        }
    }

    /// Combat tunables for a fresh tank of this kind.
    #[must_use]
    pub const fn combat_config(self) -> CombatConfig {
        CombatConfig {
            max_life: self.max_life(),
            cooldown: self.cooldown(),
            firing_sound: self.firing_sound(),
        }
    }
}

/// Every kind of projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectileKind {
    /// Fired by the player.
    PlayerBullet,
    /// Fired by small enemies.
    SmallEnemyBullet,
    /// Fired by medium enemies.
    MediumEnemyBullet,
    /// Fired by big enemies.
    BigEnemyBullet,
}

impl ProjectileKind {
    /// All projectile kinds.
    pub const ALL: [ProjectileKind; 4] = [
        ProjectileKind::PlayerBullet,
        ProjectileKind::SmallEnemyBullet,
        ProjectileKind::MediumEnemyBullet,
        ProjectileKind::BigEnemyBullet,
    ];

    /// Sprite drawn for the projectile, facing up.
    #[must_use]
    pub const fn sprite(self) -> VisualRef {
        match self {
            ProjectileKind::PlayerBullet => PLAYER_BULLET_SPRITE,
            ProjectileKind::SmallEnemyBullet => SMALL_ENEMY_BULLET_SPRITE,
            ProjectileKind::MediumEnemyBullet => MEDIUM_ENEMY_BULLET_SPRITE,
            ProjectileKind::BigEnemyBullet => BIG_ENEMY_BULLET_SPRITE,
        }
    }

    /// Pixels travelled per tick.
    #[must_use]
    pub const fn speed(self) -> i32 {
        match self {
            ProjectileKind::PlayerBullet => 6,
            ProjectileKind::SmallEnemyBullet | ProjectileKind::MediumEnemyBullet => 5,
            ProjectileKind::BigEnemyBullet => 4,
        }
    }

    /// Life points removed from whatever the projectile hits.
    #[must_use]
    pub const fn damage(self) -> i32 {
        match self {
            ProjectileKind::PlayerBullet => 10,
            ProjectileKind::SmallEnemyBullet => 5,
            ProjectileKind::MediumEnemyBullet => 8,
            ProjectileKind::BigEnemyBullet => 15,
        }
    }

    /// Side that fired the projectile.
    #[must_use]
    pub const fn faction(self) -> Faction {
        match self {
            ProjectileKind::PlayerBullet => Faction::Player,
            _ => Faction::Enemy,
        }
    }
}
