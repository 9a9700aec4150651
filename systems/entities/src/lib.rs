#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Arena entities built from the movement, combat and spawning records.
//!
//! Every entity is a tagged kind whose per-kind numbers live in data tables,
//! so adding a tank means adding a table row rather than a new type.

pub mod catalog;
mod fighters;
mod kinds;
mod pickables;
mod projectiles;
mod spawners;

pub use catalog::SpriteCatalog;
pub use fighters::Fighter;
pub use kinds::{Faction, FighterKind, ProjectileKind};
pub use pickables::{Pickable, MEDIPACK_HEALING};
pub use projectiles::{Projectile, ProjectileStep};
pub use spawners::Spawner;
