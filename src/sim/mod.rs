//! Simulation module
//!
//! All gameplay logic lives here. Every stage is a plain function over values:
//! - One call to `tick` is one step, regardless of elapsed wall-clock time
//! - Randomness comes from an injected RNG
//! - Entity order is spawn order; ids come from a monotonic counter
//! - No rendering or platform dependencies

pub mod collision;
pub mod explosion;
pub mod geometry;
pub mod movers;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, resolve};
pub use explosion::{advance_explosions, spawn_explosion};
pub use geometry::{Rect, overlaps};
pub use movers::{move_player, update_enemies, update_projectiles};
pub use state::{
    Enemy, EntityIds, ExplosionBurst, GamePhase, Particle, Player, Projectile, SimulationState,
};
pub use tick::{TickInput, tick};
