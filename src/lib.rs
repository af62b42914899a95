//! Sky Fighter - A fixed-tick 2D arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation core (movement, explosions, collisions, tick)
//! - `config`: Data-driven game tuning with validation
//! - `session`: Session controller, the entry point for input/render collaborators
//! - `autopilot`: Demo-mode input source

pub mod autopilot;
pub mod config;
pub mod session;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Target tick rate (ticks per second)
    pub const FRAME_RATE: u32 = 60;
    /// Wall-clock milliseconds between ticks at the target rate
    pub const TICK_MS: f64 = 1000.0 / FRAME_RATE as f64;

    /// Play-field dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player craft
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Default spawn position (top-left of the player box)
    pub const PLAYER_SPAWN_X: f32 = 50.0;
    pub const PLAYER_SPAWN_Y: f32 = 80.0;

    /// Projectiles
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    pub const BULLET_SPEED: f32 = 7.0;
    pub const MAX_BULLETS: usize = 5;

    /// Enemy craft
    pub const ENEMY_WIDTH: f32 = 30.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    pub const ENEMY_SPEED: f32 = 3.0;
    /// Chance of one enemy spawning per tick
    pub const ENEMY_SPAWN_PROBABILITY: f64 = 0.02;

    /// Score awarded per enemy destroyed
    pub const KILL_SCORE: u64 = 10;
    /// Largest per-kill score a config may set
    pub const MAX_KILL_SCORE: u64 = 1_000_000;

    /// Explosions
    pub const EXPLOSION_DURATION_MS: f64 = 500.0;
    pub const EXPLOSION_PARTICLES: usize = 12;
    /// Maximum particles per burst
    pub const MAX_EXPLOSION_PARTICLES: usize = 256;
    /// Per-tick particle drift
    pub const PARTICLE_SPEED: f32 = 2.0;
}
