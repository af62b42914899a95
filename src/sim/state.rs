//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives in `SimulationState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::SimConfig;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session started yet
    #[default]
    NotStarted,
    /// Active gameplay
    Playing,
    /// Session suspended by the player
    Paused,
    /// An enemy reached the player; state is frozen
    GameOver,
}

/// Monotonic entity id allocator, shared by every spawn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityIds {
    next_id: u64,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl EntityIds {
    /// Allocate a new entity ID
    pub fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The id the next spawn will receive
    pub fn peek(&self) -> u64 {
        self.next_id
    }
}

/// The player's craft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the player box
    pub pos: Vec2,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn rect(&self, config: &SimConfig) -> Rect {
        Rect::at(self.pos, config.player_width, config.player_height)
    }

    /// Where new projectiles appear: horizontally centred, at the player's top edge
    pub fn muzzle(&self, config: &SimConfig) -> Vec2 {
        Vec2::new(
            self.pos.x + config.player_width / 2.0 - config.bullet_width / 2.0,
            self.pos.y,
        )
    }
}

/// A projectile fired by the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u64,
    /// Top-left of the projectile box
    pub pos: Vec2,
}

impl Projectile {
    pub fn rect(&self, config: &SimConfig) -> Rect {
        Rect::at(self.pos, config.bullet_width, config.bullet_height)
    }
}

/// A descending enemy craft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u64,
    /// Top-left of the enemy box
    pub pos: Vec2,
}

impl Enemy {
    pub fn rect(&self, config: &SimConfig) -> Rect {
        Rect::at(self.pos, config.enemy_width, config.enemy_height)
    }
}

/// A particle for explosion effects (not gameplay-affecting)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Per-tick drift, constant for the particle's life
    pub vel: Vec2,
    /// Opacity, 1 at spawn and 0 at expiry
    pub alpha: f32,
    pub size: f32,
}

/// One explosion: a radial burst of particles aging on wall-clock time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionBurst {
    pub id: u64,
    /// Wall-clock timestamp of creation (ms)
    pub created_at_ms: f64,
    /// Centre the particles were emitted from
    pub origin: Vec2,
    /// Particle size at spawn; current sizes are derived from it
    pub base_size: f32,
    pub particles: Vec<Particle>,
}

/// Complete simulation state handed to the renderer after every tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub phase: GamePhase,
    /// Cumulative score; never decreases within a session
    pub score: u64,
    pub player: Player,
    /// Live projectiles (spawn order)
    pub projectiles: Vec<Projectile>,
    /// Live enemies (spawn order)
    pub enemies: Vec<Enemy>,
    /// Aging explosion bursts (spawn order)
    pub explosions: Vec<ExplosionBurst>,
    /// Ticks simulated this session
    pub time_ticks: u64,
    /// Enemies destroyed this session
    pub kills: u64,
    /// Projectiles fired this session
    pub shots_fired: u64,
    /// Id source for every spawned entity
    pub ids: EntityIds,
}

impl SimulationState {
    /// A state waiting for its first session
    pub fn new(config: &SimConfig) -> Self {
        Self {
            phase: GamePhase::NotStarted,
            score: 0,
            player: Player::new(config.player_spawn()),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            explosions: Vec::new(),
            time_ticks: 0,
            kills: 0,
            shots_fired: 0,
            ids: EntityIds::default(),
        }
    }

    /// A fresh state ready to play
    pub fn started(config: &SimConfig) -> Self {
        Self {
            phase: GamePhase::Playing,
            ..Self::new(config)
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
