//! Game tuning
//!
//! Every number the simulation reads comes from `SimConfig`. Defaults match
//! `crate::consts`; a JSON file can override any subset of fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a configuration is rejected at session start
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Field dimensions must be positive and finite: {width}x{height}")]
    InvalidField { width: f32, height: f32 },
    #[error("{entity} size {width}x{height} must be positive and fit inside the field")]
    InvalidEntitySize {
        entity: &'static str,
        width: f32,
        height: f32,
    },
    #[error("{entity} speed must be non-negative and finite: {speed}")]
    InvalidSpeed { entity: &'static str, speed: f32 },
    #[error("Enemy spawn probability must be within [0, 1]: {0}")]
    InvalidSpawnProbability(f64),
    #[error("Kill score must be at most {max}: {score}")]
    InvalidKillScore { score: u64, max: u64 },
    #[error("Explosion particle count must be at most {max}: {count}")]
    InvalidParticleCount { count: usize, max: usize },
    #[error("Explosion duration must be positive and finite: {0} ms")]
    InvalidExplosionDuration(f64),
    #[error("Player spawn position ({x}, {y}) puts the player outside the field")]
    InvalidSpawnPosition { x: f32, y: f32 },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    pub player_spawn_x: f32,
    pub player_spawn_y: f32,

    // === Projectiles ===
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,
    /// Live projectile cap (0 disables firing)
    pub max_bullets: usize,

    // === Enemies ===
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_speed: f32,
    /// Per-tick Bernoulli spawn chance
    pub enemy_spawn_probability: f64,

    // === Scoring ===
    pub kill_score: u64,

    // === Explosions ===
    pub explosion_duration_ms: f64,
    pub explosion_particles: usize,
    pub particle_speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_spawn_x: PLAYER_SPAWN_X,
            player_spawn_y: PLAYER_SPAWN_Y,

            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_speed: BULLET_SPEED,
            max_bullets: MAX_BULLETS,

            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_speed: ENEMY_SPEED,
            enemy_spawn_probability: ENEMY_SPAWN_PROBABILITY,

            kill_score: KILL_SCORE,

            explosion_duration_ms: EXPLOSION_DURATION_MS,
            explosion_particles: EXPLOSION_PARTICLES,
            particle_speed: PARTICLE_SPEED,
        }
    }
}

impl SimConfig {
    /// Default player spawn position
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(self.player_spawn_x, self.player_spawn_y)
    }

    /// Largest x the player's top-left corner may take
    pub fn player_max_x(&self) -> f32 {
        self.field_width - self.player_width
    }

    /// Largest y the player's top-left corner may take
    pub fn player_max_y(&self) -> f32 {
        self.field_height - self.player_height
    }

    /// Initial particle size for explosion bursts
    pub fn particle_size(&self) -> f32 {
        self.enemy_width / 3.0
    }

    /// Check every tunable; called before a session may start
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.field_width, self.field_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::InvalidField {
                width: w,
                height: h,
            });
        }

        for (entity, ew, eh) in [
            ("Player", self.player_width, self.player_height),
            ("Bullet", self.bullet_width, self.bullet_height),
            ("Enemy", self.enemy_width, self.enemy_height),
        ] {
            // NaN fails every comparison, so it is rejected here too
            let fits = ew > 0.0 && eh > 0.0 && ew <= w && eh <= h;
            if !fits {
                return Err(ConfigError::InvalidEntitySize {
                    entity,
                    width: ew,
                    height: eh,
                });
            }
        }

        for (entity, speed) in [
            ("Player", self.player_speed),
            ("Bullet", self.bullet_speed),
            ("Enemy", self.enemy_speed),
            ("Particle", self.particle_speed),
        ] {
            if !(speed.is_finite() && speed >= 0.0) {
                return Err(ConfigError::InvalidSpeed { entity, speed });
            }
        }

        if !(0.0..=1.0).contains(&self.enemy_spawn_probability) {
            return Err(ConfigError::InvalidSpawnProbability(
                self.enemy_spawn_probability,
            ));
        }

        if self.kill_score > MAX_KILL_SCORE {
            return Err(ConfigError::InvalidKillScore {
                score: self.kill_score,
                max: MAX_KILL_SCORE,
            });
        }

        if self.explosion_particles > MAX_EXPLOSION_PARTICLES {
            return Err(ConfigError::InvalidParticleCount {
                count: self.explosion_particles,
                max: MAX_EXPLOSION_PARTICLES,
            });
        }

        let duration = self.explosion_duration_ms;
        if !(duration.is_finite() && duration > 0.0) {
            return Err(ConfigError::InvalidExplosionDuration(duration));
        }

        let (x, y) = (self.player_spawn_x, self.player_spawn_y);
        if !((0.0..=self.player_max_x()).contains(&x) && (0.0..=self.player_max_y()).contains(&y)) {
            return Err(ConfigError::InvalidSpawnPosition { x, y });
        }

        Ok(())
    }

    /// Parse a JSON config (missing fields keep their defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
