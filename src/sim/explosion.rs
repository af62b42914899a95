//! Explosion particle bursts
//!
//! Bursts age on wall-clock time while particles drift once per tick, so a
//! burst fades over the same duration no matter the tick rate.

use std::f32::consts::TAU;

use glam::Vec2;

use super::state::{ExplosionBurst, Particle};
use crate::config::SimConfig;

/// Emit a ring of particles at equally spaced angles around `origin`
pub fn spawn_explosion(id: u64, origin: Vec2, now_ms: f64, config: &SimConfig) -> ExplosionBurst {
    let count = config.explosion_particles;
    let size = config.particle_size();

    let particles = (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            Particle {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * config.particle_speed,
                alpha: 1.0,
                size,
            }
        })
        .collect();

    ExplosionBurst {
        id,
        created_at_ms: now_ms,
        origin,
        base_size: size,
        particles,
    }
}

/// Age every burst: expired ones are dropped, the rest drift and fade.
///
/// Alpha falls linearly from 1 to 0 over the burst's life; size shrinks
/// linearly to half of the spawn size.
pub fn advance_explosions(
    bursts: &[ExplosionBurst],
    now_ms: f64,
    config: &SimConfig,
) -> Vec<ExplosionBurst> {
    let duration = config.explosion_duration_ms;

    bursts
        .iter()
        .filter_map(|burst| {
            let age = now_ms - burst.created_at_ms;
            if age >= duration {
                return None;
            }

            let progress = (age / duration).max(0.0) as f32;
            let alpha = 1.0 - progress;
            let size = burst.base_size * (1.0 - progress * 0.5);

            let particles = burst
                .particles
                .iter()
                .map(|p| Particle {
                    pos: p.pos + p.vel,
                    vel: p.vel,
                    alpha,
                    size,
                })
                .collect();

            Some(ExplosionBurst {
                particles,
                ..burst.clone()
            })
        })
        .collect()
}
