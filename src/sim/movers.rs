//! Entity movement, spawning and despawning
//!
//! Each function takes the previous population and returns the next one.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EntityIds, Projectile};
use super::tick::TickInput;
use crate::config::SimConfig;

/// Move the player one step per held direction, then clamp into the field.
///
/// Axes are independent, so diagonals run at full speed on both.
pub fn move_player(pos: Vec2, input: &TickInput, config: &SimConfig) -> Vec2 {
    let step = config.player_speed;
    let mut next = pos;

    if input.left {
        next.x -= step;
    }
    if input.right {
        next.x += step;
    }
    if input.up {
        next.y -= step;
    }
    if input.down {
        next.y += step;
    }

    Vec2::new(
        next.x.clamp(0.0, config.player_max_x()),
        next.y.clamp(0.0, config.player_max_y()),
    )
}

/// Advance projectiles upward, drop those past the top edge, then fire.
///
/// The cap is checked against the count after despawning. A freshly fired
/// projectile sits at the muzzle and has not moved yet.
pub fn update_projectiles(
    projectiles: &[Projectile],
    muzzle: Vec2,
    input: &TickInput,
    config: &SimConfig,
    ids: &mut EntityIds,
) -> Vec<Projectile> {
    let mut next: Vec<Projectile> = projectiles
        .iter()
        .map(|p| Projectile {
            pos: p.pos - Vec2::new(0.0, config.bullet_speed),
            ..*p
        })
        .filter(|p| p.pos.y > 0.0)
        .collect();

    if input.fire && next.len() < config.max_bullets {
        let id = ids.next();
        log::trace!("Projectile {} fired at ({}, {})", id, muzzle.x, muzzle.y);
        next.push(Projectile { id, pos: muzzle });
    }

    next
}

/// Advance enemies downward, drop those past the bottom edge, then roll once
/// for a new spawn just above the top edge.
pub fn update_enemies<R: Rng + ?Sized>(
    enemies: &[Enemy],
    config: &SimConfig,
    ids: &mut EntityIds,
    rng: &mut R,
) -> Vec<Enemy> {
    let mut next: Vec<Enemy> = enemies
        .iter()
        .map(|e| Enemy {
            pos: e.pos + Vec2::new(0.0, config.enemy_speed),
            ..*e
        })
        .filter(|e| e.pos.y < config.field_height)
        .collect();

    if rng.random_bool(config.enemy_spawn_probability) {
        let max_x = config.field_width - config.enemy_width;
        let x = rng.random_range(0.0..=max_x);
        let id = ids.next();
        log::debug!("Enemy {} spawned at x={:.1}", id, x);
        next.push(Enemy {
            id,
            pos: Vec2::new(x, -config.enemy_height),
        });
    }

    next
}
