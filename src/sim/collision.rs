//! Collision resolution
//!
//! Projectiles against enemies first, then the surviving enemies against the
//! player. Hits are collected as index sets and applied in one filter pass so
//! removal never disturbs the iteration.

use glam::Vec2;

use super::explosion::spawn_explosion;
use super::geometry::Rect;
use super::state::{Enemy, EntityIds, ExplosionBurst, Projectile};
use crate::config::SimConfig;

/// Result of one resolve pass
#[derive(Debug, Clone, Default)]
pub struct CollisionOutcome {
    /// Projectiles that did not hit anything
    pub projectiles: Vec<Projectile>,
    /// Enemies that were not destroyed
    pub enemies: Vec<Enemy>,
    /// Score earned this pass
    pub score_delta: u64,
    /// Enemies destroyed this pass
    pub kills: u64,
    /// A surviving enemy overlaps the player
    pub game_over: bool,
    /// Bursts created at destroyed enemies' centres
    pub explosions: Vec<ExplosionBurst>,
}

/// Cross-check projectiles with enemies, then enemies with the player.
///
/// Projectiles are visited in list order; each one destroys the first enemy
/// (in list order) it overlaps that no earlier projectile has destroyed, and
/// is consumed. An enemy is destroyed at most once.
pub fn resolve(
    projectiles: &[Projectile],
    enemies: &[Enemy],
    player_pos: Vec2,
    config: &SimConfig,
    now_ms: f64,
    ids: &mut EntityIds,
) -> CollisionOutcome {
    let mut enemy_hit = vec![false; enemies.len()];
    let mut projectile_hit = vec![false; projectiles.len()];
    let mut explosions = Vec::new();

    let enemy_rects: Vec<Rect> = enemies.iter().map(|e| e.rect(config)).collect();

    for (pi, projectile) in projectiles.iter().enumerate() {
        let bullet = projectile.rect(config);
        let target = enemy_rects
            .iter()
            .enumerate()
            .find(|&(ei, rect)| !enemy_hit[ei] && bullet.overlaps(rect));

        if let Some((ei, rect)) = target {
            enemy_hit[ei] = true;
            projectile_hit[pi] = true;
            log::debug!(
                "Projectile {} destroyed enemy {}",
                projectile.id,
                enemies[ei].id
            );
            explosions.push(spawn_explosion(ids.next(), rect.center(), now_ms, config));
        }
    }

    let kills = enemy_hit.iter().filter(|&&hit| hit).count() as u64;

    let enemies: Vec<Enemy> = enemies
        .iter()
        .zip(&enemy_hit)
        .filter(|&(_, &hit)| !hit)
        .map(|(e, _)| *e)
        .collect();
    let projectiles: Vec<Projectile> = projectiles
        .iter()
        .zip(&projectile_hit)
        .filter(|&(_, &hit)| !hit)
        .map(|(p, _)| *p)
        .collect();

    let player = Rect::at(player_pos, config.player_width, config.player_height);
    let game_over = enemies.iter().any(|e| e.rect(config).overlaps(&player));

    CollisionOutcome {
        projectiles,
        enemies,
        score_delta: kills.saturating_mul(config.kill_score),
        kills,
        game_over,
        explosions,
    }
}
