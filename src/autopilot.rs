//! Demo-mode autopilot
//!
//! An input source that plays the game: it reads the last rendered state and
//! produces the next tick's intent, exactly like a keyboard listener would.

use crate::config::SimConfig;
use crate::sim::{Enemy, SimulationState, TickInput};

/// How far above the player (in ticks of enemy travel) an enemy counts as a threat
const DANGER_TICKS: f32 = 12.0;
/// Horizontal slack when lining up a shot
const AIM_TOLERANCE: f32 = 4.0;

/// Choose the next intent for the given state
pub fn next_input(state: &SimulationState, config: &SimConfig) -> TickInput {
    let player = state.player.rect(config);
    let player_center = player.center().x;
    let mut input = TickInput::default();

    // Sidestep enemies about to land on the player
    let danger_zone = player.y - config.enemy_speed * DANGER_TICKS;
    let threat = state
        .enemies
        .iter()
        .filter(|e| {
            let r = e.rect(config);
            r.y + r.h > danger_zone && r.y < player.y + player.h
        })
        .find(|e| {
            let r = e.rect(config);
            r.x < player.x + player.w + AIM_TOLERANCE && r.x + r.w > player.x - AIM_TOLERANCE
        });

    if let Some(enemy) = threat {
        let enemy_center = enemy.rect(config).center().x;
        let room_left = player.x > config.player_speed;
        let room_right = player.x < config.player_max_x() - config.player_speed;
        if (enemy_center >= player_center && room_left) || !room_right {
            input.left = true;
        } else {
            input.right = true;
        }
        return input;
    }

    // Track the lowest enemy still above the player and shoot when lined up
    if let Some(target) = lowest_above(&state.enemies, player.y, config) {
        let target_center = target.rect(config).center().x;
        let delta = target_center - player_center;
        if delta > AIM_TOLERANCE {
            input.right = true;
        } else if delta < -AIM_TOLERANCE {
            input.left = true;
        } else {
            input.fire = true;
        }
    }

    input
}

fn lowest_above<'a>(enemies: &'a [Enemy], player_y: f32, config: &SimConfig) -> Option<&'a Enemy> {
    enemies
        .iter()
        .filter(|e| e.pos.y + config.enemy_height <= player_y)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
}
