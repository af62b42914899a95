//! Fixed-cadence simulation tick
//!
//! One call advances the game by exactly one step. Elapsed wall-clock time
//! only affects explosion aging, never movement.

use rand::Rng;

use super::collision::resolve;
use super::explosion::advance_explosions;
use super::movers::{move_player, update_enemies, update_projectiles};
use super::state::{GamePhase, SimulationState};
use crate::config::SimConfig;

/// Input intent for a single tick, sampled once at tick start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Advance the game state by one step.
///
/// Order: player, projectiles (from the new player position), enemies,
/// collisions, explosions, score, game-over latch. Does nothing unless the
/// phase is `Playing`.
pub fn tick<R: Rng + ?Sized>(
    state: &mut SimulationState,
    input: &TickInput,
    config: &SimConfig,
    now_ms: f64,
    rng: &mut R,
) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    state.player.pos = move_player(state.player.pos, input, config);

    let first_new_id = state.ids.peek();
    let projectiles = update_projectiles(
        &state.projectiles,
        state.player.muzzle(config),
        input,
        config,
        &mut state.ids,
    );
    let fired = projectiles.iter().filter(|p| p.id >= first_new_id).count();
    state.shots_fired += fired as u64;

    let enemies = update_enemies(&state.enemies, config, &mut state.ids, rng);

    let outcome = resolve(
        &projectiles,
        &enemies,
        state.player.pos,
        config,
        now_ms,
        &mut state.ids,
    );

    let mut explosions = advance_explosions(&state.explosions, now_ms, config);
    explosions.extend(outcome.explosions);

    state.projectiles = outcome.projectiles;
    state.enemies = outcome.enemies;
    state.explosions = explosions;
    state.score = state.score.saturating_add(outcome.score_delta);
    state.kills += outcome.kills;

    log::trace!(
        "Tick {}: {} projectiles, {} enemies, {} explosions, score {}",
        state.time_ticks,
        state.projectiles.len(),
        state.enemies.len(),
        state.explosions.len(),
        state.score
    );

    if outcome.game_over {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks: score {}, {} kills",
            state.time_ticks,
            state.score,
            state.kills
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, Projectile};
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn quiet_config() -> SimConfig {
        SimConfig {
            enemy_spawn_probability: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_tick_fire() {
        let config = quiet_config();
        let mut state = SimulationState::started(&config);
        let mut rng = Pcg32::seed_from_u64(12345);
        let spawn = state.player.pos;

        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, &config, 0.0, &mut rng);

        assert_eq!(state.player.pos, spawn);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(
            state.projectiles[0].pos,
            Vec2::new(spawn.x + 20.0 - 2.5, spawn.y)
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.shots_fired, 1);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_not_started_does_not_tick() {
        let config = quiet_config();
        let mut state = SimulationState::new(&config);
        let mut rng = Pcg32::seed_from_u64(1);
        let input = TickInput {
            right: true,
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, &config, 0.0, &mut rng);

        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.time_ticks, 0);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.player.pos, config.player_spawn());
    }

    #[test]
    fn test_kill_scores_and_explodes() {
        let config = quiet_config();
        let mut state = SimulationState::started(&config);
        let mut rng = Pcg32::seed_from_u64(1);

        // Enemy moves down 3 into the projectile moving up 7
        let enemy_id = state.ids.next();
        state.enemies.push(Enemy {
            id: enemy_id,
            pos: Vec2::new(200.0, 300.0),
        });
        let projectile_id = state.ids.next();
        state.projectiles.push(Projectile {
            id: projectile_id,
            pos: Vec2::new(210.0, 335.0),
        });

        tick(&mut state, &TickInput::default(), &config, 100.0, &mut rng);

        assert!(state.enemies.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, 10);
        assert_eq!(state.kills, 1);
        assert_eq!(state.explosions.len(), 1);
        assert_eq!(state.explosions[0].origin, Vec2::new(215.0, 318.0));
        assert!(state.is_playing());
    }

    #[test]
    fn test_explosions_age_across_ticks() {
        let config = quiet_config();
        let mut state = SimulationState::started(&config);
        let mut rng = Pcg32::seed_from_u64(1);
        let id = state.ids.next();
        state
            .explosions
            .push(crate::sim::spawn_explosion(id, Vec2::new(50.0, 50.0), 0.0, &config));

        tick(&mut state, &TickInput::default(), &config, 100.0, &mut rng);
        assert_eq!(state.explosions.len(), 1);
        assert!((state.explosions[0].particles[0].alpha - 0.8).abs() < 1e-6);

        tick(&mut state, &TickInput::default(), &config, 500.0, &mut rng);
        assert!(state.explosions.is_empty());
    }

    #[test]
    fn test_game_over_latches() {
        let config = quiet_config();
        let mut state = SimulationState::started(&config);
        let mut rng = Pcg32::seed_from_u64(1);

        let id = state.ids.next();
        state.enemies.push(Enemy {
            id,
            pos: state.player.pos,
        });
        let id = state.ids.next();
        state.projectiles.push(Projectile {
            id,
            pos: Vec2::new(300.0, 400.0),
        });

        tick(&mut state, &TickInput::default(), &config, 0.0, &mut rng);
        assert!(state.is_game_over());
        assert_eq!(state.score, 0);

        let frozen = state.clone();
        let input = TickInput {
            left: true,
            fire: true,
            ..Default::default()
        };
        for i in 1..10 {
            tick(&mut state, &input, &config, i as f64 * 16.0, &mut rng);
        }

        assert!(state.is_game_over());
        assert_eq!(state.time_ticks, frozen.time_ticks);
        assert_eq!(state.player, frozen.player);
        assert_eq!(state.projectiles, frozen.projectiles);
        assert_eq!(state.enemies, frozen.enemies);
        assert_eq!(state.score, frozen.score);
    }

    #[test]
    fn test_ids_unique_over_long_run() {
        let config = SimConfig {
            enemy_spawn_probability: 0.5,
            ..Default::default()
        };
        let mut state = SimulationState::started(&config);
        let mut rng = Pcg32::seed_from_u64(99999);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };

        for i in 0..600 {
            tick(&mut state, &input, &config, i as f64 * 16.0, &mut rng);
            let mut ids: Vec<u64> = state
                .projectiles
                .iter()
                .map(|p| p.id)
                .chain(state.enemies.iter().map(|e| e.id))
                .chain(state.explosions.iter().map(|b| b.id))
                .collect();
            let len = ids.len();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), len);
            if state.is_game_over() {
                break;
            }
        }
    }

    #[test]
    fn test_score_and_counters_saturate_upward() {
        let config = SimConfig {
            kill_score: u64::MAX,
            ..quiet_config()
        };
        let mut state = SimulationState::started(&config);
        let mut rng = Pcg32::seed_from_u64(1);
        state.score = u64::MAX - 5;
        state.kills = u64::from(u32::MAX);

        let id = state.ids.next();
        state.enemies.push(Enemy {
            id,
            pos: Vec2::new(200.0, 300.0),
        });
        let id = state.ids.next();
        state.projectiles.push(Projectile {
            id,
            pos: Vec2::new(210.0, 335.0),
        });

        tick(&mut state, &TickInput::default(), &config, 0.0, &mut rng);

        assert_eq!(state.score, u64::MAX);
        assert_eq!(state.kills, u64::from(u32::MAX) + 1);
        assert!(state.is_playing());
    }

    #[test]
    fn test_seeded_runs_match() {
        let config = SimConfig {
            enemy_spawn_probability: 0.2,
            ..Default::default()
        };
        let mut state1 = SimulationState::started(&config);
        let mut state2 = SimulationState::started(&config);
        let mut rng1 = Pcg32::seed_from_u64(4242);
        let mut rng2 = Pcg32::seed_from_u64(4242);

        let inputs = [
            TickInput {
                right: true,
                ..Default::default()
            },
            TickInput {
                fire: true,
                down: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..120 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, &config, i as f64 * 16.0, &mut rng1);
            tick(&mut state2, input, &config, i as f64 * 16.0, &mut rng2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.enemies, state2.enemies);
        assert_eq!(state1.score, state2.score);
    }

    proptest! {
        #[test]
        fn prop_score_never_decreases(seed: u64, moves in proptest::collection::vec(0u8..32, 1..200)) {
            let config = SimConfig {
                enemy_spawn_probability: 0.3,
                ..Default::default()
            };
            let mut state = SimulationState::started(&config);
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut last_score = 0;

            for (i, bits) in moves.into_iter().enumerate() {
                let input = TickInput {
                    left: bits & 1 != 0,
                    right: bits & 2 != 0,
                    up: bits & 4 != 0,
                    down: bits & 8 != 0,
                    fire: bits & 16 != 0,
                };
                tick(&mut state, &input, &config, i as f64 * 16.0, &mut rng);

                prop_assert!(state.score >= last_score);
                prop_assert!(state.projectiles.len() <= config.max_bullets);
                prop_assert!(state.player.rect(&config).within(config.field_width, config.field_height));
                last_score = state.score;
            }
        }
    }
}
