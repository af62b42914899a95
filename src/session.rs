//! Session controller
//!
//! The single entry point for the input, render and UI collaborators. Owns the
//! current state, the latest input intent, the RNG and the session clock.

use std::time::Instant;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::{ConfigError, SimConfig};
use crate::sim::{GamePhase, SimulationState, TickInput, tick};

/// A play session
pub struct Session {
    config: SimConfig,
    state: SimulationState,
    input: TickInput,
    rng: Pcg32,
    /// Wall-clock origin for explosion aging; shifted forward over pauses
    epoch: Instant,
    /// When the current pause began
    paused_at: Option<Instant>,
}

impl Session {
    /// Create a session with an entropy-seeded RNG (runs are not reproducible)
    pub fn new(config: SimConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// Create a session with a fixed RNG seed
    pub fn with_seed(config: SimConfig, seed: u64) -> Self {
        let state = SimulationState::new(&config);
        Self {
            config,
            state,
            input: TickInput::default(),
            rng: Pcg32::seed_from_u64(seed),
            epoch: Instant::now(),
            paused_at: None,
        }
    }

    /// Reset everything and start playing.
    ///
    /// Rejects an invalid config and leaves the current state untouched.
    pub fn start_session(&mut self) -> Result<(), ConfigError> {
        self.config.validate()?;
        self.state = SimulationState::started(&self.config);
        self.input = TickInput::default();
        self.epoch = Instant::now();
        self.paused_at = None;
        log::info!(
            "Session started: field {}x{}, spawn chance {}",
            self.config.field_width,
            self.config.field_height,
            self.config.enemy_spawn_probability
        );
        Ok(())
    }

    /// Replace the config; takes effect on the next `start_session`
    pub fn set_config(&mut self, config: SimConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Latest input intent (written by the input collaborator)
    pub fn set_input(&mut self, input: TickInput) {
        self.input = input;
    }

    pub fn input(&self) -> TickInput {
        self.input
    }

    /// Whether the periodic tick should be firing
    pub fn is_timer_armed(&self) -> bool {
        self.state.is_playing()
    }

    /// Run one step using the session clock. Returns false if nothing ran.
    pub fn tick(&mut self) -> bool {
        let now_ms = self.clock_ms();
        self.tick_at(now_ms)
    }

    /// Session time in ms, excluding time spent paused
    pub fn clock_ms(&self) -> f64 {
        let now = self.paused_at.unwrap_or_else(Instant::now);
        now.saturating_duration_since(self.epoch).as_secs_f64() * 1000.0
    }

    /// Run one step at an explicit wall-clock reading (ms since session start)
    pub fn tick_at(&mut self, now_ms: f64) -> bool {
        if !self.is_timer_armed() {
            log::warn!("Tick ignored in phase {:?}", self.state.phase);
            return false;
        }

        // Intent is sampled once; the tick only ever sees this copy
        let input = self.input;
        tick(&mut self.state, &input, &self.config, now_ms, &mut self.rng);
        true
    }

    /// Suspend a running session. Returns false if not playing.
    pub fn pause(&mut self) -> bool {
        if self.state.phase != GamePhase::Playing {
            return false;
        }
        self.state.phase = GamePhase::Paused;
        self.paused_at = Some(Instant::now());
        log::info!("Paused at tick {}", self.state.time_ticks);
        true
    }

    /// Continue a paused session. Returns false if not paused.
    pub fn resume(&mut self) -> bool {
        if self.state.phase != GamePhase::Paused {
            return false;
        }
        self.state.phase = GamePhase::Playing;
        if let Some(paused_at) = self.paused_at.take() {
            self.epoch += paused_at.elapsed();
        }
        log::info!("Resumed at tick {}", self.state.time_ticks);
        true
    }

    /// Read-only view for the renderer
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Full state as JSON for an out-of-process renderer
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.state)
    }
}
