//! Sky Fighter entry point
//!
//! Headless attract mode: the autopilot plays one session on a synthetic
//! 60 Hz clock and the outcome is logged. Rendering and keyboard input are
//! left to external front ends built on the library.
//!
//! Usage: `sky-fighter [config.json] [max_ticks]`

use std::error::Error;

use sky_fighter::consts::TICK_MS;
use sky_fighter::{Session, SimConfig, autopilot};

/// Default session length (one minute at 60 Hz)
const DEFAULT_MAX_TICKS: u64 = 60 * 60;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            log::info!("Loading config from {}", path);
            SimConfig::from_json(&std::fs::read_to_string(&path)?)?
        }
        None => SimConfig::default(),
    };
    let max_ticks = match args.next() {
        Some(n) => n.parse()?,
        None => DEFAULT_MAX_TICKS,
    };

    log::info!("Sky Fighter (headless) starting...");
    let mut session = Session::new(config);
    session.start_session()?;

    let mut ticks = 0u64;
    while session.is_timer_armed() && ticks < max_ticks {
        let input = autopilot::next_input(session.state(), session.config());
        session.set_input(input);
        session.tick_at(ticks as f64 * TICK_MS);
        ticks += 1;
    }

    let state = session.state();
    if session.is_game_over() {
        log::info!("Autopilot was hit after {} ticks", state.time_ticks);
    } else {
        log::info!("Autopilot survived {} ticks", state.time_ticks);
    }
    log::info!(
        "Final score {} ({} kills, {} shots fired)",
        state.score,
        state.kills,
        state.shots_fired
    );

    Ok(())
}
