use macroquad::prelude::*;
use ::rand::Rng;
use tracing::{error, info};

use crate::application::Simulation;
use crate::domain::SeedMode;

/// Quit is only honoured here, between steps.
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q)
}

/// Process keyboard input functionally
pub fn process_keyboard_input<R: Rng>(state: Simulation, rng: &mut R) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 3] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let mut state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    let reseed = if is_key_pressed(KeyCode::R) {
        Some(SeedMode::Random)
    } else if is_key_pressed(KeyCode::D) {
        Some(SeedMode::Defined)
    } else {
        None
    };

    // At most one change per call; the driver records it before ticking.
    // Single step only while paused.
    if let Some(mode) = reseed {
        match state.reseed(&mode, rng) {
            Ok(()) => info!(%mode, "reseeded"),
            Err(err) => error!(%err, %mode, "reseed failed"),
        }
    } else if !state.is_running && is_key_pressed(KeyCode::N) {
        state = state.step_once();
    }

    state
}
