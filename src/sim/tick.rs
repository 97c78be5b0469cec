//! Per-frame update loop
//!
//! One external scheduler calls `update` once per frame with the actual
//! elapsed time; everything mutable is touched only inside that call. The
//! step is normalized to a 60 Hz-equivalent factor so scroll speed does not
//! depend on the real frame rate.

use super::grid;
use super::projection::Viewport;
use super::ship;
use super::state::{GamePhase, GameState};
use crate::tuning::Tuning;

/// Steering level held by the input layer between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    Left,
    #[default]
    Neutral,
    Right,
}

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub steer: Steer,
    /// Start/restart command from the menu overlay
    pub start: bool,
}

/// Advance the game by one frame of elapsed time `dt` (seconds).
///
/// Runs in every phase; forward motion, scoring, and the support check only
/// apply while Running, so the tunnel keeps animating behind the menu and
/// the score freezes at game over.
pub fn update(
    state: &mut GameState,
    input: &FrameInput,
    viewport: Viewport,
    tuning: &Tuning,
    dt: f32,
) {
    if input.start && state.phase != GamePhase::Running {
        state.start();
    }

    let time_factor = dt * 60.0;

    // Steering left shifts the world right under the stationary ship
    state.camera.speed_x = match input.steer {
        Steer::Left => tuning.speed_x,
        Steer::Neutral => 0.0,
        Steer::Right => -tuning.speed_x,
    };

    if state.phase == GamePhase::Running {
        let speed_y = tuning.speed * viewport.height / 100.0;
        state.camera.offset_y += speed_y * time_factor;

        // A slow frame can cross more than one row; each crossing scores
        // and regenerates the track
        let spacing_y = grid::row_spacing(viewport);
        while state.camera.offset_y >= spacing_y {
            state.camera.offset_y -= spacing_y;
            state.camera.y_loop += 1;
            let current_row = state.camera.y_loop;
            state.advance_path(current_row);
        }

        let speed_x = state.camera.speed_x * viewport.width / 100.0;
        state.camera.offset_x += speed_x * time_factor;

        let footprint = ship::ship_footprint(viewport);
        let vanishing = viewport.vanishing_point(tuning);
        if !ship::is_supported(
            &footprint,
            state.path.tiles(),
            &state.camera,
            viewport,
            vanishing.x,
        ) {
            state.enter_game_over();
        }
    }

    state.tick_voice_timer(dt);
}
