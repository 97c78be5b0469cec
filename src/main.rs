//! Galaxy Runner entry point
//!
//! Headless demo: drives the simulation at a fixed 60 Hz step with a
//! scripted pilot and logs events and the final score. A graphical shell
//! consumes the same `update` + `build_frame` surface.

use std::process::ExitCode;

use galaxy_runner::render::build_frame;
use galaxy_runner::sim::{FrameInput, GamePhase, GameState, Steer, Viewport, update};
use galaxy_runner::tuning::Tuning;
use galaxy_runner::ui;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x474c52);

    let tuning = match args.next() {
        Some(path) => {
            let json = match std::fs::read_to_string(&path) {
                Ok(json) => json,
                Err(err) => {
                    log::error!("cannot read tuning file {path}: {err}");
                    return ExitCode::FAILURE;
                }
            };
            match Tuning::from_json(&json) {
                Ok(tuning) => tuning,
                Err(err) => {
                    log::error!("bad tuning file {path}: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => Tuning::default(),
    };

    let viewport = match Viewport::new(900.0, 400.0) {
        Ok(viewport) => viewport,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Galaxy Runner starting (seed {seed})");

    let mut state = GameState::new(seed);
    let dt = 1.0 / 60.0;

    // Press start on the first frame, then hold a gentle zig-zag; a minute
    // of play at most
    let mut game_over_frames = 0u32;
    for frame in 0..3600u32 {
        let input = FrameInput {
            start: frame == 0,
            steer: match (frame / 45) % 4 {
                1 => Steer::Left,
                3 => Steer::Right,
                _ => Steer::Neutral,
            },
        };
        update(&mut state, &input, viewport, &tuning, dt);

        let geometry = build_frame(&state, viewport, &tuning);
        debug_assert_eq!(geometry.tiles.len(), galaxy_runner::consts::NB_TILES);

        for event in state.drain_events() {
            log::info!("event: {event:?} ({})", ui::score_text(&state));
        }

        // Linger long enough after game over for the delayed voice cue
        if state.phase == GamePhase::GameOver {
            game_over_frames += 1;
            if game_over_frames > 200 {
                break;
            }
        }
    }

    let menu = ui::menu_model(state.phase);
    println!("{} - {}", menu.title, ui::score_text(&state));
    ExitCode::SUCCESS
}
