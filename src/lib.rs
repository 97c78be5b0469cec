//! Galaxy Runner - a perspective grid tunnel runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (projection, track generation, collision, game state)
//! - `render`: Per-frame screen-space geometry handed to the drawing layer
//! - `tuning`: Data-driven game balance
//! - `ui`: Menu strings and score text pushed to the overlay

pub mod render;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use sim::{FrameInput, GameEvent, GamePhase, GameState, Steer, Viewport, update};
pub use tuning::Tuning;

use std::fmt;

/// Game configuration constants
pub mod consts {
    /// Number of vertical grid lines
    pub const V_NB_LINES: usize = 8;
    /// Vertical line spacing as a fraction of viewport width
    pub const V_LINES_SPACING: f32 = 0.4;
    /// Number of horizontal grid lines
    pub const H_NB_LINES: usize = 8;
    /// Horizontal line spacing as a fraction of viewport height
    pub const H_LINES_SPACING: f32 = 0.15;

    /// Track tiles kept alive after every generation pass
    pub const NB_TILES: usize = 16;
    /// Straight tiles seeded at reset (guaranteed-safe launch corridor)
    pub const PRE_FILL_NB_TILES: u32 = 10;

    /// Ship footprint as fractions of the viewport
    pub const SHIP_WIDTH: f32 = 0.1;
    pub const SHIP_HEIGHT: f32 = 0.035;
    pub const SHIP_BASE_Y: f32 = 0.04;

    /// Delay before the game-over voice cue, in seconds
    pub const GAME_OVER_VOICE_DELAY: f32 = 3.0;

    /// Leftmost vertical line index (columns are centered on 0)
    pub const START_INDEX: i32 = -(V_NB_LINES as i32) / 2 + 1;
    /// Rightmost vertical line index
    pub const END_INDEX: i32 = START_INDEX + V_NB_LINES as i32 - 1;
}

/// Fatal setup errors. Everything here is checked once at configuration
/// time; the per-frame loop never produces an error.
#[derive(Debug)]
pub enum ConfigError {
    /// Viewport must have positive dimensions
    Viewport { width: f32, height: f32 },
    /// Vanishing point height fraction must be positive (the projection
    /// divides by it)
    VanishingPoint(f32),
    /// Scroll speeds must be positive
    Speed(f32),
    /// Tuning file could not be parsed
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Viewport { width, height } => {
                write!(f, "viewport must have positive dimensions, got {width}x{height}")
            }
            ConfigError::VanishingPoint(frac) => {
                write!(f, "vanishing point height fraction must be positive, got {frac}")
            }
            ConfigError::Speed(speed) => {
                write!(f, "scroll speed must be positive, got {speed}")
            }
            ConfigError::Parse(err) => write!(f, "invalid tuning file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            _ => None,
        }
    }
}
