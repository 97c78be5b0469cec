//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per frame, driven by elapsed time
//! - Seeded RNG only (the direction draw is the sole random input)
//! - No rendering or platform dependencies

pub mod grid;
pub mod path;
pub mod projection;
pub mod ship;
pub mod state;
pub mod tick;

pub use grid::{Camera, TileBounds, line_x_from_index, line_y_from_index, row_spacing, tile_bounds};
pub use path::{Direction, TileCoord, TrackPath};
pub use projection::{Viewport, project};
pub use ship::{is_supported, ship_footprint};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{FrameInput, Steer, update};
