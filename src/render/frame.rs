//! Per-frame projected geometry
//!
//! Builds the arrays the renderer draws verbatim: grid lines, track tile
//! quads, and the ship triangle, all already perspective-projected to
//! integer screen coordinates. Rebuilt every frame regardless of phase so
//! the tunnel keeps animating behind the menu.

use glam::{IVec2, Vec2};

use crate::consts::{END_INDEX, H_NB_LINES, NB_TILES, START_INDEX, V_NB_LINES};
use crate::sim::projection::{self, Viewport};
use crate::sim::state::GameState;
use crate::sim::{grid, ship};
use crate::tuning::Tuning;

/// A projected line segment
pub type ScreenLine = [IVec2; 2];
/// A projected quadrilateral, corners in draw order:
/// bottom-left, top-left, top-right, bottom-right
pub type ScreenQuad = [IVec2; 4];

/// Everything the drawing layer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    pub vertical_lines: Vec<ScreenLine>,
    pub horizontal_lines: Vec<ScreenLine>,
    pub tiles: Vec<ScreenQuad>,
    pub ship: [IVec2; 3],
}

/// Project the current state into screen-space draw lists
pub fn build_frame(state: &GameState, viewport: Viewport, tuning: &Tuning) -> RenderFrame {
    let vanishing = viewport.vanishing_point(tuning);
    let camera = &state.camera;

    let mut vertical_lines = Vec::with_capacity(V_NB_LINES);
    for index in START_INDEX..=END_INDEX {
        let x = grid::line_x_from_index(index as f32, viewport, vanishing.x, camera.offset_x);
        vertical_lines.push([
            projection::project(Vec2::new(x, 0.0), viewport, vanishing),
            projection::project(Vec2::new(x, viewport.height), viewport, vanishing),
        ]);
    }

    // Horizontal lines span the outermost vertical lines
    let x_min = grid::line_x_from_index(START_INDEX as f32, viewport, vanishing.x, camera.offset_x);
    let x_max = grid::line_x_from_index(END_INDEX as f32, viewport, vanishing.x, camera.offset_x);
    let mut horizontal_lines = Vec::with_capacity(H_NB_LINES);
    for index in 0..H_NB_LINES {
        let y = grid::line_y_from_index(index as f32, viewport, camera.offset_y);
        horizontal_lines.push([
            projection::project(Vec2::new(x_min, y), viewport, vanishing),
            projection::project(Vec2::new(x_max, y), viewport, vanishing),
        ]);
    }

    let mut tiles = Vec::with_capacity(NB_TILES);
    for tile in state.path.tiles() {
        let bounds = grid::tile_bounds(*tile, camera, viewport, vanishing.x);
        tiles.push([
            projection::project(Vec2::new(bounds.min.x, bounds.min.y), viewport, vanishing),
            projection::project(Vec2::new(bounds.min.x, bounds.max.y), viewport, vanishing),
            projection::project(Vec2::new(bounds.max.x, bounds.max.y), viewport, vanishing),
            projection::project(Vec2::new(bounds.max.x, bounds.min.y), viewport, vanishing),
        ]);
    }

    let ship = ship::ship_footprint(viewport)
        .map(|vertex| projection::project(vertex, viewport, vanishing));

    RenderFrame {
        vertical_lines,
        horizontal_lines,
        tiles,
        ship,
    }
}
