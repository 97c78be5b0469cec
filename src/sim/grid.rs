//! Grid and tile geometry
//!
//! Converts abstract lattice indices (column, row) into world-space
//! coordinates, parameterized by the camera scroll offsets. Shared by the
//! render frame builder, the path generator, and the support test, so all
//! three always agree on where a tile actually is.

use glam::Vec2;

use super::path::TileCoord;
use super::projection::Viewport;
use crate::consts::{H_LINES_SPACING, V_LINES_SPACING};

/// Camera scroll state, owned by the game coordinator.
/// `y_loop` doubles as the score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    /// Forward scroll fraction, kept below one row spacing by the update loop
    pub offset_y: f32,
    /// Rows crossed since reset (monotonically increasing)
    pub y_loop: u32,
    /// Horizontal scroll accumulator (unbounded)
    pub offset_x: f32,
    /// Steering velocity: -speed_x, 0, or +speed_x
    pub speed_x: f32,
}

/// World-space distance between consecutive grid rows
#[inline]
pub fn row_spacing(viewport: Viewport) -> f32 {
    H_LINES_SPACING * viewport.height
}

/// World X of a vertical grid line. The -0.5 centers lines between integer
/// column boundaries so column 0 straddles the screen center.
#[inline]
pub fn line_x_from_index(index: f32, viewport: Viewport, vanishing_x: f32, offset_x: f32) -> f32 {
    vanishing_x + (index - 0.5) * (V_LINES_SPACING * viewport.width) + offset_x
}

/// World Y of a horizontal grid line at a camera-relative row index
#[inline]
pub fn line_y_from_index(index: f32, viewport: Viewport, offset_y: f32) -> f32 {
    index * row_spacing(viewport) - offset_y
}

/// Axis-aligned world-space bounds of one tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl TileBounds {
    /// Inclusive containment test
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }
}

/// World-space bounds of a tile. Tiles are stored in absolute track rows;
/// the `row - y_loop` rebase puts them in camera-relative space every call.
pub fn tile_bounds(
    tile: TileCoord,
    camera: &Camera,
    viewport: Viewport,
    vanishing_x: f32,
) -> TileBounds {
    let rel_row = (tile.row as i64 - camera.y_loop as i64) as f32;
    let min = Vec2::new(
        line_x_from_index(tile.col as f32, viewport, vanishing_x, camera.offset_x),
        line_y_from_index(rel_row, viewport, camera.offset_y),
    );
    let max = Vec2::new(
        line_x_from_index(tile.col as f32 + 1.0, viewport, vanishing_x, camera.offset_x),
        line_y_from_index(rel_row + 1.0, viewport, camera.offset_y),
    );
    TileBounds { min, max }
}
