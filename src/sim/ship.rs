//! Ship footprint and the track-support test
//!
//! The ship is visually stationary; the world scrolls under it. The failure
//! mode is falling off the track, not hitting an obstacle: the ship is safe
//! only while at least one of its vertices stands inside a live tile.

use glam::Vec2;

use super::grid::{self, Camera};
use super::path::TileCoord;
use super::projection::Viewport;
use crate::consts::{SHIP_BASE_Y, SHIP_HEIGHT, SHIP_WIDTH};

/// World-space triangular footprint, recomputed every frame from the
/// viewport: horizontally centered, base at a fixed height fraction,
/// independent of the horizontal scroll.
///
/// Vertex order: left base, apex, right base.
pub fn ship_footprint(viewport: Viewport) -> [Vec2; 3] {
    let center_x = viewport.width / 2.0;
    let base_y = SHIP_BASE_Y * viewport.height;
    let half_width = SHIP_WIDTH * viewport.width / 2.0;
    let height = SHIP_HEIGHT * viewport.height;

    [
        Vec2::new(center_x - half_width, base_y),
        Vec2::new(center_x, base_y + height),
        Vec2::new(center_x + half_width, base_y),
    ]
}

/// True while the ship stands on the track.
///
/// Tiles are stored back-to-front with non-decreasing rows, so iteration
/// stops at the first look-ahead tile: anything more than one row ahead
/// cannot overlap the ship yet.
pub fn is_supported(
    footprint: &[Vec2; 3],
    tiles: &[TileCoord],
    camera: &Camera,
    viewport: Viewport,
    vanishing_x: f32,
) -> bool {
    for tile in tiles {
        if tile.row > camera.y_loop + 1 {
            break;
        }
        let bounds = grid::tile_bounds(*tile, camera, viewport, vanishing_x);
        if footprint.iter().any(|vertex| bounds.contains(*vertex)) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::V_LINES_SPACING;
    use crate::sim::path::TrackPath;

    fn viewport() -> Viewport {
        Viewport::new(900.0, 400.0).unwrap()
    }

    #[test]
    fn test_footprint_centered_and_sized() {
        let viewport = viewport();
        let [left, apex, right] = ship_footprint(viewport);
        assert_eq!(left.y, right.y);
        assert_eq!(apex.x, viewport.width / 2.0);
        assert_eq!(right.x - left.x, SHIP_WIDTH * viewport.width);
        assert_eq!(apex.y - left.y, SHIP_HEIGHT * viewport.height);
    }

    #[test]
    fn test_supported_on_launch_corridor() {
        // The start corridor at column 0 straddles the screen center, so a
        // fresh run is supported for modest horizontal drift either way
        let viewport = viewport();
        let mut path = TrackPath::new();
        path.reset();
        let footprint = ship_footprint(viewport);
        let vanishing_x = viewport.width / 2.0;

        let wiggle = V_LINES_SPACING * viewport.width / 4.0;
        for offset_x in [0.0, wiggle, -wiggle] {
            let camera = Camera {
                offset_x,
                ..Default::default()
            };
            assert!(
                is_supported(&footprint, path.tiles(), &camera, viewport, vanishing_x),
                "not supported at offset {offset_x}"
            );
        }
    }

    #[test]
    fn test_unsupported_when_track_scrolls_away() {
        let viewport = viewport();
        let mut path = TrackPath::new();
        path.reset();
        let footprint = ship_footprint(viewport);
        let camera = Camera {
            // Far more than one tile width of drift: the column 0 corridor
            // is nowhere near the ship any more
            offset_x: viewport.width * 2.0,
            ..Default::default()
        };
        assert!(!is_supported(
            &footprint,
            path.tiles(),
            &camera,
            viewport,
            viewport.width / 2.0
        ));
    }

    #[test]
    fn test_look_ahead_tiles_are_ignored() {
        // A tile two rows ahead overlaps nothing yet even if its column
        // matches the ship
        let viewport = viewport();
        let tiles = [TileCoord { col: 0, row: 2 }];
        let camera = Camera::default();
        let footprint = ship_footprint(viewport);
        assert!(!is_supported(
            &footprint,
            &tiles,
            &camera,
            viewport,
            viewport.width / 2.0
        ));
    }
}
