//! Procedural track generation
//!
//! A biased random walk emits tiles ahead of the camera. The walk is free to
//! wander, except at the corridor edges where the direction is overridden:
//! that hard clamp is what guarantees the track never leaves the visible
//! column span. The direction draw is the only non-deterministic input in
//! the whole simulation, so callers inject the RNG.

use rand::Rng;

use crate::consts::{END_INDEX, NB_TILES, PRE_FILL_NB_TILES, START_INDEX};

/// One tile's anchor corner in the infinite track lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoord {
    /// Column relative to the screen center (may be negative)
    pub col: i32,
    /// Absolute track row; never decreases once emitted
    pub row: u32,
}

/// Direction of one generation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Straight,
    Right,
    Left,
}

/// Ordered set of live track tiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackPath {
    tiles: Vec<TileCoord>,
}

impl TrackPath {
    pub fn new() -> Self {
        Self {
            // Turns overshoot by up to two tiles before truncation
            tiles: Vec::with_capacity(NB_TILES + 2),
        }
    }

    /// Live tiles, ordered back-to-front (rows non-decreasing)
    pub fn tiles(&self) -> &[TileCoord] {
        &self.tiles
    }

    /// Clear and seed the guaranteed-safe launch corridor: straight tiles
    /// at column 0, rows 0..=9
    pub fn reset(&mut self) {
        self.tiles.clear();
        for row in 0..PRE_FILL_NB_TILES {
            self.tiles.push(TileCoord { col: 0, row });
        }
    }

    /// Trim tiles behind `current_row`, then extend the walk until the tile
    /// count is back at `NB_TILES`.
    ///
    /// A straight step nets one row of forward progress, a turn nets two
    /// (the lateral shift plus the extra forward step). That asymmetry sets
    /// turn sharpness relative to scroll speed and is deliberate.
    pub fn advance<R: Rng + ?Sized>(&mut self, current_row: u32, rng: &mut R) {
        self.tiles.retain(|tile| tile.row >= current_row);

        let (mut col, mut row) = match self.tiles.last() {
            Some(last) => (last.col, last.row + 1),
            None => (0, 0),
        };

        while self.tiles.len() < NB_TILES {
            let direction = pick_direction(col, rng);
            self.tiles.push(TileCoord { col, row });
            match direction {
                Direction::Straight => {}
                Direction::Right => {
                    // Three tiles so the diagonal transition is itself
                    // walkable with no gap
                    col += 1;
                    self.tiles.push(TileCoord { col, row });
                    row += 1;
                    self.tiles.push(TileCoord { col, row });
                }
                Direction::Left => {
                    col -= 1;
                    self.tiles.push(TileCoord { col, row });
                    row += 1;
                    self.tiles.push(TileCoord { col, row });
                }
            }
            row += 1;
        }

        // A final turn can push past the target count; the cut tail is
        // re-emitted from the last kept tile on the next call
        self.tiles.truncate(NB_TILES);
    }
}

/// Draw a direction uniformly, then apply the corridor clamp. The draw
/// happens first so a forced turn consumes an RNG value exactly like a free
/// one.
fn pick_direction<R: Rng + ?Sized>(col: i32, rng: &mut R) -> Direction {
    let direction = match rng.random_range(0..3) {
        0 => Direction::Straight,
        1 => Direction::Right,
        _ => Direction::Left,
    };
    if col <= START_INDEX {
        return Direction::Right;
    }
    if col >= END_INDEX {
        return Direction::Left;
    }
    direction
}
