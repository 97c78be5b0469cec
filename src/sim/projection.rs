//! Vanishing-point perspective projection
//!
//! Maps a flat 2D world onto the screen so that the grid reads as a tunnel:
//! every point converges toward a single fixed vanishing point, with a
//! quartic depth falloff that exaggerates the near/far size differential.

use glam::{IVec2, Vec2};

use crate::ConfigError;
use crate::tuning::Tuning;

/// Live viewport dimensions, validated once at setup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(ConfigError::Viewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Screen-space point all perspective lines converge toward:
    /// mid-width, a tuned fraction of the height
    #[inline]
    pub fn vanishing_point(&self, tuning: &Tuning) -> Vec2 {
        Vec2::new(self.width / 2.0, tuning.perspective_point_y * self.height)
    }
}

/// Project a world-space point to integer screen coordinates.
///
/// World Y is first normalized into a linear depth and clamped at the
/// vanishing plane, so a point can never pass "through" the vanishing point
/// and invert the projection. The depth factor is raised to the 4th power:
/// a steeper curve than linear or quadratic, which is what sells the speed
/// tunnel sensation.
pub fn project(world: Vec2, viewport: Viewport, vanishing: Vec2) -> IVec2 {
    let mut lin_y = world.y * vanishing.y / viewport.height;
    if lin_y > vanishing.y {
        lin_y = vanishing.y;
    }

    let diff_x = world.x - vanishing.x;
    let diff_y = vanishing.y - lin_y;

    let factor = (diff_y / vanishing.y).powi(4);

    let tr_x = vanishing.x + diff_x * factor;
    let tr_y = vanishing.y - factor * vanishing.y;

    // Truncation toward zero, not rounding: grid lines must land on the
    // same pixel from frame to frame or the tunnel shimmers.
    IVec2::new(tr_x as i32, tr_y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Viewport, Vec2) {
        let viewport = Viewport::new(900.0, 400.0).unwrap();
        let vanishing = viewport.vanishing_point(&Tuning::default());
        (viewport, vanishing)
    }

    #[test]
    fn test_viewport_rejects_degenerate_sizes() {
        assert!(Viewport::new(0.0, 400.0).is_err());
        assert!(Viewport::new(900.0, -1.0).is_err());
        assert!(Viewport::new(f32::NAN, 400.0).is_err());
    }

    #[test]
    fn test_ground_plane_is_identity() {
        // At world Y = 0 the depth factor is 1, so X passes through unchanged
        let (viewport, vanishing) = setup();
        let projected = project(Vec2::new(123.0, 0.0), viewport, vanishing);
        assert_eq!(projected, IVec2::new(123, 0));
    }

    #[test]
    fn test_converges_toward_vanishing_point() {
        // For a fixed world X, climbing toward the horizon must strictly
        // shrink the horizontal distance to the vanishing point
        let (viewport, vanishing) = setup();
        let world_x = 700.0;
        let mut last_dist = f32::INFINITY;
        // Stop short of the horizon where truncation flattens everything to
        // the same pixel
        for step in 0..8 {
            let world_y = step as f32 * (viewport.height / 10.0);
            let projected = project(Vec2::new(world_x, world_y), viewport, vanishing);
            let dist = (projected.x as f32 - vanishing.x).abs();
            assert!(
                dist < last_dist,
                "distance {dist} did not shrink at step {step}"
            );
            last_dist = dist;
        }
    }

    #[test]
    fn test_clamps_beyond_vanishing_plane() {
        // Points past the horizon collapse onto the vanishing point instead
        // of re-expanding with an inverted factor
        let (viewport, vanishing) = setup();
        let projected = project(Vec2::new(50.0, viewport.height * 3.0), viewport, vanishing);
        assert_eq!(projected, IVec2::new(vanishing.x as i32, vanishing.y as i32));
    }

    #[test]
    fn test_deterministic() {
        let (viewport, vanishing) = setup();
        let world = Vec2::new(312.7, 188.3);
        let a = project(world, viewport, vanishing);
        let b = project(world, viewport, vanishing);
        assert_eq!(a, b);
    }

    #[test]
    fn test_truncates_toward_zero() {
        let (viewport, vanishing) = setup();
        // Ground plane passes X through unchanged, so the fraction survives
        // to the final cast
        let projected = project(Vec2::new(10.9, 0.0), viewport, vanishing);
        assert_eq!(projected.x, 10);
    }
}
