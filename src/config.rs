//! Compile-time animation settings.

use crate::math::vec2::Vec2;
use crate::triangle::Triangle;

pub const GRID_WIDTH: usize = 100;
pub const GRID_HEIGHT: usize = 25;
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Radians added to the base triangle's rotation every frame.
pub const ROTATION_STEP: f64 = 0.02;
pub const X_STRETCH: f64 = 2.0;
/// Radians of the scale oscillation advanced per tick.
pub const SCALE_FREQUENCY: f64 = 0.1;

/// Isoceles triangle centred near the origin, wound counter-clockwise.
pub const BASE_TRIANGLE: Triangle = Triangle::new(
    Vec2::new(10.0, -5.0),
    Vec2::new(0.0, 5.0),
    Vec2::new(-10.0, -5.0),
);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub width: usize,
    pub height: usize,
    pub frame_interval_ms: u64,
    pub base_triangle: Triangle,
    pub rotation_step: f64,
    pub x_stretch: f64,
    pub scale_frequency: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            frame_interval_ms: FRAME_INTERVAL_MS,
            base_triangle: BASE_TRIANGLE,
            rotation_step: ROTATION_STEP,
            x_stretch: X_STRETCH,
            scale_frequency: SCALE_FREQUENCY,
        }
    }
}

impl AnimationConfig {
    /// Offset that moves the origin to the middle of the grid.
    pub fn recenter(&self) -> Vec2 {
        Vec2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_recenter() {
        assert_eq!(AnimationConfig::default().recenter(), Vec2::new(50.0, 12.5));
    }

    #[test]
    fn test_base_triangle_is_counter_clockwise() {
        assert!(BASE_TRIANGLE.signed_area() > 0.0);
    }
}
