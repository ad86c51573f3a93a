//! Bounding box rasterization.
//!
//! Restricts the containment test to the cells covered by the triangle's
//! axis-aligned bounding box. For a counter-clockwise triangle every
//! contained point lies inside that box; for a clockwise one no point is
//! contained at all. A degenerate triangle (zero area) can contain points
//! anywhere on the grid, so it is handed to a full grid walk instead.

use super::{GridRasterizer, Rasterizer};
use crate::math::vec2::Vec2;
use crate::render::framebuffer::{FrameBuffer, Glyph};
use crate::triangle::Triangle;

#[derive(Debug, Default)]
pub struct BoundingBoxRasterizer;

impl BoundingBoxRasterizer {
    pub fn new() -> Self {
        BoundingBoxRasterizer {}
    }

    /// Inclusive cell range covering `[min, max]`, clipped to `0..len`.
    fn clip_span(min: f64, max: f64, len: usize) -> Option<(usize, usize)> {
        if len == 0 {
            return None;
        }
        let lo = min.floor().max(0.0);
        let hi = max.ceil().min((len - 1) as f64);
        if lo > hi {
            None
        } else {
            Some((lo as usize, hi as usize))
        }
    }
}

impl Rasterizer for BoundingBoxRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        let area = triangle.signed_area();
        if area == 0.0 {
            GridRasterizer::new().fill_triangle(triangle, buffer);
            return;
        }
        if area < 0.0 {
            return;
        }

        let [v0, v1, v2] = triangle.points;
        let span_x = Self::clip_span(
            v0.x.min(v1.x).min(v2.x),
            v0.x.max(v1.x).max(v2.x),
            buffer.width(),
        );
        let span_y = Self::clip_span(
            v0.y.min(v1.y).min(v2.y),
            v0.y.max(v1.y).max(v2.y),
            buffer.height(),
        );
        let (Some((min_x, max_x)), Some((min_y, max_y))) = (span_x, span_y) else {
            return;
        };

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if triangle.contains(Vec2::new(x as f64, y as f64)) {
                    buffer.set(x, y, Glyph::Filled);
                }
            }
        }
    }
}
