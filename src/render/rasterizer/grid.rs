use super::Rasterizer;
use crate::math::vec2::Vec2;
use crate::render::framebuffer::{FrameBuffer, Glyph};
use crate::triangle::Triangle;

/// Rasterizer that runs the containment test once for every grid cell.
///
/// This is the reference behaviour: it makes no assumption about winding or
/// degeneracy, so whatever [`Triangle::contains`] answers is what gets drawn.
#[derive(Debug, Default)]
pub struct GridRasterizer;

impl GridRasterizer {
    pub fn new() -> Self {
        GridRasterizer {}
    }
}

impl Rasterizer for GridRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                if triangle.contains(Vec2::new(x as f64, y as f64)) {
                    buffer.set(x, y, Glyph::Filled);
                }
            }
        }
    }
}
