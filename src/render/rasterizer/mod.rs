//! Triangle rasterization into the character grid.
//!
//! Two implementations share the [`Rasterizer`] trait and produce identical
//! frames:
//! - [`GridRasterizer`]: tests every cell of the grid
//! - [`BoundingBoxRasterizer`]: tests only the cells under the triangle's
//!   bounding box
//!
//! Cells are sampled at their integer coordinates `(x, y)`, in the same
//! space as the triangle. There is one sample per cell and no anti-aliasing.

mod bounding_box;
mod grid;

pub use bounding_box::BoundingBoxRasterizer;
pub use grid::GridRasterizer;

use super::framebuffer::FrameBuffer;
use crate::triangle::Triangle;

/// Trait for triangle rasterization algorithms.
pub trait Rasterizer {
    /// Mark every cell of `buffer` whose sample point the triangle contains
    /// as [`Glyph::Filled`](super::framebuffer::Glyph::Filled). Other cells
    /// are left untouched.
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer);

    /// Build a fresh `width * height` frame holding only `triangle`.
    fn rasterize(&self, triangle: &Triangle, width: usize, height: usize) -> FrameBuffer {
        let mut buffer = FrameBuffer::new(width, height);
        self.fill_triangle(triangle, &mut buffer);
        buffer
    }
}

/// Available rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterizerType {
    /// Visit every cell of the grid.
    #[default]
    Grid,
    /// Visit only the triangle's bounding box, clipped to the grid.
    BoundingBox,
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::Grid => write!(f, "Grid"),
            RasterizerType::BoundingBox => write!(f, "BoundingBox"),
        }
    }
}

/// Holds both rasterizer implementations and forwards to the active one.
#[derive(Debug, Default)]
pub struct RasterizerDispatcher {
    grid: GridRasterizer,
    bounding_box: BoundingBoxRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            grid: GridRasterizer::new(),
            bounding_box: BoundingBoxRasterizer::new(),
            active: rasterizer_type,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        match self.active {
            RasterizerType::Grid => self.grid.fill_triangle(triangle, buffer),
            RasterizerType::BoundingBox => self.bounding_box.fill_triangle(triangle, buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::mat2::Mat2;
    use crate::math::vec2::Vec2;

    fn sample_triangles() -> Vec<Triangle> {
        let base = Triangle::new(
            Vec2::new(10.0, -5.0),
            Vec2::new(0.0, 5.0),
            Vec2::new(-10.0, -5.0),
        );
        let mut triangles = vec![
            Triangle::new(
                Vec2::new(0.0, 0.0),
                Vec2::new(10.0, 0.0),
                Vec2::new(0.0, 10.0),
            ),
            // partly off the left and top edges
            base.transform(Mat2::scaling(3.0, 2.0)),
            // entirely off-grid
            base.translate(Vec2::new(500.0, 500.0)),
            // clockwise: contains nothing
            Triangle::new(
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 10.0),
                Vec2::new(10.0, 0.0),
            ),
            // degenerate: contains everything
            Triangle::new(Vec2::ONE, Vec2::ONE, Vec2::ONE),
        ];
        for step in 0..40 {
            triangles.push(
                base.transform(Mat2::rotation(0.17 * step as f64))
                    .transform(Mat2::uniform_scaling(0.05 * step as f64))
                    .transform(Mat2::scaling(2.0, 1.0))
                    .translate(Vec2::new(50.0, 12.5)),
            );
        }
        triangles
    }

    #[test]
    fn test_rasterizers_agree() {
        let grid = GridRasterizer::new();
        let bbox = BoundingBoxRasterizer::new();
        for tri in sample_triangles() {
            assert_eq!(
                grid.rasterize(&tri, 100, 25),
                bbox.rasterize(&tri, 100, 25),
                "mismatch for {:?}",
                tri
            );
        }
    }

    #[test]
    fn test_dispatcher_switches() {
        let mut dispatcher = RasterizerDispatcher::new(RasterizerType::Grid);
        assert_eq!(dispatcher.active_type(), RasterizerType::Grid);
        dispatcher.set_type(RasterizerType::BoundingBox);
        assert_eq!(dispatcher.active_type(), RasterizerType::BoundingBox);
        assert_eq!(dispatcher.active_type().to_string(), "BoundingBox");
    }
}
