//! Triangle primitive and the half-plane containment test.

use crate::math::mat2::Mat2;
use crate::math::vec2::Vec2;

/// A triangle defined by three ordered vertices.
///
/// Vertex order fixes the orientation used by [`Triangle::contains`]: the
/// interior is the region on the left of every directed edge, which is the
/// inside of a counter-clockwise wound triangle. Only rotations and
/// non-negative scales preserve that winding; a reflection would invert it
/// and turn `contains` into an "outside" test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec2; 3],
}

impl Triangle {
    pub const fn new(v0: Vec2, v1: Vec2, v2: Vec2) -> Self {
        Self {
            points: [v0, v1, v2],
        }
    }

    pub fn vertices(&self) -> &[Vec2; 3] {
        &self.points
    }

    /// Returns a new triangle with every vertex mapped through `m`.
    pub fn transform(&self, m: Mat2) -> Self {
        Self {
            points: self.points.map(|v| v.apply(m)),
        }
    }

    /// Returns a new triangle with `offset` added to every vertex.
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            points: self.points.map(|v| v.add(offset)),
        }
    }

    /// Twice the signed area: positive for counter-clockwise winding,
    /// negative for clockwise, zero for a degenerate triangle.
    pub fn signed_area(&self) -> f64 {
        let [v0, v1, v2] = self.points;
        v1.subtract(v0).cross(v2.subtract(v0))
    }

    /// Returns true if `p` is on the non-negative side of all three edges
    /// (v0 -> v1), (v1 -> v2), (v2 -> v0). Points on an edge count as inside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        let [v0, v1, v2] = self.points;
        v1.subtract(v0).cross(p.subtract(v0)) >= 0.0
            && v2.subtract(v1).cross(p.subtract(v1)) >= 0.0
            && v0.subtract(v2).cross(p.subtract(v2)) >= 0.0
    }
}
