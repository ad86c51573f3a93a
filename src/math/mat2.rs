//! 2x2 linear transform using row-major storage.
//!
//! # Convention
//! - Elements are stored as `(a, b, c, d)` = `[[a, b], [c, d]]`
//! - A vector is mapped as `(x, y) -> (a*x + b*y, c*x + d*y)` (see [`Vec2::apply`])
//! - Composition reads left-to-right: `a.then(b)` applies `a` first, then `b`
//!
//! [`Vec2::apply`]: super::vec2::Vec2::apply

use std::fmt;
use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Mat2 {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Mat2 { a, b, c, d }
    }

    pub const fn identity() -> Self {
        Mat2::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Creates a counter-clockwise rotation by `angle` radians.
    pub fn rotation(angle: f64) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Mat2::new(c, -s, s, c)
    }

    /// Creates a scale matrix with independent x and y factors.
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Mat2::new(sx, 0.0, 0.0, sy)
    }

    pub const fn uniform_scaling(s: f64) -> Self {
        Mat2::scaling(s, s)
    }

    /// Returns the single matrix equivalent to applying `self` and then `next`.
    ///
    /// For every vector `v`: `v.apply(self.then(next)) == v.apply(self).apply(next)`.
    pub fn then(&self, next: Mat2) -> Mat2 {
        next * *self
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Mat2::identity()
    }
}

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ {:.6}\t{:.6} ]\n[ {:.6}\t{:.6} ]",
            self.a, self.b, self.c, self.d
        )
    }
}

/// Matrix product `self * rhs`: the result applies `rhs` first, then `self`.
impl Mul<Mat2> for Mat2 {
    type Output = Mat2;

    fn mul(self, rhs: Mat2) -> Self::Output {
        Mat2::new(
            self.a * rhs.a + self.b * rhs.c,
            self.a * rhs.b + self.b * rhs.d,
            self.c * rhs.a + self.d * rhs.c,
            self.c * rhs.b + self.d * rhs.d,
        )
    }
}

impl AbsDiffEq for Mat2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.c.abs_diff_eq(&other.c, epsilon)
            && self.d.abs_diff_eq(&other.d, epsilon)
    }
}

impl RelativeEq for Mat2 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
            && self.c.relative_eq(&other.c, epsilon, max_relative)
            && self.d.relative_eq(&other.d, epsilon, max_relative)
    }
}
