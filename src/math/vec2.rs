//! 2D vector used for triangle vertices and grid sample points.
//!
//! `Vec2` is a plain value: every operation returns a new vector.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use super::mat2::Mat2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    pub const RIGHT: Self = Self { x: 1.0, y: 0.0 };
    pub const UP: Self = Self { x: 0.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn subtract(&self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub fn negate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    pub fn scale(&self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the z component of the 3D cross product of `self` and `other`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`, negative when
    /// clockwise, zero when the two are parallel.
    pub fn cross(&self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Maps the vector through `m`: `(x, y) -> (a*x + b*y, c*x + d*y)`.
    pub fn apply(&self, m: Mat2) -> Self {
        Self {
            x: self.x * m.a + self.y * m.b,
            y: self.x * m.c + self.y * m.d,
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {:.6}\t{:.6} ]", self.x, self.y)
    }
}

/// Component-wise addition of two vectors.
impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2::add(&self, rhs)
    }
}

/// Component-wise subtraction of two vectors.
impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Row vector times matrix, same as [`Vec2::apply`].
impl Mul<Mat2> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Mat2) -> Self::Output {
        self.apply(rhs)
    }
}

impl AbsDiffEq for Vec2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vec2 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn samples() -> Vec<Vec2> {
        vec![
            Vec2::ZERO,
            Vec2::new(1.0, 2.0),
            Vec2::new(-3.5, 0.25),
            Vec2::new(10.0, -5.0),
            Vec2::new(-7.0, -11.0),
        ]
    }

    #[test]
    fn test_add_is_commutative() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.add(b), b.add(a));
            }
        }
    }

    #[test]
    fn test_subtract_matches_adding_negation() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.subtract(b), a.add(b.negate()));
            }
        }
    }

    #[test]
    fn test_dot_is_symmetric() {
        let a = Vec2::new(2.0, 3.0);
        let b = Vec2::new(-1.0, 4.0);
        assert_eq!(a.dot(b), 10.0);
        assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn test_cross_of_self_is_zero() {
        for a in samples() {
            assert_eq!(a.cross(a), 0.0);
        }
    }

    #[test]
    fn test_cross_is_anticommutative() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.cross(b), -b.cross(a));
            }
        }
        // +X to +Y is a counter-clockwise turn
        assert_eq!(Vec2::RIGHT.cross(Vec2::UP), 1.0);
    }

    #[test]
    fn test_apply_is_linear() {
        let m = Mat2::new(0.3, -1.2, 2.5, 0.7);
        for a in samples() {
            for b in samples() {
                assert_relative_eq!(
                    a.add(b).apply(m),
                    a.apply(m).add(b.apply(m)),
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_apply_row_major() {
        let v = Vec2::new(2.0, 3.0);
        let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.apply(m), Vec2::new(8.0, 18.0));
        assert_eq!(v * m, v.apply(m));
    }

    #[test]
    fn test_operators_match_methods() {
        let a = Vec2::new(1.5, -2.0);
        let b = Vec2::new(0.5, 4.0);
        assert_eq!(a + b, a.add(b));
        assert_eq!(a - b, a.subtract(b));
        assert_eq!(-a, a.negate());
    }

    #[test]
    fn test_scale() {
        assert_eq!(Vec2::new(10.0, -5.0).scale(0.5), Vec2::new(5.0, -2.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec2::new(1.0, -0.5).to_string(), "[ 1.000000\t-0.500000 ]");
    }
}
