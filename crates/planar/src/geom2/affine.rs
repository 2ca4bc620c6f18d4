//! 2D affine matrix `x ↦ M x + t` (the 3x2 matrix of the graphics world).
//!
//! - Composition follows matrix multiplication: `(a * b).transform_point(p)`
//!   equals `a.transform_point(b.transform_point(p))`.
//! - Rotation angles are degrees, counterclockwise.

use nalgebra::{Matrix2, Vector2};

use super::scalar::{approx_eq, approx_eq_vec, EPSILON};

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    /// Build from the six coefficients `[a, b, c, d, tx, ty]`, i.e.
    /// `x' = a x + c y + tx`, `y' = b x + d y + ty` (column-major, as canvas APIs use).
    #[inline]
    pub fn from_coefficients(c: [f64; 6]) -> Self {
        Self {
            m: Matrix2::new(c[0], c[2], c[1], c[3]),
            t: Vector2::new(c[4], c[5]),
        }
    }

    /// Inverse of `from_coefficients`.
    #[inline]
    pub fn coefficients(&self) -> [f64; 6] {
        [
            self.m[(0, 0)],
            self.m[(1, 0)],
            self.m[(0, 1)],
            self.m[(1, 1)],
            self.t.x,
            self.t.y,
        ]
    }

    #[inline]
    pub fn identity() -> Self {
        Self::translation(Vector2::zeros())
    }

    #[inline]
    pub fn translation(t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }

    /// Counterclockwise rotation about the origin by `deg` degrees.
    #[inline]
    pub fn rotation(deg: f64) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        Self {
            m: Matrix2::new(c, -s, s, c),
            t: Vector2::zeros(),
        }
    }

    /// Axis-aligned (possibly non-uniform, possibly negative) scale about the origin.
    #[inline]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            m: Matrix2::new(sx, 0.0, 0.0, sy),
            t: Vector2::zeros(),
        }
    }

    /// `self ∘ other`: apply `other` first.
    #[inline]
    pub fn compose(&self, other: &Affine2) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    /// None if `|det| < EPSILON²`; otherwise the adjugate over the determinant.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < EPSILON * EPSILON {
            return None;
        }
        let [a, b, c, d, tx, ty] = self.coefficients();
        let m = Matrix2::new(d, -c, -b, a) / det;
        Some(Self {
            t: -(m * Vector2::new(tx, ty)),
            m,
        })
    }

    /// Signed area scale of the linear part; negative for mirrorings.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m.determinant()
    }

    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.determinant() > 0.0
    }

    #[inline]
    pub fn transform_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }

    /// Linear part only; translation does not apply to directions.
    #[inline]
    pub fn transform_vector(&self, v: Vector2<f64>) -> Vector2<f64> {
        self.m * v
    }

    /// Tolerant equality of all six coefficients.
    pub fn approx(&self, other: &Affine2) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| approx_eq(*a, *b))
            && approx_eq_vec(self.t, other.t)
    }
}

impl std::ops::Mul for Affine2 {
    type Output = Affine2;
    #[inline]
    fn mul(self, rhs: Affine2) -> Self::Output {
        self.compose(&rhs)
    }
}
