//! Infinite directed line in normal/offset form.
//!
//! Representation
//! - `theta`: bearing (degrees) of the unit normal `n = (cos θ, sin θ)`,
//!   always normalized into `[0, 360)`.
//! - `offset`: signed distance from the origin along `n`; the line is
//!   `{ p : n·p = offset }`.
//! - The direction of travel is `theta - 90°`, so the normal points to the
//!   left of travel. Reversing the direction gives `theta + 180°` and
//!   `-offset`: a different value that is only `same`, not `approx`.
//!
//! Equality, parallelism and perpendicularity are defined on `(theta, offset)`
//! alone; the implicit `ax + by + c = 0` form is an output conversion only.

use nalgebra::{Matrix2, Vector2};

use super::affine::Affine2;
use super::scalar::{angle_of, approx_eq, modulo, normal_vector, wrapped_diff};

/// Directed infinite line `n(theta)·p = offset`.
///
/// Invariants:
/// - `theta ∈ [0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    theta: f64,
    offset: f64,
}

impl Line {
    /// The x axis, traversed towards +x.
    pub const X_AXIS: Line = Line {
        theta: 90.0,
        offset: 0.0,
    };
    /// The y axis, traversed towards +y.
    pub const Y_AXIS: Line = Line {
        theta: 180.0,
        offset: 0.0,
    };

    /// Line with normal bearing `theta` (any real, normalized here) and `offset`.
    #[inline]
    pub fn of(theta: f64, offset: f64) -> Self {
        Self {
            theta: modulo(theta, 360.0),
            offset,
        }
    }

    /// Line through `p1` and `p2`, directed `p1 -> p2`.
    ///
    /// `p1 == p2` is not rejected: the direction degenerates to 0° (normal 90°).
    #[inline]
    pub fn from_points(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self::from_point_direction(p1, angle_of(p2 - p1))
    }

    /// Line through `p` travelling along bearing `degrees`.
    #[inline]
    pub fn from_point_direction(p: Vector2<f64>, degrees: f64) -> Self {
        let theta = modulo(degrees + 90.0, 360.0);
        Self {
            theta,
            offset: p.dot(&normal_vector(theta)),
        }
    }

    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Unit normal `(cos θ, sin θ)`.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        normal_vector(self.theta)
    }

    /// Unit direction of travel (bearing `theta - 90°`).
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        normal_vector(self.theta - 90.0)
    }

    /// Foot of the perpendicular from the origin, `offset * n`.
    #[inline]
    pub fn foot(&self) -> Vector2<f64> {
        self.normal() * self.offset
    }

    /// Implicit coefficients `(a, b, c)` with `a x + b y + c = 0` and `a² + b² = 1`.
    #[inline]
    pub fn implicit(&self) -> (f64, f64, f64) {
        let n = self.normal();
        (n.x, n.y, -self.offset)
    }

    /// `n·p - offset`: positive on the normal side (left of travel).
    #[inline]
    pub fn signed_distance(&self, p: Vector2<f64>) -> f64 {
        p.dot(&self.normal()) - self.offset
    }

    #[inline]
    pub fn distance(&self, p: Vector2<f64>) -> f64 {
        self.signed_distance(p).abs()
    }

    /// Orthogonal projection of `p` onto the line.
    #[inline]
    pub fn closest(&self, p: Vector2<f64>) -> Vector2<f64> {
        p - self.normal() * self.signed_distance(p)
    }

    /// Tolerant, direction-sensitive equality of `(theta, offset)`.
    pub fn approx(&self, other: &Line) -> bool {
        bearing_eq(self.theta, other.theta, 360.0) && approx_eq(self.offset, other.offset)
    }

    /// Same point set, either direction.
    pub fn same(&self, other: &Line) -> bool {
        self.approx(other) || self.invert().approx(other)
    }

    /// Parallel or anti-parallel (thetas agree modulo 180).
    pub fn is_parallel(&self, other: &Line) -> bool {
        bearing_eq(self.theta, other.theta, 180.0)
    }

    pub fn is_perpendicular(&self, other: &Line) -> bool {
        approx_eq(modulo(self.theta - other.theta, 180.0), 90.0)
    }

    /// Same line, opposite direction.
    #[inline]
    pub fn invert(&self) -> Self {
        Self {
            theta: modulo(self.theta + 180.0, 360.0),
            offset: -self.offset,
        }
    }

    /// Unique crossing point; None for parallel, anti-parallel or coincident lines.
    pub fn intersection(&self, other: &Line) -> Option<Vector2<f64>> {
        let n1 = self.normal();
        let n2 = other.normal();
        let det = n1.x * n2.y - n2.x * n1.y;
        if approx_eq(det, 0.0) {
            return None;
        }
        let (c1, c2) = (self.offset, other.offset);
        Some(Vector2::new(
            (c1 * n2.y - c2 * n1.y) / det,
            (n1.x * c2 - n2.x * c1) / det,
        ))
    }

    /// Reflection across this line: `M = I - 2 n nᵀ`, `t = 2 offset n`.
    pub fn reflection_matrix(&self) -> Affine2 {
        let n = self.normal();
        Affine2 {
            m: Matrix2::identity() - (n * n.transpose()) * 2.0,
            t: n * (2.0 * self.offset),
        }
    }

    #[inline]
    pub fn reflect_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.reflection_matrix().transform_point(p)
    }

    /// Image of the line under `f`, keeping its direction of travel.
    ///
    /// Maps two witness points (the foot and one unit further along the line)
    /// and rebuilds from them; `(theta, offset)` does not transform linearly
    /// under non-uniform scale or shear.
    pub fn transform(&self, f: &Affine2) -> Self {
        let p0 = self.foot();
        let p1 = p0 + self.direction();
        Self::from_points(f.transform_point(p0), f.transform_point(p1))
    }
}

/// `approx_eq` on bearings taken modulo `period`: `b` is first moved to the
/// representative nearest `a`, so the relative tolerance scales with `a`.
#[inline]
fn bearing_eq(a: f64, b: f64, period: f64) -> bool {
    approx_eq(a, a - wrapped_diff(a, b, period))
}
