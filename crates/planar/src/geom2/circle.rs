//! Circle `(center, radius)` with `radius >= 0`.

use nalgebra::Vector2;

use super::rect::Rect;
use super::scalar::{approx_eq, approx_eq_vec, normal_vector};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Vector2<f64>,
    radius: f64,
}

impl Circle {
    /// Negative radii are taken by magnitude.
    #[inline]
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Circumcircle of three points; None when they are (numerically) collinear.
    pub fn from_three_points(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Option<Self> {
        let ab = b - a;
        let ac = c - a;
        let d = 2.0 * (ab.x * ac.y - ab.y * ac.x);
        if approx_eq(d, 0.0) {
            return None;
        }
        let ab2 = ab.norm_squared();
        let ac2 = ac.norm_squared();
        let off = Vector2::new(ac.y * ab2 - ab.y * ac2, ab.x * ac2 - ac.x * ab2) / d;
        Some(Self {
            center: a + off,
            radius: off.norm(),
        })
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }
    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
    #[inline]
    pub fn circumference(&self) -> f64 {
        std::f64::consts::TAU * self.radius
    }

    /// Point on the circle at bearing `deg` from the centre.
    #[inline]
    pub fn point_at(&self, deg: f64) -> Vector2<f64> {
        self.center + normal_vector(deg) * self.radius
    }

    /// Closed disc membership, tolerant on the boundary.
    #[inline]
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        let d = (p - self.center).norm();
        d <= self.radius || approx_eq(d, self.radius)
    }

    /// Nearest point on the circle itself. The centre maps to bearing 0.
    pub fn closest(&self, p: Vector2<f64>) -> Vector2<f64> {
        let v = p - self.center;
        let len = v.norm();
        if len == 0.0 {
            return self.point_at(0.0);
        }
        self.center + v * (self.radius / len)
    }

    /// Distance to the disc; zero inside.
    #[inline]
    pub fn distance(&self, p: Vector2<f64>) -> f64 {
        ((p - self.center).norm() - self.radius).max(0.0)
    }

    /// Closed discs overlap (tangency counts).
    #[inline]
    pub fn intersects(&self, other: &Circle) -> bool {
        let d = (self.center - other.center).norm();
        let r = self.radius + other.radius;
        d <= r || approx_eq(d, r)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, Vector2::repeat(self.diameter()))
    }

    pub fn approx(&self, other: &Circle) -> bool {
        approx_eq_vec(self.center, other.center) && approx_eq(self.radius, other.radius)
    }
}
