//! Scalar helpers and the single tolerance used by every predicate.
//!
//! Policy
//! - One fixed relative epsilon for all tolerant comparisons. There is no
//!   per-call override; callers that need a different tolerance compare the
//!   raw fields themselves.
//! - Angles are degrees everywhere in the public API.

use nalgebra::Vector2;

/// Relative tolerance used by `approx_eq` and everything built on it.
pub const EPSILON: f64 = 1e-6;

/// Tolerant scalar equality: `|a-b| <= EPSILON * max(1, |a|, |b|)`.
///
/// The `1` floor makes the test absolute near zero and relative elsewhere.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * 1.0_f64.max(a.abs()).max(b.abs())
}

/// Componentwise `approx_eq`.
#[inline]
pub fn approx_eq_vec(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

/// Euclidean remainder: result lies in `[0, m)` for `m > 0`.
#[inline]
pub fn modulo(x: f64, m: f64) -> f64 {
    let r = x.rem_euclid(m);
    // rem_euclid can round up to exactly `m` for tiny negative inputs.
    if r >= m {
        0.0
    } else {
        r
    }
}

/// Difference `a - b` wrapped into `[-period/2, period/2)`.
#[inline]
pub(crate) fn wrapped_diff(a: f64, b: f64, period: f64) -> f64 {
    let half = period / 2.0;
    modulo(a - b + half, period) - half
}

/// Unit vector at `deg` degrees counterclockwise from +x.
#[inline]
pub fn normal_vector(deg: f64) -> Vector2<f64> {
    let (s, c) = deg.to_radians().sin_cos();
    Vector2::new(c, s)
}

/// Angle of `v` in degrees, in `(-180, 180]`. Zero for the zero vector.
#[inline]
pub fn angle_of(v: Vector2<f64>) -> f64 {
    v.y.atan2(v.x).to_degrees()
}
