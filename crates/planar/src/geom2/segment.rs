//! Finite directed segment `p1 -> p2`.
//!
//! Intersection goes through the supporting `Line`s, then clips to both
//! segments with the parametric test `t ∈ [0, 1]` (with `EPSILON` slack), so
//! endpoint touches count and near-misses past an endpoint do not.

use nalgebra::Vector2;

use super::affine::Affine2;
use super::line::Line;
use super::rect::Rect;
use super::scalar::{approx_eq_vec, EPSILON};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self { p1, p2 }
    }

    /// Supporting line, directed `p1 -> p2`.
    #[inline]
    pub fn line(&self) -> Line {
        Line::from_points(self.p1, self.p2)
    }

    /// Unnormalized `p2 - p1`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.p2 - self.p1
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2<f64> {
        (self.p1 + self.p2) / 2.0
    }

    #[inline]
    pub fn reverse(&self) -> Segment {
        Segment::new(self.p2, self.p1)
    }

    /// `p1 + t (p2 - p1)`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Vector2<f64> {
        self.p1 + self.direction() * t
    }

    /// Unclamped projection parameter of `p`; `p1` for a zero-length segment.
    fn param_of(&self, p: Vector2<f64>) -> f64 {
        let d = self.direction();
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            return 0.0;
        }
        (p - self.p1).dot(&d) / len2
    }

    /// Nearest point of the segment (projection clamped to the endpoints).
    #[inline]
    pub fn closest(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.point_at(self.param_of(p).clamp(0.0, 1.0))
    }

    #[inline]
    pub fn distance(&self, p: Vector2<f64>) -> f64 {
        (p - self.closest(p)).norm()
    }

    fn spans(&self, p: Vector2<f64>) -> bool {
        if self.direction().norm_squared() == 0.0 {
            return approx_eq_vec(p, self.p1);
        }
        let t = self.param_of(p);
        (-EPSILON..=1.0 + EPSILON).contains(&t)
    }

    /// Crossing point of two segments.
    ///
    /// None when they miss, or when they are parallel (collinear overlaps
    /// included, as there is no unique point).
    pub fn intersection(&self, other: &Segment) -> Option<Vector2<f64>> {
        let p = self.line().intersection(&other.line())?;
        (self.spans(p) && other.spans(p)).then_some(p)
    }

    #[inline]
    pub fn transform(&self, f: &Affine2) -> Segment {
        Segment::new(f.transform_point(self.p1), f.transform_point(self.p2))
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.p1, self.p2)
    }

    /// Tolerant, order-sensitive endpoint equality.
    pub fn approx(&self, other: &Segment) -> bool {
        approx_eq_vec(self.p1, other.p1) && approx_eq_vec(self.p2, other.p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn seg(a: [f64; 2], b: [f64; 2]) -> Segment {
        Segment::new(vector![a[0], a[1]], vector![b[0], b[1]])
    }

    #[test]
    fn metrics() {
        let s = seg([0.0, 0.0], [3.0, 4.0]);
        assert_eq!(s.length(), 5.0);
        assert_eq!(s.midpoint(), vector![1.5, 2.0]);
        assert_eq!(s.reverse().p1, s.p2);
        assert_eq!(s.bounds().max(), vector![3.0, 4.0]);
        assert!(s.line().approx(&Line::from_points(s.p1, s.p2)));
    }

    #[test]
    fn closest_clamps_to_endpoints() {
        let s = seg([0.0, 0.0], [2.0, 0.0]);
        assert_eq!(s.closest(vector![1.0, 5.0]), vector![1.0, 0.0]);
        assert_eq!(s.closest(vector![-3.0, 1.0]), vector![0.0, 0.0]);
        assert_eq!(s.closest(vector![9.0, -1.0]), vector![2.0, 0.0]);
        assert_eq!(s.distance(vector![5.0, 4.0]), 5.0);
        let dot = seg([1.0, 1.0], [1.0, 1.0]);
        assert_eq!(dot.distance(vector![4.0, 5.0]), 5.0);
    }

    #[test]
    fn crossing_segments() {
        let a = seg([0.0, 0.0], [2.0, 2.0]);
        let b = seg([0.0, 2.0], [2.0, 0.0]);
        let p = a.intersection(&b).expect("crossing");
        assert!(approx_eq_vec(p, vector![1.0, 1.0]));
        assert_eq!(a.intersection(&b).is_some(), b.intersection(&a).is_some());
    }

    #[test]
    fn endpoint_touch_counts() {
        let a = seg([0.0, 0.0], [1.0, 0.0]);
        let b = seg([1.0, 0.0], [1.0, 1.0]);
        assert!(approx_eq_vec(a.intersection(&b).unwrap(), vector![1.0, 0.0]));
        // T-junction
        let c = seg([0.5, -1.0], [0.5, 0.0]);
        assert!(approx_eq_vec(a.intersection(&c).unwrap(), vector![0.5, 0.0]));
    }

    #[test]
    fn lines_cross_but_segments_miss() {
        let a = seg([0.0, 0.0], [1.0, 0.0]);
        // supporting lines meet at (2, 0), beyond `a`
        let b = seg([2.0, -1.0], [2.0, 1.0]);
        assert!(a.intersection(&b).is_none());
        // meet at (0.5, 0), beyond `c`
        let c = seg([0.5, 1.0], [0.5, 3.0]);
        assert!(a.intersection(&c).is_none());
        // only one segment reaches the crossing: (3, 0) lies on `long` but not on `d`
        let long = seg([0.0, 0.0], [4.0, 0.0]);
        let d = seg([3.0, 1.0], [3.0, 0.5]);
        assert!(long.intersection(&d).is_none());
    }

    #[test]
    fn zero_length_segment_only_hits_its_point() {
        let dot = seg([3.0, 5.0], [3.0, 5.0]);
        let diag = seg([0.0, 0.0], [10.0, 10.0]);
        assert!(dot.intersection(&diag).is_none());
        assert!(diag.intersection(&dot).is_none());
        let on = seg([5.0, 5.0], [5.0, 5.0]);
        let hit = on.intersection(&diag).expect("point lies on the diagonal");
        assert!(approx_eq_vec(hit, vector![5.0, 5.0]));
        assert!(diag.intersection(&on).is_some());
    }

    #[test]
    fn parallel_and_collinear_are_none() {
        let a = seg([0.0, 0.0], [2.0, 0.0]);
        assert!(a.intersection(&seg([0.0, 1.0], [2.0, 1.0])).is_none());
        assert!(a.intersection(&seg([1.0, 0.0], [3.0, 0.0])).is_none());
    }

    #[test]
    fn transform_maps_endpoints() {
        let s = seg([1.0, 0.0], [2.0, 0.0]);
        let r = s.transform(&Affine2::rotation(90.0));
        assert!(r.approx(&seg([0.0, 1.0], [0.0, 2.0])));
    }
}
