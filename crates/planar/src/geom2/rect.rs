//! Axis-aligned rectangle stored as `(min, max)` corners.
//!
//! - Every constructor sorts coordinates, so `min <= max` holds for all values.
//! - Containment is closed: boundary points are inside.
//! - Degenerate (zero width or height) rects are valid values.

use nalgebra::Vector2;

use super::affine::Affine2;
use super::range::Range;
use super::scalar::approx_eq_vec;

/// Axis-aligned box.
///
/// Invariants:
/// - `min.x <= max.x` and `min.y <= max.y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    min: Vector2<f64>,
    max: Vector2<f64>,
}

impl Rect {
    /// Box spanned by two opposite corners given in any order.
    #[inline]
    pub fn from_corners(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    /// Bounding box of a point set; None if empty.
    pub fn from_points<I: IntoIterator<Item = Vector2<f64>>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        Some(it.fold(Self::from_corners(first, first), |r, p| {
            r.expand_to_point(p)
        }))
    }

    /// Box centred on `center`; negative sizes are taken by magnitude.
    #[inline]
    pub fn from_center_size(center: Vector2<f64>, size: Vector2<f64>) -> Self {
        let half = size.abs() / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Cartesian product of two ranges.
    #[inline]
    pub fn from_ranges(x: Range, y: Range) -> Self {
        Self {
            min: Vector2::new(x.min(), y.min()),
            max: Vector2::new(x.max(), y.max()),
        }
    }

    #[inline]
    pub fn min(&self) -> Vector2<f64> {
        self.min
    }
    #[inline]
    pub fn max(&self) -> Vector2<f64> {
        self.max
    }
    #[inline]
    pub fn x_range(&self) -> Range {
        Range::new(self.min.x, self.max.x)
    }
    #[inline]
    pub fn y_range(&self) -> Range {
        Range::new(self.min.y, self.max.y)
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn size(&self) -> Vector2<f64> {
        self.max - self.min
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) / 2.0
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Corners counterclockwise from `min`.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            self.min,
            Vector2::new(self.max.x, self.min.y),
            self.max,
            Vector2::new(self.min.x, self.max.y),
        ]
    }

    #[inline]
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_point(other.min) && self.contains_point(other.max)
    }

    /// Closed overlap test: touching edges count.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x_range().overlaps(&other.x_range()) && self.y_range().overlaps(&other.y_range())
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x_range().intersection(&other.x_range())?;
        let y = self.y_range().intersection(&other.y_range())?;
        Some(Rect::from_ranges(x, y))
    }

    #[inline]
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    #[inline]
    pub fn expand_to_point(&self, p: Vector2<f64>) -> Rect {
        Rect {
            min: self.min.inf(&p),
            max: self.max.sup(&p),
        }
    }

    /// Grow every side by `margin`. A negative margin shrinks, collapsing
    /// onto the centre instead of inverting.
    pub fn inflate(&self, margin: f64) -> Rect {
        let c = self.center();
        let half = (self.size() / 2.0).add_scalar(margin).sup(&Vector2::zeros());
        Rect {
            min: c - half,
            max: c + half,
        }
    }

    #[inline]
    pub fn translate(&self, d: Vector2<f64>) -> Rect {
        Rect {
            min: self.min + d,
            max: self.max + d,
        }
    }

    /// Bounding box of the four transformed corners.
    pub fn transform(&self, f: &Affine2) -> Rect {
        let [a, b, c, d] = self.corners().map(|p| f.transform_point(p));
        Rect::from_corners(a, b)
            .expand_to_point(c)
            .expand_to_point(d)
    }

    /// Nearest point of the (filled) box; `p` itself when inside.
    #[inline]
    pub fn closest(&self, p: Vector2<f64>) -> Vector2<f64> {
        p.sup(&self.min).inf(&self.max)
    }

    /// Euclidean distance to the box; zero inside.
    #[inline]
    pub fn distance(&self, p: Vector2<f64>) -> f64 {
        (p - self.closest(p)).norm()
    }

    pub fn approx(&self, other: &Rect) -> bool {
        approx_eq_vec(self.min, other.min) && approx_eq_vec(self.max, other.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn unit() -> Rect {
        Rect::from_corners(vector![0.0, 0.0], vector![1.0, 1.0])
    }

    #[test]
    fn constructors_restore_min_max() {
        let r = Rect::from_corners(vector![3.0, -1.0], vector![-2.0, 4.0]);
        assert_eq!(r.min(), vector![-2.0, -1.0]);
        assert_eq!(r.max(), vector![3.0, 4.0]);
        assert_eq!((r.width(), r.height(), r.area()), (5.0, 5.0, 25.0));

        let c = Rect::from_center_size(vector![1.0, 1.0], vector![-2.0, 4.0]);
        assert_eq!(c, Rect::from_corners(vector![0.0, -1.0], vector![2.0, 3.0]));

        let p = Rect::from_points([vector![1.0, 5.0], vector![-3.0, 2.0], vector![0.0, -1.0]]);
        assert_eq!(
            p,
            Some(Rect::from_corners(vector![-3.0, -1.0], vector![1.0, 5.0]))
        );
        assert!(Rect::from_points(Vec::new()).is_none());
    }

    #[test]
    fn containment_is_closed() {
        let r = unit();
        assert!(r.contains_point(vector![1.0, 0.0]));
        assert!(r.contains_point(vector![0.5, 0.5]));
        assert!(!r.contains_point(vector![1.0001, 0.5]));
        assert!(r.contains_rect(&Rect::from_corners(vector![0.2, 0.2], vector![1.0, 0.9])));
        assert!(!r.contains_rect(&Rect::from_corners(vector![0.2, 0.2], vector![1.1, 0.9])));
    }

    #[test]
    fn intersection_union() {
        let a = unit();
        let b = Rect::from_corners(vector![0.5, 0.5], vector![2.0, 2.0]);
        assert_eq!(
            a.intersection(&b),
            Some(Rect::from_corners(vector![0.5, 0.5], vector![1.0, 1.0]))
        );
        let touching = Rect::from_corners(vector![1.0, 0.0], vector![2.0, 1.0]);
        assert!(a.intersects(&touching));
        assert_eq!(a.intersection(&touching).map(|r| r.area()), Some(0.0));
        let far = Rect::from_corners(vector![3.0, 3.0], vector![4.0, 4.0]);
        assert!(a.intersection(&far).is_none());
        assert_eq!(a.union(&far), Rect::from_corners(vector![0.0, 0.0], vector![4.0, 4.0]));
    }

    #[test]
    fn inflate_and_translate() {
        let r = unit().inflate(1.0);
        assert_eq!(r, Rect::from_corners(vector![-1.0, -1.0], vector![2.0, 2.0]));
        let collapsed = unit().inflate(-5.0);
        assert_eq!(collapsed.min(), vector![0.5, 0.5]);
        assert_eq!(collapsed.max(), vector![0.5, 0.5]);
        assert_eq!(unit().translate(vector![2.0, -1.0]).min(), vector![2.0, -1.0]);
    }

    #[test]
    fn transform_takes_bounding_box() {
        let r = Rect::from_corners(vector![-1.0, -1.0], vector![1.0, 1.0]);
        let rotated = r.transform(&Affine2::rotation(45.0));
        let h = 2.0_f64.sqrt();
        assert!(rotated.approx(&Rect::from_corners(vector![-h, -h], vector![h, h])));
        let flipped = unit().transform(&Affine2::scaling(-2.0, 1.0));
        assert!(flipped.approx(&Rect::from_corners(vector![-2.0, 0.0], vector![0.0, 1.0])));
    }

    #[test]
    fn closest_and_distance() {
        let r = unit();
        assert_eq!(r.closest(vector![0.5, 0.5]), vector![0.5, 0.5]);
        assert_eq!(r.closest(vector![2.0, 3.0]), vector![1.0, 1.0]);
        assert_eq!(r.distance(vector![4.0, 0.5]), 3.0);
        assert_eq!(r.distance(vector![0.5, 0.5]), 0.0);
    }
}
