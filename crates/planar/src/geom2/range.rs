//! Closed scalar interval `[min, max]`.

use super::scalar::approx_eq;

/// Closed interval.
///
/// Invariants:
/// - `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// Interval spanned by `a` and `b`, in either order.
    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Tightest interval containing every value; None for an empty iterator.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let mut it = values.into_iter();
        let first = it.next()?;
        Some(it.fold(Self::new(first, first), |r, v| r.expand_to(v)))
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }
    #[inline]
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }

    /// True when the closed intervals share at least one point.
    #[inline]
    pub fn overlaps(&self, other: &Range) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    pub fn intersection(&self, other: &Range) -> Option<Range> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Range {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        })
    }

    /// Smallest interval covering both (gaps included).
    #[inline]
    pub fn union(&self, other: &Range) -> Range {
        Range {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[inline]
    pub fn expand_to(&self, v: f64) -> Range {
        Range {
            min: self.min.min(v),
            max: self.max.max(v),
        }
    }

    /// `min + t * length`; `t` outside `[0, 1]` extrapolates.
    #[inline]
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + t * self.length()
    }

    /// Inverse of `lerp`; None for a zero-length interval.
    pub fn normalize(&self, v: f64) -> Option<f64> {
        let len = self.length();
        if approx_eq(len, 0.0) {
            return None;
        }
        Some((v - self.min) / len)
    }

    pub fn approx(&self, other: &Range) -> bool {
        approx_eq(self.min, other.min) && approx_eq(self.max, other.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_endpoints() {
        let r = Range::new(5.0, -1.0);
        assert_eq!((r.min(), r.max()), (-1.0, 5.0));
        assert_eq!(r.length(), 6.0);
        assert_eq!(r.center(), 2.0);
    }

    #[test]
    fn from_values_spans_all() {
        let r = Range::from_values([3.0, -2.0, 7.5, 0.0]).unwrap();
        assert_eq!(r, Range::new(-2.0, 7.5));
        assert!(Range::from_values(std::iter::empty()).is_none());
    }

    #[test]
    fn overlap_intersection_union() {
        let a = Range::new(0.0, 2.0);
        let b = Range::new(1.0, 3.0);
        let c = Range::new(2.0, 4.0);
        let d = Range::new(5.0, 6.0);
        assert_eq!(a.intersection(&b), Some(Range::new(1.0, 2.0)));
        // touching endpoints overlap in a single point
        assert_eq!(a.intersection(&c), Some(Range::new(2.0, 2.0)));
        assert!(a.intersection(&d).is_none());
        assert!(!a.overlaps(&d));
        assert_eq!(a.union(&d), Range::new(0.0, 6.0));
    }

    #[test]
    fn clamp_lerp_normalize() {
        let r = Range::new(10.0, 20.0);
        assert_eq!(r.clamp(25.0), 20.0);
        assert_eq!(r.clamp(5.0), 10.0);
        assert!(r.contains(10.0) && r.contains(20.0) && !r.contains(20.5));
        assert_eq!(r.lerp(0.25), 12.5);
        assert_eq!(r.normalize(12.5), Some(0.25));
        assert!(Range::new(3.0, 3.0).normalize(3.0).is_none());
    }
}
