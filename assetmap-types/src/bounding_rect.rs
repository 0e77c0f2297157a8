//! Axis aligned bounding rectangles, see [`BoundingRect`].

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Axis aligned rectangle in longitude (`x`) and latitude (`y`) coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect<N = f64> {
    /// Minimum longitude.
    pub x_min: N,
    /// Minimum latitude.
    pub y_min: N,
    /// Maximum longitude.
    pub x_max: N,
    /// Maximum latitude.
    pub y_max: N,
}

impl<N: Float> BoundingRect<N> {
    /// Creates a new rectangle.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Zero-sized rectangle at the given point.
    pub fn from_point(p: &impl GeoPoint<Num = N>) -> Self {
        Self {
            x_min: p.x(),
            x_max: p.x(),
            y_min: p.y(),
            y_max: p.y(),
        }
    }

    /// Smallest rectangle containing all the given points. Returns `None` if the iterator is empty.
    pub fn from_points<'a, P: GeoPoint<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = Self::from_point(points.next()?);
        Some(points.fold(first, |rect, p| rect.merge(Self::from_point(p))))
    }

    /// Merges all rectangles of the iterator. Returns `None` if the iterator is empty.
    pub fn merge_all(rects: impl IntoIterator<Item = Self>) -> Option<Self> {
        rects.into_iter().reduce(|a, b| a.merge(b))
    }

    /// Returns true if the point is inside the rectangle or on its border.
    pub fn contains(&self, point: &impl GeoPoint<Num = N>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }

    /// Width of the rectangle (longitude span).
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Height of the rectangle (latitude span).
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lonlat;
    use approx::assert_abs_diff_eq;

    #[test]
    fn from_points() {
        let points = [lonlat!(80.1, 7.2), lonlat!(79.9, 7.5), lonlat!(80.3, 6.9)];
        let rect = BoundingRect::from_points(points.iter()).unwrap();

        assert_eq!(rect, BoundingRect::new(79.9, 6.9, 80.3, 7.5));
        assert_abs_diff_eq!(rect.width(), 0.4, epsilon = 1e-9);
        assert_abs_diff_eq!(rect.height(), 0.6, epsilon = 1e-9);
        assert!(rect.contains(&lonlat!(80.0, 7.0)));
        assert!(rect.contains(&lonlat!(80.3, 7.5)));
        assert!(!rect.contains(&lonlat!(80.31, 7.0)));
    }

    #[test]
    fn empty() {
        let points: Vec<crate::GeoPoint2d> = vec![];
        assert_eq!(BoundingRect::from_points(points.iter()), None);
        assert_eq!(BoundingRect::<f64>::merge_all(vec![]), None);
    }

    #[test]
    fn merge_all() {
        let merged = BoundingRect::merge_all([
            BoundingRect::new(0.0, 0.0, 1.0, 1.0),
            BoundingRect::new(5.0, -1.0, 6.0, 0.5),
        ]);
        assert_eq!(merged, Some(BoundingRect::new(0.0, -1.0, 6.0, 1.0)));
    }
}
