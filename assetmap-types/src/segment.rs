//! Line segments of a contour and the ray crossing test used by point-in-polygon checks.

use crate::geo::GeoPoint;

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P: GeoPoint> Segment<'_, P> {
    /// Returns true if a horizontal ray cast from `point` towards positive infinity along the `x` axis crosses the
    /// segment.
    ///
    /// The segment is treated as a half-open interval along the `y` axis, so a ray passing exactly through a vertex
    /// shared by two segments is counted once. Horizontal segments are never crossed, and the intersection abscissa
    /// is not computed for them.
    pub fn crosses_ray_from<Point: GeoPoint<Num = P::Num>>(&self, point: &Point) -> bool {
        let (xi, yi) = (self.1.x(), self.1.y());
        let (xj, yj) = (self.0.x(), self.0.y());
        let (px, py) = (point.x(), point.y());

        (yi > py) != (yj > py) && px < xi + (py - yi) / (yj - yi) * (xj - xi)
    }
}
