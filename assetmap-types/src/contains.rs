//! Ray casting point-in-polygon predicates.
//!
//! A horizontal ray is cast from the tested point towards positive infinity along the `x` (longitude) axis, and the
//! point is inside iff the ray crosses the boundary an odd number of times. See [`Segment::crosses_ray_from`] for
//! the exact crossing rule. Points lying exactly on the boundary are classified by that rule, which depends on the
//! edge orientation: e.g. for an axis aligned square the left and bottom sides are inside, the right and top sides are
//! outside.
//!
//! [`Segment::crosses_ray_from`]: crate::segment::Segment::crosses_ray_from

use num_traits::Float;

use crate::contour::ClosedContour;
use crate::geo::GeoPoint;
use crate::impls;
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;

/// Returns true if `point` lies inside the simple polygon described by `ring`.
///
/// The ring is implicitly closed. Rings with less than 3 points never contain any point.
pub fn point_in_ring<R, P, Point>(point: &Point, ring: &R) -> bool
where
    R: ClosedContour<Point = P>,
    P: GeoPoint,
    Point: GeoPoint<Num = P::Num>,
{
    if !ring.is_ring() {
        return false;
    }

    ring.iter_segments()
        .fold(false, |inside, segment| inside != segment.crosses_ray_from(point))
}

/// Returns true if `point` lies inside the outer contour of the `polygon`. Inner contours are not checked.
pub fn point_in_polygon<Poly, P, Point>(point: &Point, polygon: &Poly) -> bool
where
    Poly: Polygon,
    Poly::Contour: ClosedContour<Point = P>,
    P: GeoPoint,
    Point: GeoPoint<Num = P::Num>,
{
    point_in_ring(point, polygon.outer_contour())
}

/// Returns true if `point` lies inside any of the polygons of the `multi_polygon`.
pub fn point_in_multi_polygon<MPoly, P, Point>(point: &Point, multi_polygon: &MPoly) -> bool
where
    MPoly: MultiPolygon,
    <MPoly::Polygon as Polygon>::Contour: ClosedContour<Point = P>,
    P: GeoPoint,
    Point: GeoPoint<Num = P::Num>,
{
    multi_polygon
        .polygons()
        .any(|polygon| point_in_polygon(point, polygon))
}

/// Area geometry that can tell whether a point is inside it.
pub trait ContainsPoint {
    /// Numeric type of the geometry coordinates.
    type Num: Float;

    /// Returns true if the `point` lies inside the geometry.
    fn contains_point<Point: GeoPoint<Num = Self::Num>>(&self, point: &Point) -> bool;
}

impl<P: GeoPoint> ContainsPoint for impls::ClosedContour<P> {
    type Num = P::Num;

    fn contains_point<Point: GeoPoint<Num = Self::Num>>(&self, point: &Point) -> bool {
        point_in_ring(point, self)
    }
}

impl<P: GeoPoint> ContainsPoint for impls::Polygon<P> {
    type Num = P::Num;

    fn contains_point<Point: GeoPoint<Num = Self::Num>>(&self, point: &Point) -> bool {
        point_in_polygon(point, self)
    }
}

impl<P: GeoPoint> ContainsPoint for impls::MultiPolygon<P> {
    type Num = P::Num;

    fn contains_point<Point: GeoPoint<Num = Self::Num>>(&self, point: &Point) -> bool {
        point_in_multi_polygon(point, self)
    }
}
