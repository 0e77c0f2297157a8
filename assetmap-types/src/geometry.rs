//! See documentation for [`Geom`].

use serde::{Deserialize, Serialize};

use crate::bounding_rect::BoundingRect;
use crate::contains::{point_in_multi_polygon, point_in_polygon};
use crate::geo::GeoPoint;
use crate::impls::{MultiPolygon, Polygon};

/// Geometry of a map feature.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geom<P> {
    /// Single point.
    Point(P),
    /// Polygon. Only its outer contour is used for hit-testing.
    Polygon(Polygon<P>),
    /// Set of polygons.
    MultiPolygon(MultiPolygon<P>),
}

/// Kind of a [`Geom`] without the geometry data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// See [`Geom::Point`].
    Point,
    /// See [`Geom::Polygon`].
    Polygon,
    /// See [`Geom::MultiPolygon`].
    MultiPolygon,
}

impl<P> Geom<P> {
    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geom::Point(_) => GeometryKind::Point,
            Geom::Polygon(_) => GeometryKind::Polygon,
            Geom::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    /// Returns true for polygons and multi-polygons.
    pub fn is_area(&self) -> bool {
        !matches!(self, Geom::Point(_))
    }
}

impl<P: GeoPoint> Geom<P> {
    /// Returns true if the geometry is an area and the `point` is inside it. Always false for points.
    pub fn area_contains<Point: GeoPoint<Num = P::Num>>(&self, point: &Point) -> bool {
        match self {
            Geom::Point(_) => false,
            Geom::Polygon(polygon) => point_in_polygon(point, polygon),
            Geom::MultiPolygon(multi_polygon) => point_in_multi_polygon(point, multi_polygon),
        }
    }

    /// Bounding rectangle of the geometry. Returns `None` for polygons without points.
    pub fn bounding_rectangle(&self) -> Option<BoundingRect<P::Num>> {
        match self {
            Geom::Point(p) => Some(BoundingRect::from_point(p)),
            Geom::Polygon(polygon) => BoundingRect::from_points(polygon.outer_contour.points.iter()),
            Geom::MultiPolygon(multi_polygon) => BoundingRect::merge_all(
                multi_polygon
                    .parts()
                    .iter()
                    .filter_map(|p| BoundingRect::from_points(p.outer_contour.points.iter())),
            ),
        }
    }
}

impl<P> From<Polygon<P>> for Geom<P> {
    fn from(value: Polygon<P>) -> Self {
        Self::Polygon(value)
    }
}

impl<P> From<MultiPolygon<P>> for Geom<P> {
    fn from(value: MultiPolygon<P>) -> Self {
        Self::MultiPolygon(value)
    }
}
