//! Multi-polygon trait, see [`MultiPolygon`].

/// Geometry consisting of several polygons.
pub trait MultiPolygon {
    /// Polygon type.
    type Polygon: crate::polygon::Polygon;

    /// Iterates over polygons in their declaration order.
    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon>;
}
