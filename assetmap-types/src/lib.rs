//! Geometry types and algorithms used for hit-testing map features.
//!
//! The crate is built around a handful of small traits:
//!
//! * [`GeoPoint`](geo::GeoPoint) - a `(longitude, latitude)` coordinate. Longitude is used as the `x` axis and
//!   latitude as the `y` axis; coordinates are treated as planar.
//! * [`ClosedContour`] - a ring of points, implicitly closed.
//! * [`Polygon`] - an outer ring with optional inner rings.
//! * [`MultiPolygon`] - a set of polygons.
//!
//! Simple implementations of all of them live in the [`impls`] module, and the [`Geom`] enum ties the supported
//! geometry kinds together.
//!
//! Containment is checked with the ray casting predicates [`point_in_ring`], [`point_in_polygon`] and
//! [`point_in_multi_polygon`], also available through the [`ContainsPoint`] trait.

pub mod bounding_rect;
pub mod contains;
pub mod contour;
pub mod error;
pub mod geo;
pub mod geometry;
pub mod impls;
pub mod multi_polygon;
pub mod polygon;
pub mod segment;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use bounding_rect::BoundingRect;
pub use contains::{point_in_multi_polygon, point_in_polygon, point_in_ring, ContainsPoint};
pub use contour::ClosedContour;
pub use geo::{GeoPoint, GeoPoint2d, NewGeoPoint};
pub use geometry::{Geom, GeometryKind};
pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
pub use segment::Segment;
