//! Points in geographic coordinates (longitude and latitude), see [`GeoPoint`].
//!
//! No projection or geodesic correction is ever applied: longitude and latitude are used directly as the planar `x`
//! and `y` axes.

mod point;
mod traits;

pub use point::GeoPoint2d;
pub use traits::{GeoPoint, NewGeoPoint};
