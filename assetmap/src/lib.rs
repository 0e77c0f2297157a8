//! Assetmap finds the map feature a user points at, so that the user can report on it.
//!
//! Field users report on geographic assets (places of interest) by clicking a point on a map and filling in a
//! visit/feedback form. This crate does the part between the click and the form: given a coordinate and the loaded
//! features it decides which feature, if any, is selected.
//!
//! # Quick start
//!
//! ```
//! use assetmap::assetmap_types::impls::Polygon;
//! use assetmap::assetmap_types::lonlat;
//! use assetmap::{locate, AssetFeature, Feature};
//!
//! let features = vec![
//!     AssetFeature::point(lonlat!(80.6337, 7.2936)).with_name("Temple of the Tooth"),
//!     AssetFeature::new(Polygon::from(vec![
//!         lonlat!(80.630, 7.290),
//!         lonlat!(80.630, 7.296),
//!         lonlat!(80.640, 7.296),
//!         lonlat!(80.640, 7.290),
//!     ]))
//!     .with_name("Kandy Lake"),
//! ];
//!
//! // The lake polygon wins over the nearby point feature.
//! let selected = locate(&lonlat!(80.6338, 7.2937), &features);
//! assert_eq!(selected.and_then(|f| f.name()), Some("Kandy Lake"));
//! ```
//!
//! # Main components
//!
//! * [`Feature`] trait and the [`AssetFeature`] implementation: geometry (point, polygon or multi-polygon) with
//!   an opaque set of properties.
//! * [`FeatureLocator`]: stateless search for the feature under a coordinate. Area features are preferred to point
//!   features, and earlier features are preferred to later ones.
//! * [`control`]: turns pointer events into hover changes and report requests.
//! * [`load_features`] (with the `geojson` feature): reads features from a GeoJSON document.
//!
//! Geometry types and containment predicates come from the [`assetmap_types`] crate, which is re-exported.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod control;
pub mod error;
pub mod feature;
pub mod locator;

#[cfg(feature = "geojson")]
mod loader;

pub use assetmap_types;
pub use feature::{AssetFeature, Feature};
pub use locator::{locate, FeatureLocator, LocatorOptions, DEFAULT_POINT_TOLERANCE};

#[cfg(feature = "geojson")]
pub use loader::load_features;
