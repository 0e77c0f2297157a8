//! Finding the feature a user points at.
//!
//! [`FeatureLocator::locate`] takes a coordinate and a slice of features and returns the feature the user most
//! likely means:
//!
//! 1. Area features (polygons and multi-polygons) are checked first, in the order they are given. The first one
//!    containing the coordinate wins, even if a later one also contains it.
//! 2. If no area contains the coordinate, point features are checked in order, and the first one with both latitude
//!    and longitude within [`LocatorOptions::point_tolerance`] of the coordinate wins.
//!
//! Areas take priority over points, so a point feature near the coordinate never masks a polygon the coordinate is
//! actually inside of.
//!
//! Locating is pure computation: the features are never modified, and nothing is cached between calls.

use assetmap_types::geo::GeoPoint;
use assetmap_types::Geom;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::AssetmapError;
use crate::feature::Feature;

/// Default value of [`LocatorOptions::point_tolerance`] in degrees.
pub const DEFAULT_POINT_TOLERANCE: f64 = 0.001;

/// Configuration of a [`FeatureLocator`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorOptions {
    /// Maximum difference in degrees, along each axis separately, between a point feature and the located coordinate
    /// for the point to be selected.
    ///
    /// The value is not scaled by the map resolution.
    pub point_tolerance: f64,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            point_tolerance: DEFAULT_POINT_TOLERANCE,
        }
    }
}

impl LocatorOptions {
    /// Reads the options from a JSON document. Missing fields take default values.
    pub fn from_json(json: &str) -> Result<Self, AssetmapError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Selects a feature under a coordinate. See module documentation for the selection rules.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeatureLocator {
    options: LocatorOptions,
}

impl FeatureLocator {
    /// Creates a new locator.
    pub fn new(options: LocatorOptions) -> Self {
        Self { options }
    }

    /// Returns the locator with a different point tolerance.
    pub fn with_point_tolerance(mut self, point_tolerance: f64) -> Self {
        self.options.point_tolerance = point_tolerance;
        self
    }

    /// Options of the locator.
    pub fn options(&self) -> &LocatorOptions {
        &self.options
    }

    /// Returns the feature at the `point`, or `None` if there is no feature there.
    pub fn locate<'a, F>(
        &self,
        point: &impl GeoPoint<Num = f64>,
        features: &'a [F],
    ) -> Option<&'a F>
    where
        F: Feature,
        F::Point: GeoPoint<Num = f64>,
    {
        self.locate_index(point, features)
            .and_then(|index| features.get(index))
    }

    /// Same as [`FeatureLocator::locate`] but returns the index of the feature in the `features` slice.
    pub fn locate_index<F>(&self, point: &impl GeoPoint<Num = f64>, features: &[F]) -> Option<usize>
    where
        F: Feature,
        F::Point: GeoPoint<Num = f64>,
    {
        if let Some(index) = features
            .iter()
            .position(|feature| feature.geometry().area_contains(point))
        {
            trace!("Point ({}, {}) is inside area feature {index}", point.lon(), point.lat());
            return Some(index);
        }

        let tolerance = self.options.point_tolerance;
        let index = features.iter().position(|feature| {
            matches!(feature.geometry(), Geom::Point(p) if p.is_near(point, tolerance))
        })?;

        trace!("Point ({}, {}) is near point feature {index}", point.lon(), point.lat());
        Some(index)
    }
}

/// Locates a feature at the `point` with the default [`LocatorOptions`].
pub fn locate<'a, F>(point: &impl GeoPoint<Num = f64>, features: &'a [F]) -> Option<&'a F>
where
    F: Feature,
    F::Point: GeoPoint<Num = f64>,
{
    FeatureLocator::default().locate(point, features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::AssetFeature;
    use assetmap_types::geo::GeoPoint2d;
    use assetmap_types::impls::{MultiPolygon, Polygon};
    use assetmap_types::lonlat;
    use assert_matches::assert_matches;

    fn square(x: f64, y: f64, size: f64) -> Polygon<GeoPoint2d> {
        Polygon::from(vec![
            lonlat!(x, y),
            lonlat!(x, y + size),
            lonlat!(x + size, y + size),
            lonlat!(x + size, y),
        ])
    }

    #[test]
    fn empty_collection() {
        let features: Vec<AssetFeature> = vec![];
        assert_eq!(locate(&lonlat!(80.0, 8.0), &features), None);
        assert_eq!(
            FeatureLocator::default().locate_index(&lonlat!(80.0, 8.0), &features),
            None
        );
    }

    #[test]
    fn polygon_has_priority_over_point() {
        let query = lonlat!(80.0005, 8.0005);
        let lake = AssetFeature::new(square(79.99, 7.99, 0.02)).with_name("Lake");
        let temple = AssetFeature::point(lonlat!(80.0, 8.0)).with_name("Temple");

        let point_first = vec![temple.clone(), lake.clone()];
        assert_eq!(locate(&query, &point_first).and_then(|f| f.name()), Some("Lake"));

        let polygon_first = vec![lake, temple];
        assert_eq!(locate(&query, &polygon_first).and_then(|f| f.name()), Some("Lake"));
    }

    #[test]
    fn multi_polygon_has_priority_over_point() {
        let features = vec![
            AssetFeature::point(lonlat!(5.5, 5.5)).with_name("Point"),
            AssetFeature::new(MultiPolygon::from(vec![
                square(0.0, 0.0, 1.0),
                square(5.0, 5.0, 1.0),
            ]))
            .with_name("Islands"),
        ];

        assert_eq!(
            locate(&lonlat!(5.5, 5.5), &features).and_then(|f| f.name()),
            Some("Islands")
        );
    }

    #[test]
    fn first_overlapping_polygon_wins() {
        let features = vec![
            AssetFeature::point(lonlat!(0.5, 0.5)).with_name("Point"),
            AssetFeature::new(square(0.0, 0.0, 2.0)).with_name("Big"),
            AssetFeature::new(square(0.25, 0.25, 0.5)).with_name("Small"),
        ];

        let locator = FeatureLocator::default();
        assert_eq!(locator.locate_index(&lonlat!(0.5, 0.5), &features), Some(1));

        let features: Vec<_> = features.into_iter().rev().collect();
        assert_eq!(locator.locate_index(&lonlat!(0.5, 0.5), &features), Some(0));
        assert_eq!(
            locator.locate(&lonlat!(0.5, 0.5), &features).and_then(|f| f.name()),
            Some("Small")
        );
    }

    #[test]
    fn point_within_tolerance() {
        let features = vec![AssetFeature::point(lonlat!(80.0, 8.0))];

        assert_matches!(locate(&lonlat!(80.0005, 8.0005), &features), Some(_));
        assert_matches!(locate(&lonlat!(79.9995, 7.9995), &features), Some(_));
        assert_eq!(locate(&lonlat!(80.002, 8.002), &features), None);
        assert_eq!(locate(&lonlat!(80.0, 8.002), &features), None);
        assert_eq!(locate(&lonlat!(80.002, 8.0), &features), None);
    }

    #[test]
    fn first_near_point_wins() {
        let features = vec![
            AssetFeature::point(lonlat!(10.0, 10.0)),
            AssetFeature::point(lonlat!(80.0008, 8.0)),
            AssetFeature::point(lonlat!(80.0, 8.0)),
        ];

        assert_eq!(
            FeatureLocator::default().locate_index(&lonlat!(80.0001, 8.0), &features),
            Some(1)
        );
    }

    #[test]
    fn custom_tolerance() {
        let features = vec![AssetFeature::point(lonlat!(80.0, 8.0))];
        let locator = FeatureLocator::default().with_point_tolerance(0.01);

        assert_eq!(locator.options().point_tolerance, 0.01);
        assert_eq!(locator.locate_index(&lonlat!(80.002, 8.002), &features), Some(0));
        assert_eq!(locator.locate_index(&lonlat!(80.02, 8.002), &features), None);
    }

    #[test]
    fn nothing_at_point() {
        let features = vec![
            AssetFeature::new(square(0.0, 0.0, 1.0)),
            AssetFeature::point(lonlat!(3.0, 3.0)),
        ];

        assert_eq!(locate(&lonlat!(2.0, 2.0), &features), None);
    }

    #[test]
    fn plain_geometries() {
        let features = vec![
            Geom::Point(lonlat!(80.0, 8.0)),
            Geom::from(square(79.0, 7.0, 0.5)),
        ];

        assert_eq!(
            locate(&lonlat!(79.2, 7.2), &features),
            Some(&Geom::from(square(79.0, 7.0, 0.5)))
        );
        assert_eq!(
            locate(&lonlat!(80.0, 8.0), &features),
            Some(&Geom::Point(lonlat!(80.0, 8.0)))
        );
    }

    #[test]
    fn options_from_json() {
        let options = LocatorOptions::from_json(r#"{ "point_tolerance": 0.0005 }"#).unwrap();
        assert_eq!(options.point_tolerance, 0.0005);

        let options = LocatorOptions::from_json("{}").unwrap();
        assert_eq!(options, LocatorOptions::default());
        assert_eq!(FeatureLocator::new(options), FeatureLocator::default());

        assert_matches!(
            LocatorOptions::from_json(r#"{ "point_tolerance": "far" }"#),
            Err(AssetmapError::Json(_))
        );
    }
}
