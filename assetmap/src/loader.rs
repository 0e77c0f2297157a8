//! Loading asset features from GeoJSON documents.

use assetmap_types::geo::GeoPoint2d;
use assetmap_types::Geom;
use geojson::GeoJson;
use log::{debug, warn};

use crate::error::AssetmapError;
use crate::feature::AssetFeature;

/// Parses a GeoJSON `FeatureCollection` (or a single `Feature`) into asset features.
///
/// Features are returned in the order of the document, since the order decides which feature wins when several of
/// them overlap. Features without geometry, or with geometry other than points, polygons and multi-polygons, are
/// skipped with a warning.
pub fn load_features(geojson: &str) -> Result<Vec<AssetFeature>, AssetmapError> {
    let features = match geojson.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => {
            return Err(AssetmapError::Generic(
                "expected a GeoJSON Feature or FeatureCollection, got a Geometry".to_string(),
            ));
        }
    };

    let total = features.len();
    let mut loaded = Vec::with_capacity(total);
    for (index, feature) in features.into_iter().enumerate() {
        let Some(geometry) = &feature.geometry else {
            warn!("Feature {index} has no geometry, skipping it");
            continue;
        };

        match Geom::<GeoPoint2d>::try_from(geometry) {
            Ok(geometry) => loaded.push(AssetFeature {
                geometry,
                properties: feature.properties.unwrap_or_default(),
            }),
            Err(err) => warn!("Feature {index} is skipped: {err}"),
        }
    }

    debug!("Loaded {} of {total} features", loaded.len());
    Ok(loaded)
}
