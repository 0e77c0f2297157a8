//! Map features: geometry plus arbitrary properties.

use assetmap_types::geo::{GeoPoint, GeoPoint2d};
use assetmap_types::Geom;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property holding the display name of a feature.
pub const NAME_PROPERTY: &str = "name";
/// Property holding the place name of asset records. Used as display name when [`NAME_PROPERTY`] is not set.
pub const PLACE_NAME_PROPERTY: &str = "placeName";

/// A feature is an arbitrary geographic object that can be selected on the map.
pub trait Feature {
    /// Type of the geometry points.
    type Point: GeoPoint;

    /// Returns the geometry of the feature.
    fn geometry(&self) -> &Geom<Self::Point>;

    /// Human readable name of the feature, if it has one.
    fn name(&self) -> Option<&str> {
        None
    }
}

impl<P: GeoPoint> Feature for Geom<P> {
    type Point = P;

    fn geometry(&self) -> &Geom<P> {
        self
    }
}

/// Feature loaded from the asset data set.
///
/// Properties are kept as an opaque JSON object. The only property the feature itself interprets is the display
/// name, see [`AssetFeature::name`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetFeature {
    /// Geometry of the feature.
    pub geometry: Geom<GeoPoint2d>,
    /// Properties of the feature.
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl AssetFeature {
    /// Creates a new feature without properties.
    pub fn new(geometry: impl Into<Geom<GeoPoint2d>>) -> Self {
        Self {
            geometry: geometry.into(),
            properties: Map::new(),
        }
    }

    /// Creates a new point feature without properties.
    pub fn point(point: GeoPoint2d) -> Self {
        Self::new(Geom::Point(point))
    }

    /// Sets the display name of the feature.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.properties
            .insert(NAME_PROPERTY.to_string(), Value::String(name.into()));
        self
    }

    /// Sets a property of the feature.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Returns the property value.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

impl From<Geom<GeoPoint2d>> for AssetFeature {
    fn from(geometry: Geom<GeoPoint2d>) -> Self {
        Self::new(geometry)
    }
}

impl Feature for AssetFeature {
    type Point = GeoPoint2d;

    fn geometry(&self) -> &Geom<GeoPoint2d> {
        &self.geometry
    }

    fn name(&self) -> Option<&str> {
        self.properties
            .get(NAME_PROPERTY)
            .or_else(|| self.properties.get(PLACE_NAME_PROPERTY))
            .and_then(Value::as_str)
    }
}
