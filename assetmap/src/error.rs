//! Error types used by the crate.

use assetmap_types::error::AssetmapTypesError;
use thiserror::Error;

/// Assetmap error type.
#[derive(Debug, Error)]
pub enum AssetmapError {
    /// Input geometry cannot be used.
    #[error("invalid geometry: {0}")]
    Geometry(#[from] AssetmapTypesError),
    /// Failed to parse a JSON document (e.g. locator configuration).
    #[error("failed to parse json: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to parse a GeoJSON document.
    #[cfg(feature = "geojson")]
    #[error("failed to parse geojson: {0}")]
    GeoJson(#[from] geojson::Error),
    /// Generic error - details are inside.
    #[error("{0}")]
    Generic(String),
}
