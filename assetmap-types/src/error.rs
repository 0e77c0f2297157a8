//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum AssetmapTypesError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// The geometry kind cannot be used for hit-testing.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(String),
}
