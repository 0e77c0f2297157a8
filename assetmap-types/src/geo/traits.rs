use num_traits::Float;

/// A point given by longitude and latitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Horizontal planar coordinate. Same as [`GeoPoint::lon`].
    fn x(&self) -> Self::Num {
        self.lon()
    }

    /// Vertical planar coordinate. Same as [`GeoPoint::lat`].
    fn y(&self) -> Self::Num {
        self.lat()
    }

    /// Returns true if both the latitude and the longitude of `other` differ from this point's by strictly less than
    /// `tolerance` (box distance, not a geodesic one).
    fn is_near(&self, other: &impl GeoPoint<Num = Self::Num>, tolerance: Self::Num) -> bool {
        (self.lat() - other.lat()).abs() < tolerance && (self.lon() - other.lon()).abs() < tolerance
    }
}

/// Geo point that can be constructed from coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a point from longitude and latitude.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}
