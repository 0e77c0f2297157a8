use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geo::traits::{GeoPoint, NewGeoPoint};

/// 2d geographic coordinate.
///
/// The `Display` implementation renders the point as `"lat, lon"` with 5 decimal digits, which is the format of the
/// location field of asset reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lon: f64,
    lat: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lon, lat }
    }
}

impl Display for GeoPoint2d {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lon)
    }
}

/// Creates a new [`GeoPoint2d`] from latitude and longitude values (in degrees).
///
/// ```
/// use assetmap_types::geo::GeoPoint;
/// use assetmap_types::latlon;
///
/// let point = latlon!(7.8731, 80.7718);
/// assert_eq!(point.lat(), 7.8731);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::geo::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}

/// Creates a new [`GeoPoint2d`] from longitude and latitude values (in degrees).
///
/// ```
/// use assetmap_types::geo::GeoPoint;
/// use assetmap_types::lonlat;
///
/// let point = lonlat!(80.7718, 7.8731);
/// assert_eq!(point.lon(), 80.7718);
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        <$crate::geo::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::lonlat($lon, $lat)
    };
}
