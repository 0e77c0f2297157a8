//! Conversion of GeoJSON geometries into [`Geom`].
//!
//! Only `Point`, `Polygon` and `MultiPolygon` geometries can be converted. GeoJSON positions are `[lon, lat, ...]`;
//! any values after the latitude are ignored. GeoJSON rings repeat the first position at the end, the repeated
//! position is dropped since [`ClosedContour`] is closed implicitly.

use geojson::{PolygonType, Position, Value};

use crate::error::AssetmapTypesError;
use crate::geo::{GeoPoint2d, NewGeoPoint};
use crate::geometry::Geom;
use crate::impls::{ClosedContour, MultiPolygon, Polygon};

impl TryFrom<&geojson::Geometry> for Geom<GeoPoint2d> {
    type Error = AssetmapTypesError;

    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        match &value.value {
            Value::Point(position) => Ok(Geom::Point(convert_position(position)?)),
            Value::Polygon(polygon) => Ok(Geom::Polygon(convert_polygon(polygon)?)),
            Value::MultiPolygon(polygons) => Ok(Geom::MultiPolygon(MultiPolygon::from(
                polygons
                    .iter()
                    .map(convert_polygon)
                    .collect::<Result<Vec<_>, _>>()?,
            ))),
            other => Err(AssetmapTypesError::UnsupportedGeometry(
                geometry_type_name(other).to_string(),
            )),
        }
    }
}

impl TryFrom<geojson::Geometry> for Geom<GeoPoint2d> {
    type Error = AssetmapTypesError;

    fn try_from(value: geojson::Geometry) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

fn convert_position(position: &Position) -> Result<GeoPoint2d, AssetmapTypesError> {
    match position.as_slice() {
        [lon, lat, ..] => Ok(GeoPoint2d::lonlat(*lon, *lat)),
        _ => Err(AssetmapTypesError::Conversion(
            "point must contain at least 2 dimensions".to_string(),
        )),
    }
}

fn convert_ring(positions: &[Position]) -> Result<ClosedContour<GeoPoint2d>, AssetmapTypesError> {
    let mut points = positions
        .iter()
        .map(convert_position)
        .collect::<Result<Vec<_>, _>>()?;

    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    Ok(ClosedContour::new(points))
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon<GeoPoint2d>, AssetmapTypesError> {
    let Some((outer, inner)) = polygon.split_first() else {
        return Err(AssetmapTypesError::Conversion(
            "polygon must have an outer ring".to_string(),
        ));
    };

    Ok(Polygon::new(
        convert_ring(outer)?,
        inner
            .iter()
            .map(|ring| convert_ring(ring))
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

fn geometry_type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contains::ContainsPoint;
    use crate::geo::GeoPoint;
    use crate::lonlat;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn point() {
        let geometry = geojson::Geometry::new(Value::Point(vec![80.7718, 7.8731, 120.0]));
        let geom = Geom::<GeoPoint2d>::try_from(&geometry).unwrap();

        assert_matches!(geom, Geom::Point(p) => {
            assert_abs_diff_eq!(p.lon(), 80.7718);
            assert_abs_diff_eq!(p.lat(), 7.8731);
        });
    }

    #[test]
    fn point_with_one_dimension() {
        let geometry = geojson::Geometry::new(Value::Point(vec![80.7718]));
        assert_matches!(
            Geom::<GeoPoint2d>::try_from(&geometry),
            Err(AssetmapTypesError::Conversion(_))
        );
    }

    #[test]
    fn polygon_drops_closing_position() {
        let geometry = geojson::Geometry::new(Value::Polygon(vec![
            vec![
                vec![0.0, 0.0],
                vec![0.0, 1.0],
                vec![1.0, 1.0],
                vec![1.0, 0.0],
                vec![0.0, 0.0],
            ],
            vec![
                vec![0.2, 0.2],
                vec![0.2, 0.4],
                vec![0.4, 0.4],
                vec![0.2, 0.2],
            ],
        ]));

        let geom = Geom::<GeoPoint2d>::try_from(geometry).unwrap();
        assert_matches!(geom, Geom::Polygon(polygon) => {
            assert_eq!(polygon.outer_contour.points.len(), 4);
            assert_eq!(polygon.outer_contour.points[3], lonlat!(1.0, 0.0));
            assert_eq!(polygon.inner_contours.len(), 1);
            assert_eq!(polygon.inner_contours[0].points.len(), 3);
            assert!(polygon.contains_point(&lonlat!(0.3, 0.35)));
        });
    }

    #[test]
    fn polygon_without_rings() {
        let geometry = geojson::Geometry::new(Value::Polygon(vec![]));
        assert_matches!(
            Geom::<GeoPoint2d>::try_from(&geometry),
            Err(AssetmapTypesError::Conversion(_))
        );
    }

    #[test]
    fn multi_polygon() {
        let geometry = geojson::Geometry::new(Value::MultiPolygon(vec![
            vec![vec![
                vec![0.0, 0.0],
                vec![0.0, 1.0],
                vec![1.0, 1.0],
                vec![0.0, 0.0],
            ]],
            vec![vec![
                vec![5.0, 5.0],
                vec![5.0, 6.0],
                vec![6.0, 6.0],
                vec![6.0, 5.0],
            ]],
        ]));

        let geom = Geom::<GeoPoint2d>::try_from(&geometry).unwrap();
        assert_matches!(&geom, Geom::MultiPolygon(mp) => {
            assert_eq!(mp.parts().len(), 2);
            assert_eq!(mp.parts()[0].outer_contour.points.len(), 3);
            assert_eq!(mp.parts()[1].outer_contour.points.len(), 4);
        });
        assert!(geom.area_contains(&lonlat!(5.5, 5.5)));
    }

    #[test]
    fn unsupported_geometry() {
        let geometry = geojson::Geometry::new(Value::LineString(vec![
            vec![0.0, 0.0],
            vec![1.0, 1.0],
        ]));

        assert_matches!(
            Geom::<GeoPoint2d>::try_from(&geometry),
            Err(AssetmapTypesError::UnsupportedGeometry(name)) if name == "LineString"
        );
    }
}
