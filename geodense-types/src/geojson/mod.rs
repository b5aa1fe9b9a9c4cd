//! Conversion between [`geojson`] geometries and [`Geom`].

use geojson::{LineStringType, PolygonType, Position, Value};

use crate::coordinate::Coordinate;
use crate::error::GeodenseTypesError;
use crate::geometry::Geom;
use crate::line_string::LineString;

impl TryFrom<&Value> for Geom {
    type Error = GeodenseTypesError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let geom = match value {
            Value::Point(p) => Geom::Point(convert_position(p)?),
            Value::MultiPoint(points) => Geom::MultiPoint(
                points
                    .iter()
                    .map(convert_position)
                    .collect::<Result<_, _>>()?,
            ),
            Value::LineString(line) => Geom::LineString(convert_line_string(line)?),
            Value::MultiLineString(lines) => Geom::MultiLineString(
                lines
                    .iter()
                    .map(convert_line_string)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Polygon(polygon) => Geom::Polygon(convert_polygon(polygon)?),
            Value::MultiPolygon(polygons) => Geom::MultiPolygon(
                polygons
                    .iter()
                    .map(convert_polygon)
                    .collect::<Result<_, _>>()?,
            ),
            Value::GeometryCollection(geometries) => Geom::GeometryCollection(
                geometries
                    .iter()
                    .map(Geom::try_from)
                    .collect::<Result<_, _>>()?,
            ),
        };

        Ok(geom)
    }
}

impl TryFrom<&geojson::Geometry> for Geom {
    type Error = GeodenseTypesError;

    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        Geom::try_from(&value.value)
    }
}

impl From<&Geom> for Value {
    fn from(geom: &Geom) -> Self {
        match geom {
            Geom::Point(p) => Value::Point(p.to_position()),
            Geom::MultiPoint(points) => {
                Value::MultiPoint(points.iter().map(Coordinate::to_position).collect())
            }
            Geom::LineString(line) => Value::LineString(to_line_string_type(line)),
            Geom::MultiLineString(lines) => {
                Value::MultiLineString(lines.iter().map(to_line_string_type).collect())
            }
            Geom::Polygon(rings) => Value::Polygon(to_polygon_type(rings)),
            Geom::MultiPolygon(polygons) => {
                Value::MultiPolygon(polygons.iter().map(|rings| to_polygon_type(rings)).collect())
            }
            Geom::GeometryCollection(members) => Value::GeometryCollection(
                members
                    .iter()
                    .map(|m| geojson::Geometry::new(m.into()))
                    .collect(),
            ),
        }
    }
}

fn convert_position(position: &Position) -> Result<Coordinate, GeodenseTypesError> {
    Coordinate::try_from(position.as_slice())
}

fn convert_line_string(line_string: &LineStringType) -> Result<LineString, GeodenseTypesError> {
    let line = line_string
        .iter()
        .map(convert_position)
        .collect::<Result<LineString, _>>()?;
    line.validate_dimensions()?;
    Ok(line)
}

fn convert_polygon(polygon: &PolygonType) -> Result<Vec<LineString>, GeodenseTypesError> {
    polygon.iter().map(convert_line_string).collect()
}

fn to_line_string_type(line: &LineString) -> LineStringType {
    line.iter().map(Coordinate::to_position).collect()
}

fn to_polygon_type(rings: &[LineString]) -> PolygonType {
    rings.iter().map(to_line_string_type).collect()
}
