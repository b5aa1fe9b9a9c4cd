use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::geometry_type::GeometryType;
use crate::line_string::LineString;

/// Tagged geometry as read from a feature source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum Geom {
    /// Single position.
    Point(Coordinate),
    /// Set of positions.
    MultiPoint(Vec<Coordinate>),
    /// Line string.
    LineString(LineString),
    /// Set of line strings.
    MultiLineString(Vec<LineString>),
    /// Exterior ring followed by interior rings.
    Polygon(Vec<LineString>),
    /// Set of polygons.
    MultiPolygon(Vec<Vec<LineString>>),
    /// Set of independent geometries.
    GeometryCollection(Vec<Geom>),
}

impl Geom {
    /// Type tag of the geometry.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geom::Point(_) => GeometryType::Point,
            Geom::MultiPoint(_) => GeometryType::MultiPoint,
            Geom::LineString(_) => GeometryType::LineString,
            Geom::MultiLineString(_) => GeometryType::MultiLineString,
            Geom::Polygon(_) => GeometryType::Polygon,
            Geom::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geom::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Returns true if the geometry holds (multi)points only. A collection is point-only if all its
    /// members are.
    pub fn is_point_only(&self) -> bool {
        match self {
            Geom::Point(_) | Geom::MultiPoint(_) => true,
            Geom::GeometryCollection(members) => members.iter().all(|m| m.is_point_only()),
            _ => false,
        }
    }

    /// Returns true if the geometry or any of its collection members is a (multi)point.
    pub fn contains_points(&self) -> bool {
        match self {
            Geom::Point(_) | Geom::MultiPoint(_) => true,
            Geom::GeometryCollection(members) => members.iter().any(|m| m.contains_points()),
            _ => false,
        }
    }
}

impl From<LineString> for Geom {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<Coordinate> for Geom {
    fn from(value: Coordinate) -> Self {
        Self::Point(value)
    }
}
