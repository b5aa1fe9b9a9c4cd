//! See documentation for [`GeometryType`].
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Type tag of a geometry. The tag decides how deep the coordinate tree of a geometry is nested,
/// see [`CoordinateNode`](crate::CoordinateNode).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GeometryType {
    /// Single position.
    Point,
    /// Set of positions.
    MultiPoint,
    /// Single line string.
    LineString,
    /// Set of line strings.
    MultiLineString,
    /// Exterior ring followed by zero or more interior rings.
    Polygon,
    /// Set of polygons.
    MultiPolygon,
    /// Set of independent geometries.
    GeometryCollection,
}

impl GeometryType {
    /// Returns true for `Point` and `MultiPoint`.
    pub fn is_point(&self) -> bool {
        matches!(self, GeometryType::Point | GeometryType::MultiPoint)
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        };
        f.write_str(name)
    }
}
