//! Nested coordinate structure shared by all line-bearing geometry types.
//!
//! All OGC line-bearing geometries share one coordinate array grammar: a `LineString` is a sequence
//! of positions, a `Polygon` or a `MultiLineString` is a sequence of line strings, a `MultiPolygon`
//! is a sequence of polygons. [`CoordinateNode`] captures that grammar explicitly: the leaves are
//! [`LineString`]s and everything above them is a [`CoordinateNode::Container`]. The shape is
//! decided once from the [`GeometryType`] when the tree is built, so code walking the tree never
//! needs to guess whether it looks at a coordinate or a container.

use serde::{Deserialize, Serialize};

use crate::error::GeodenseTypesError;
use crate::geometry::Geom;
use crate::geometry_type::GeometryType;
use crate::line_string::LineString;

/// Position of a line string (and optionally of a segment in it) inside a geometry, starting from
/// the outermost container. Used for reporting only.
pub type IndexPath = Vec<usize>;

/// Node of a coordinate tree.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum CoordinateNode {
    /// Line string: ring, part or the whole geometry.
    Leaf(LineString),
    /// Rings of a polygon, parts of a multi line string or polygons of a multi polygon.
    Container(Vec<CoordinateNode>),
}

impl CoordinateNode {
    /// Number of line strings in the subtree.
    pub fn line_string_count(&self) -> usize {
        match self {
            CoordinateNode::Leaf(_) => 1,
            CoordinateNode::Container(children) => {
                children.iter().map(|c| c.line_string_count()).sum()
            }
        }
    }

    /// Number of coordinates in the subtree.
    pub fn coordinate_count(&self) -> usize {
        match self {
            CoordinateNode::Leaf(line) => line.len(),
            CoordinateNode::Container(children) => {
                children.iter().map(|c| c.coordinate_count()).sum()
            }
        }
    }

    fn into_leaf(self) -> Result<LineString, GeodenseTypesError> {
        match self {
            CoordinateNode::Leaf(line) => Ok(line),
            CoordinateNode::Container(_) => Err(GeodenseTypesError::Conversion(
                "expected a linestring, found a nested container".into(),
            )),
        }
    }

    fn into_children(self) -> Result<Vec<CoordinateNode>, GeodenseTypesError> {
        match self {
            CoordinateNode::Container(children) => Ok(children),
            CoordinateNode::Leaf(_) => Err(GeodenseTypesError::Conversion(
                "expected a container, found a linestring".into(),
            )),
        }
    }

    fn leaves(lines: Vec<LineString>) -> Self {
        CoordinateNode::Container(lines.into_iter().map(CoordinateNode::Leaf).collect())
    }
}

/// Coordinate tree of a single line-bearing geometry together with its type tag.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CoordinateTree {
    geometry_type: GeometryType,
    root: CoordinateNode,
}

impl CoordinateTree {
    /// Type of the geometry the tree was built from.
    pub fn geometry_type(&self) -> GeometryType {
        self.geometry_type
    }

    /// Root node.
    pub fn root(&self) -> &CoordinateNode {
        &self.root
    }

    /// Mutable root node.
    pub fn root_mut(&mut self) -> &mut CoordinateNode {
        &mut self.root
    }

    /// Converts the tree back into a geometry of the same type.
    ///
    /// Fails if the tree was reshaped into something the geometry type cannot hold.
    pub fn into_geom(self) -> Result<Geom, GeodenseTypesError> {
        let geom = match self.geometry_type {
            GeometryType::LineString => Geom::LineString(self.root.into_leaf()?),
            GeometryType::MultiLineString => Geom::MultiLineString(
                self.root
                    .into_children()?
                    .into_iter()
                    .map(CoordinateNode::into_leaf)
                    .collect::<Result<_, _>>()?,
            ),
            GeometryType::Polygon => Geom::Polygon(
                self.root
                    .into_children()?
                    .into_iter()
                    .map(CoordinateNode::into_leaf)
                    .collect::<Result<_, _>>()?,
            ),
            GeometryType::MultiPolygon => Geom::MultiPolygon(
                self.root
                    .into_children()?
                    .into_iter()
                    .map(|polygon| {
                        polygon
                            .into_children()?
                            .into_iter()
                            .map(CoordinateNode::into_leaf)
                            .collect::<Result<Vec<_>, _>>()
                    })
                    .collect::<Result<_, _>>()?,
            ),
            other => {
                return Err(GeodenseTypesError::Conversion(format!(
                    "{other} cannot be represented as a coordinate tree"
                )))
            }
        };

        Ok(geom)
    }
}

impl TryFrom<Geom> for CoordinateTree {
    type Error = GeodenseTypesError;

    fn try_from(geom: Geom) -> Result<Self, Self::Error> {
        let geometry_type = geom.geometry_type();
        let root = match geom {
            Geom::Point(_) | Geom::MultiPoint(_) => return Err(GeodenseTypesError::PointGeometry),
            Geom::LineString(line) => CoordinateNode::Leaf(line),
            Geom::MultiLineString(lines) | Geom::Polygon(lines) => CoordinateNode::leaves(lines),
            Geom::MultiPolygon(polygons) => CoordinateNode::Container(
                polygons.into_iter().map(CoordinateNode::leaves).collect(),
            ),
            Geom::GeometryCollection(_) => {
                return Err(GeodenseTypesError::Conversion(
                    "geometry collection members must be converted one by one".into(),
                ))
            }
        };

        Ok(Self { geometry_type, root })
    }
}
