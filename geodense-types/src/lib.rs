//! Geometry and coordinate reference system model used by `geodense`.
//!
//! * [`Geom`] is a tagged geometry as read from a feature source. Line-bearing geometries are
//!   converted into a [`CoordinateTree`], whose [`CoordinateNode`]s make the nesting of line
//!   strings explicit.
//! * [`geo`] contains the CRS model, the built-in [`CrsRegistry`](geo::CrsRegistry) and the geodesy
//!   provider.

pub mod coordinate;
pub use coordinate::Coordinate;

pub mod coordinate_tree;
pub use coordinate_tree::{CoordinateNode, CoordinateTree, IndexPath};

pub mod error;
pub mod geo;

mod geometry;
pub use geometry::Geom;

pub mod geometry_type;
pub use geometry_type::GeometryType;

mod line_string;
pub use line_string::LineString;

#[cfg(feature = "geojson")]
mod geojson;
