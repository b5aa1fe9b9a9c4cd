//! Coordinate reference systems, ellipsoids and the geodesy provider: geodesic problems on an
//! ellipsoid (see [`Geod`]) and conversion between a projected CRS and its base geographic CRS (see
//! [`Projection`]).

mod crs;
mod datum;
#[cfg(feature = "geodesy")]
mod geodesic;
mod point;
mod projection;
mod registry;

pub use crs::{Crs, CrsIdentifier, CrsKind};
pub use datum::Datum;
#[cfg(feature = "geodesy")]
pub use geodesic::{Geod, InverseSolution};
pub use point::GeoPoint2d;
#[cfg(feature = "geodesy")]
pub use projection::GeodesyProjection;
pub use projection::Projection;
pub use registry::CrsRegistry;
