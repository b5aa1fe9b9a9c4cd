//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeodenseTypesError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// Point geometries cannot be densified or checked.
    #[error("received point geometry coordinates, instead of (multi)linestring")]
    PointGeometry,
    /// String could not be parsed as a CRS identifier.
    #[error(
        "invalid crs identifier '{0}', \
         expected AUTHORITY:CODE or urn:ogc:def:crs:AUTHORITY::CODE"
    )]
    InvalidCrsIdentifier(String),
    /// CRS is not present in the registry.
    #[error("crs not found: {0}")]
    UnknownCrs(String),
    /// Projection definition was rejected or a coordinate could not be projected.
    #[error("projection error: {0}")]
    Projection(String),
}
