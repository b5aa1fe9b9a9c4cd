//! Geodense checks and fixes the vertex density of line geometries, so that after transformation
//! into another coordinate reference system no straight segment deviates from the geodesic between
//! its endpoints by more than expected.
//!
//! The entry point for a single geometry is a [`DenseConfig`] built for the source CRS:
//!
//! ```no_run
//! use geodense::{check_geometry, densify_geometry, DenseConfig, DenseOptions};
//! use geodense_types::geo::CrsRegistry;
//! use geodense_types::{Coordinate, Geom};
//!
//! # fn main() -> Result<(), geodense::error::GeodenseError> {
//! let crs = CrsRegistry::builtin().lookup_str("EPSG:4258")?;
//! let config = DenseConfig::new(&crs, DenseOptions::default().with_max_segment_length(1000.0))?;
//!
//! let line = vec![Coordinate::new(5.0, 52.0), Coordinate::new(5.0, 52.1)];
//! let line = Geom::LineString(line.into());
//! assert_eq!(check_geometry(&line, &config)?.len(), 1);
//!
//! let densified = densify_geometry(line, &config)?;
//! assert!(check_geometry(&densified, &config)?.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! Whole GeoJSON files are processed with [`io::densify_file`] and [`io::check_density_file`].

mod check;
pub use check::{check_geometry, check_linestring, SegmentViolation};

mod config;
pub use config::{
    DenseConfig, DenseOptions, DEFAULT_MAX_SEGMENT_LENGTH, DEFAULT_TOLERANCE, GEOGRAPHIC_PRECISION,
    HEIGHT_PRECISION, PROJECTED_PRECISION,
};

mod densify;
pub use densify::{densify_geometry, densify_linestring};

pub mod error;

pub mod interpolate;
pub mod io;

mod report;
pub use report::result_message;

pub mod traversal;
