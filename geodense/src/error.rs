//! Error types used by the crate.

use geodense_types::error::GeodenseTypesError;
use std::path::PathBuf;
use thiserror::Error;

/// Geodense error type.
#[derive(Debug, Error)]
pub enum GeodenseError {
    /// Geometry or CRS model error.
    #[error(transparent)]
    Types(#[from] GeodenseTypesError),
    /// `in_projection` was requested for a geographic source CRS.
    #[error(
        "in_projection can only be used with projected coordinates reference systems, \
         crs {crs} is a geographic crs"
    )]
    InProjectionGeographic {
        /// Source CRS.
        crs: String,
    },
    /// Source CRS is neither geographic nor projected.
    #[error("unexpected crs encountered, crs {crs} is neither geographic nor projected")]
    UnsupportedCrs {
        /// Source CRS.
        crs: String,
    },
    /// Maximum segment length is zero or not a number.
    #[error("max_segment_length must be a non-zero number, got {0}")]
    InvalidMaxSegmentLength(f64),
    /// The point count rule was invoked for a segment that does not need densification.
    #[error(
        "max_segment_length ({max_segment_length}) cannot be bigger or equal than dist ({distance})"
    )]
    SegmentLength {
        /// Configured maximum segment length.
        max_segment_length: f64,
        /// Length of the segment.
        distance: f64,
    },
    /// Geodesic distance computation produced a non-finite value.
    #[error("unable to calculate geodesic distance, result: {0}, expected: floating-point number")]
    DistanceComputation(f64),
    /// A coordinate could not be transformed between the source and the base CRS.
    #[error("unable to transform coordinate ({x}, {y}) {direction} base crs")]
    Transform {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
        /// `to` or `from`.
        direction: &'static str,
    },
    /// Document contains no geometry densify could be run on.
    #[error("cannot run densify on GeoJSON that only contains (Multi)Point geometries")]
    OnlyPoints,
    /// Processing a feature failed.
    #[error("unexpected error occurred while processing feature [{index}]: {source}")]
    Feature {
        /// Index of the feature in the document.
        index: usize,
        /// The error.
        source: Box<GeodenseError>,
    },
    /// Input or output file arguments are invalid.
    #[error("{0}")]
    FileArgument(String),
    /// File format is not supported.
    #[error(
        "argument {arg_name} {} is of an unsupported fileformat, \
         see list-formats for list of supported file formats",
        .path.display()
    )]
    UnsupportedFileFormat {
        /// Name of the argument.
        arg_name: &'static str,
        /// Path of the file.
        path: PathBuf,
    },
    /// Requested layer is not present.
    #[error("layer_name '{layer}' not found in file {}, layers: {layers}", .path.display())]
    LayerNotFound {
        /// Requested layer.
        layer: String,
        /// Path of the file.
        path: PathBuf,
        /// Comma separated list of the layers in the file.
        layers: String,
    },
    /// File has several layers and none was requested.
    #[error(
        "input_file {} contains more than 1 layer: {layers}, \
         specify which layer to use with optional layer argument",
        .path.display()
    )]
    AmbiguousLayer {
        /// Path of the file.
        path: PathBuf,
        /// Comma separated list of the layers in the file.
        layers: String,
    },
    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// GeoJSON parsing error.
    #[error("invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),
    /// Error reading/writing data to the FS.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GeodenseError {
    /// Wraps the error with the index of the feature it occurred in.
    pub fn in_feature(self, index: usize) -> Self {
        Self::Feature {
            index,
            source: Box::new(self),
        }
    }
}
