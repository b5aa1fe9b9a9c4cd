//! Density check: finds segments longer than the maximum segment length.

use geodense_types::{Geom, IndexPath, LineString};
use serde::Serialize;

use crate::config::DenseConfig;
use crate::error::GeodenseError;
use crate::traversal::traverse_geometry;

/// Segment exceeding the maximum segment length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentViolation {
    /// Position of the segment: the path of its line string followed by the index of the segment in
    /// it.
    pub path: IndexPath,
    /// Geodesic length of the segment in meters.
    pub distance: f64,
}

impl SegmentViolation {
    /// Creates a new violation.
    pub fn new(path: IndexPath, distance: f64) -> Self {
        Self { path, distance }
    }
}

/// Measures every segment of `line` and returns those longer than the maximum segment length plus
/// the tolerance.
///
/// Distances are always geodesic, measured in the base geographic CRS. Heights are ignored.
pub fn check_linestring(
    line: &LineString,
    config: &DenseConfig,
    path: &IndexPath,
) -> Result<Vec<SegmentViolation>, GeodenseError> {
    let threshold = config.max_segment_length() + config.tolerance();
    let mut violations = vec![];

    for (index, (from, to)) in line.iter_segments().enumerate() {
        let start = config.to_base(from)?;
        let end = config.to_base(to)?;

        let distance = if start == end {
            0.0
        } else {
            config.geod().distance(&start, &end)
        };
        if !distance.is_finite() {
            return Err(GeodenseError::DistanceComputation(distance));
        }

        if distance > threshold {
            let mut segment_path = path.clone();
            segment_path.push(index);
            violations.push(SegmentViolation::new(segment_path, distance));
        }
    }

    Ok(violations)
}

/// Checks all line strings of a geometry. Paths of the violations are relative to the geometry.
pub fn check_geometry(
    geom: &Geom,
    config: &DenseConfig,
) -> Result<Vec<SegmentViolation>, GeodenseError> {
    let mut violations = vec![];
    traverse_geometry(geom.clone(), &mut |line, path| {
        violations.extend(check_linestring(line, config, path)?);
        Ok(())
    })?;

    Ok(violations)
}
