//! Densification: inserts intermediate points into segments longer than the maximum segment length.

use geodense_types::{Coordinate, Geom, LineString};

use crate::config::{DenseConfig, HEIGHT_PRECISION};
use crate::error::GeodenseError;
use crate::interpolate::{interpolate_geodesic, interpolate_src_proj};
use crate::traversal::traverse_geometry;

/// Returns a densified copy of `line`.
///
/// All coordinates, existing and inserted, are rounded to the precision of the source CRS. Heights
/// of inserted points are rounded to [`HEIGHT_PRECISION`] instead. Segments that are not longer
/// than the maximum segment length only get their endpoints rounded.
pub fn densify_linestring(
    line: &LineString,
    config: &DenseConfig,
) -> Result<LineString, GeodenseError> {
    let precision = config.precision();
    let vertices: Vec<Coordinate> = line
        .iter()
        .map(|c| c.rounded(precision, precision))
        .collect();

    let mut output = Vec::with_capacity(vertices.len());
    for pair in vertices.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let interior = if config.in_projection() {
            interpolate_src_proj(from, to, config)?
        } else {
            interpolate_geodesic(from, to, config)?
        };

        output.push(*from);
        output.extend(
            interior
                .into_iter()
                .map(|c| c.rounded(precision, HEIGHT_PRECISION)),
        );
    }

    if let Some(last) = vertices.last() {
        output.push(*last);
    }

    Ok(output.into())
}

/// Densifies all line strings of a geometry.
pub fn densify_geometry(geom: Geom, config: &DenseConfig) -> Result<Geom, GeodenseError> {
    traverse_geometry(geom, &mut |line, _| {
        *line = densify_linestring(line, config)?;
        Ok(())
    })
}
