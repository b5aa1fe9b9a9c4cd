//! Intermediate points of a single segment.
//!
//! Both interpolators return only the points strictly between the segment endpoints, in order from
//! the first endpoint to the second. Nothing is returned for segments not longer than the maximum
//! segment length.

use geodense_types::Coordinate;

use crate::config::DenseConfig;
use crate::error::GeodenseError;

/// Number of points to insert into a segment of length `distance` and the resulting spacing between
/// them.
///
/// The segment is split into `ceil(distance / max_segment_length)` equal parts. Fails if the
/// segment does not need to be split at all.
pub fn intermediate_nr_points_and_segment_length(
    distance: f64,
    max_segment_length: f64,
) -> Result<(usize, f64), GeodenseError> {
    if max_segment_length >= distance {
        return Err(GeodenseError::SegmentLength {
            max_segment_length,
            distance,
        });
    }

    let nr_segments = (distance / max_segment_length).ceil();
    let new_segment_length = distance / nr_segments;

    Ok((nr_segments as usize - 1, new_segment_length))
}

/// Interpolates along the geodesic between `from` and `to` on the ellipsoid of the source CRS.
///
/// Projected coordinates are converted to the base geographic CRS for the computation and back
/// afterwards.
pub fn interpolate_geodesic(
    from: &Coordinate,
    to: &Coordinate,
    config: &DenseConfig,
) -> Result<Vec<Coordinate>, GeodenseError> {
    let start = config.to_base(from)?;
    let end = config.to_base(to)?;

    let solution = config.geod().inverse(&start, &end);
    let distance = solution.distance;
    if !distance.is_finite() {
        return Err(GeodenseError::DistanceComputation(distance));
    }

    if distance <= config.max_segment_length() {
        return Ok(vec![]);
    }

    let (nr_points, step) =
        intermediate_nr_points_and_segment_length(distance, config.max_segment_length())?;
    log::debug!("Inserting {nr_points} points into segment of {distance} m");

    let heights = interpolate_heights(from, to, nr_points, step / distance);
    config
        .geod()
        .forward_intermediate(&start, solution.azimuth, nr_points, step)
        .iter()
        .zip(heights)
        .map(|(point, z)| config.from_base(point).map(|c| c.with_z(z)))
        .collect()
}

/// Interpolates linearly in the source coordinates. Distances are planar, in the units of the
/// source CRS.
pub fn interpolate_src_proj(
    from: &Coordinate,
    to: &Coordinate,
    config: &DenseConfig,
) -> Result<Vec<Coordinate>, GeodenseError> {
    let start = from.xy();
    let delta = to.xy() - start;
    let distance = delta.norm();

    if distance <= config.max_segment_length() {
        return Ok(vec![]);
    }

    let (nr_points, step) =
        intermediate_nr_points_and_segment_length(distance, config.max_segment_length())?;
    let fraction = step / distance;
    let heights = interpolate_heights(from, to, nr_points, fraction);

    Ok((1..=nr_points)
        .zip(heights)
        .map(|(i, z)| Coordinate::from(start + delta * (fraction * i as f64)).with_z(z))
        .collect())
}

/// Linearly interpolated heights of `count` points spaced `fraction` of the segment apart. Yields
/// `None` for every point unless both endpoints are 3d.
fn interpolate_heights(
    from: &Coordinate,
    to: &Coordinate,
    count: usize,
    fraction: f64,
) -> impl Iterator<Item = Option<f64>> {
    let heights = from.z().zip(to.z());
    (1..=count)
        .map(move |i| heights.map(|(start, end)| start + i as f64 * (end - start) * fraction))
}
