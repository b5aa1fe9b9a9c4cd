//! Densification policy derived from the source CRS.

use geodense_types::geo::{Crs, GeoPoint2d, Geod, GeodesyProjection, Projection};
use geodense_types::Coordinate;

use crate::error::GeodenseError;

/// Default maximum segment length in meters.
pub const DEFAULT_MAX_SEGMENT_LENGTH: f64 = 200.0;
/// Default margin added to the maximum segment length before a segment is reported by the density
/// check.
pub const DEFAULT_TOLERANCE: f64 = 0.001;
/// Decimal places of geographic coordinates (degrees).
pub const GEOGRAPHIC_PRECISION: u32 = 9;
/// Decimal places of projected coordinates (meters).
pub const PROJECTED_PRECISION: u32 = 4;
/// Decimal places of heights.
pub const HEIGHT_PRECISION: u32 = 4;

/// User facing densification options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DenseOptions {
    /// Maximum length of a segment in meters. Negative values are used as their absolute value.
    pub max_segment_length: f64,
    /// Interpolate linearly in the source projection instead of along the geodesic.
    pub in_projection: bool,
    /// Margin used by the density check.
    pub tolerance: f64,
}

impl Default for DenseOptions {
    fn default() -> Self {
        Self {
            max_segment_length: DEFAULT_MAX_SEGMENT_LENGTH,
            in_projection: false,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl DenseOptions {
    /// Sets the maximum segment length.
    pub fn with_max_segment_length(self, max_segment_length: f64) -> Self {
        Self {
            max_segment_length,
            ..self
        }
    }

    /// Sets the interpolation mode.
    pub fn with_in_projection(self, in_projection: bool) -> Self {
        Self { in_projection, ..self }
    }

    /// Sets the density check tolerance.
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }
}

/// Configuration of the densifier and the density checker for one source CRS.
///
/// Created once per input and shared read-only by all the operations on it. Geographic sources are
/// measured directly on their ellipsoid. Projected sources (including compound systems with a
/// projected horizontal component) are converted to their base geographic CRS first.
#[derive(Debug)]
pub struct DenseConfig {
    src_crs: Crs,
    base_crs: Crs,
    is_geographic: bool,
    transformer: Option<GeodesyProjection>,
    geod: Geod,
    max_segment_length: f64,
    in_projection: bool,
    tolerance: f64,
}

impl DenseConfig {
    /// Validates `options` against `src_crs` and derives the configuration.
    pub fn new(src_crs: &Crs, options: DenseOptions) -> Result<Self, GeodenseError> {
        let max_segment_length = options.max_segment_length.abs();
        if max_segment_length == 0.0 || !max_segment_length.is_finite() {
            return Err(GeodenseError::InvalidMaxSegmentLength(options.max_segment_length));
        }

        let is_geographic = src_crs.is_geographic();
        if is_geographic && options.in_projection {
            return Err(GeodenseError::InProjectionGeographic {
                crs: src_crs.id().to_string(),
            });
        }

        let unsupported = || GeodenseError::UnsupportedCrs {
            crs: src_crs.id().to_string(),
        };

        let transformer = if is_geographic {
            None
        } else if src_crs.is_projected() {
            let definition = src_crs.projection_definition().ok_or_else(unsupported)?;
            Some(GeodesyProjection::new(definition)?)
        } else {
            return Err(unsupported());
        };

        let base_crs = src_crs.base_crs().ok_or_else(unsupported)?.clone();
        let datum = src_crs
            .datum()
            .or_else(|| base_crs.datum())
            .ok_or_else(unsupported)?;

        log::debug!(
            "Created density configuration for {src_crs}: base crs {base_crs}, \
             max segment length {max_segment_length}, in projection: {}",
            options.in_projection
        );

        Ok(Self {
            src_crs: src_crs.clone(),
            base_crs,
            is_geographic,
            transformer,
            geod: Geod::new(datum),
            max_segment_length,
            in_projection: options.in_projection,
            tolerance: options.tolerance.abs(),
        })
    }

    /// Source CRS.
    pub fn src_crs(&self) -> &Crs {
        &self.src_crs
    }

    /// Geographic CRS the measurements are done in.
    pub fn base_crs(&self) -> &Crs {
        &self.base_crs
    }

    /// True if the source CRS is geographic.
    pub fn is_geographic(&self) -> bool {
        self.is_geographic
    }

    /// Geodesic solver on the source ellipsoid.
    pub fn geod(&self) -> &Geod {
        &self.geod
    }

    /// Maximum segment length in meters, always positive.
    pub fn max_segment_length(&self) -> f64 {
        self.max_segment_length
    }

    /// Whether interpolation happens in the source projection.
    pub fn in_projection(&self) -> bool {
        self.in_projection
    }

    /// Density check tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Number of decimal places horizontal coordinates are rounded to.
    pub fn precision(&self) -> u32 {
        if self.is_geographic {
            GEOGRAPHIC_PRECISION
        } else {
            PROJECTED_PRECISION
        }
    }

    /// Converts a source coordinate into a point of the base geographic CRS. Height is dropped.
    pub fn to_base(&self, coordinate: &Coordinate) -> Result<GeoPoint2d, GeodenseError> {
        match &self.transformer {
            None => Ok(GeoPoint2d::from(coordinate)),
            Some(transformer) => transformer
                .unproject(&coordinate.xy())
                .ok_or(GeodenseError::Transform {
                    x: coordinate.x(),
                    y: coordinate.y(),
                    direction: "to",
                }),
        }
    }

    /// Converts a point of the base geographic CRS into a 2d source coordinate.
    pub fn from_base(&self, point: &GeoPoint2d) -> Result<Coordinate, GeodenseError> {
        match &self.transformer {
            None => Ok(Coordinate::from(*point)),
            Some(transformer) => transformer
                .project(point)
                .map(Coordinate::from)
                .ok_or(GeodenseError::Transform {
                    x: point.lon(),
                    y: point.lat(),
                    direction: "from",
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geodense_types::geo::{CrsIdentifier, CrsRegistry};

    fn crs(id: &str) -> Crs {
        CrsRegistry::builtin().lookup_str(id).expect("builtin crs")
    }

    #[test]
    fn geographic_source() {
        let config =
            DenseConfig::new(&crs("EPSG:4258"), DenseOptions::default()).expect("valid config");
        assert!(config.is_geographic());
        assert_eq!(config.precision(), GEOGRAPHIC_PRECISION);
        assert_eq!(config.base_crs().id(), &CrsIdentifier::epsg(4258));
        assert_eq!(config.max_segment_length(), 200.0);
        assert_eq!(config.tolerance(), 0.001);

        let point = config
            .to_base(&Coordinate::new_3d(5.0, 52.0, 10.0))
            .expect("no transformation");
        assert_eq!(point, GeoPoint2d::latlon(52.0, 5.0));
    }

    #[test]
    fn projected_source() {
        let config =
            DenseConfig::new(&crs("EPSG:25831"), DenseOptions::default()).expect("valid config");
        assert!(!config.is_geographic());
        assert_eq!(config.precision(), PROJECTED_PRECISION);
        assert_eq!(config.base_crs().id(), &CrsIdentifier::epsg(4258));

        let source = Coordinate::new(600_000.0, 5_800_000.0);
        let base = config.to_base(&source).expect("transformable");
        assert!(base.lon() > 4.0 && base.lon() < 5.0);
        assert!(base.lat() > 52.0 && base.lat() < 53.0);

        let back = config.from_base(&base).expect("transformable");
        assert_abs_diff_eq!(back, source, epsilon = 1e-4);
    }

    #[test]
    fn compound_source_uses_projected_component() {
        let config =
            DenseConfig::new(&crs("EPSG:5555"), DenseOptions::default()).expect("valid config");
        assert!(!config.is_geographic());
        assert_eq!(config.base_crs().id(), &CrsIdentifier::epsg(4258));
        assert_eq!(config.precision(), PROJECTED_PRECISION);
    }

    #[test]
    fn in_projection_requires_projected_crs() {
        let options = DenseOptions::default().with_in_projection(true);
        let err = DenseConfig::new(&crs("OGC:CRS84"), options).expect_err("geographic crs");
        assert_matches!(&err, GeodenseError::InProjectionGeographic { crs } if crs == "OGC:CRS84");
        assert_eq!(
            err.to_string(),
            "in_projection can only be used with projected coordinates reference systems, \
             crs OGC:CRS84 is a geographic crs"
        );

        assert!(DenseConfig::new(&crs("EPSG:25832"), options).is_ok());
    }

    #[test]
    fn unsupported_crs_kinds() {
        for id in ["EPSG:5783", "EPSG:4936"] {
            assert_matches!(
                DenseConfig::new(&crs(id), DenseOptions::default()),
                Err(GeodenseError::UnsupportedCrs { .. })
            );
        }
    }

    #[test]
    fn max_segment_length_is_absolute() {
        let options = DenseOptions::default().with_max_segment_length(-1000.0);
        let config = DenseConfig::new(&crs("EPSG:4326"), options).expect("valid config");
        assert_eq!(config.max_segment_length(), 1000.0);

        for invalid in [0.0, f64::NAN, f64::INFINITY] {
            let options = DenseOptions::default().with_max_segment_length(invalid);
            assert_matches!(
                DenseConfig::new(&crs("EPSG:4326"), options),
                Err(GeodenseError::InvalidMaxSegmentLength(_))
            );
        }
    }
}
