use geodesy::prelude::*;

use crate::geo::datum::Datum;
use crate::geo::point::GeoPoint2d;

/// Solution of the inverse geodesic problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSolution {
    /// Azimuth at the start point, degrees clockwise from north.
    pub azimuth: f64,
    /// Length of the geodesic in meters.
    pub distance: f64,
}

/// Geodesic computations on the ellipsoid of a datum.
pub struct Geod {
    datum: Datum,
    ellipsoid: Ellipsoid,
}

impl Geod {
    /// Creates a new instance for the ellipsoid of `datum`.
    pub fn new(datum: Datum) -> Self {
        Self {
            datum,
            ellipsoid: datum.ellipsoid(),
        }
    }

    /// Datum the computations are performed on.
    pub fn datum(&self) -> Datum {
        self.datum
    }

    /// Distance and azimuths between two points.
    ///
    /// The distance is `NaN` if the solver does not converge (nearly antipodal points).
    pub fn inverse(&self, from: &GeoPoint2d, to: &GeoPoint2d) -> InverseSolution {
        if from == to {
            return InverseSolution {
                azimuth: 0.0,
                distance: 0.0,
            };
        }

        let solution = self.ellipsoid.geodesic_inv(&to_coor(from), &to_coor(to));
        InverseSolution {
            azimuth: solution.0[0].to_degrees(),
            distance: solution.0[2],
        }
    }

    /// Geodesic distance in meters between two points.
    pub fn distance(&self, from: &GeoPoint2d, to: &GeoPoint2d) -> f64 {
        self.inverse(from, to).distance
    }

    /// Point reached by travelling `distance` meters from `from` with the initial `azimuth`
    /// (degrees).
    pub fn forward(&self, from: &GeoPoint2d, azimuth: f64, distance: f64) -> GeoPoint2d {
        let result = self
            .ellipsoid
            .geodesic_fwd(&to_coor(from), azimuth.to_radians(), distance);
        GeoPoint2d::lonlat(result.0[0].to_degrees(), result.0[1].to_degrees())
    }

    /// `count` points spaced `step` meters apart along the geodesic starting at `from` with the
    /// initial `azimuth`. The start point itself is not included.
    pub fn forward_intermediate(
        &self,
        from: &GeoPoint2d,
        azimuth: f64,
        count: usize,
        step: f64,
    ) -> Vec<GeoPoint2d> {
        (1..=count)
            .map(|i| self.forward(from, azimuth, step * i as f64))
            .collect()
    }
}

impl std::fmt::Debug for Geod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Geod").field("datum", &self.datum).finish()
    }
}

fn to_coor(point: &GeoPoint2d) -> Coor4D {
    Coor4D::geo(point.lat(), point.lon(), 0.0, 0.0)
}
