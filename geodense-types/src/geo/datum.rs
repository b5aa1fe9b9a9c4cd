use serde::{Deserialize, Serialize};

/// Reference ellipsoid of a geodetic datum.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// WGS 84 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// GRS 1980 ellipsoid, used by ETRS89.
    pub const GRS80: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257222101,
    };

    /// Creates a datum from the semimajor axis (meters) and the inverse flattening.
    pub const fn new(semimajor: f64, inv_flattening: f64) -> Self {
        Self {
            semimajor,
            inv_flattening,
        }
    }

    /// Semimajor axis in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Flattening.
    pub fn flattening(&self) -> f64 {
        1.0 / self.inv_flattening
    }

    /// Ellipsoid of the datum, usable for geodesic computations.
    #[cfg(feature = "geodesy")]
    pub fn ellipsoid(&self) -> geodesy::prelude::Ellipsoid {
        geodesy::prelude::Ellipsoid::new(self.semimajor, self.flattening())
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
