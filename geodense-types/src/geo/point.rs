use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// 2d point on the surface of an ellipsoid, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint2d {
    /// Creates a point from latitude and longitude.
    pub fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Creates a point from longitude and latitude.
    pub fn lonlat(lon: f64, lat: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl From<&Coordinate> for GeoPoint2d {
    /// Interprets `x` as longitude and `y` as latitude. Height is dropped.
    fn from(value: &Coordinate) -> Self {
        Self::lonlat(value.x(), value.y())
    }
}

impl From<GeoPoint2d> for Coordinate {
    fn from(value: GeoPoint2d) -> Self {
        Coordinate::new(value.lon, value.lat)
    }
}
