use approx::AbsDiffEq;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::error::GeodenseTypesError;

/// A single vertex of a geometry: `x`/longitude, `y`/latitude and an optional height.
///
/// The meaning of `x` and `y` depends on the CRS the geometry is in. For geographic CRSs `x` is
/// always the longitude and `y` the latitude in degrees, regardless of the axis order the authority
/// defines.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Coordinate {
    x: f64,
    y: f64,
    z: Option<f64>,
}

impl Coordinate {
    /// Creates a new 2d coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Creates a new 3d coordinate.
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// X coordinate (longitude for geographic CRSs).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate (latitude for geographic CRSs).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Height, if the coordinate is 3d.
    pub fn z(&self) -> Option<f64> {
        self.z
    }

    /// Returns true if the coordinate carries a height.
    pub fn is_3d(&self) -> bool {
        self.z.is_some()
    }

    /// Number of ordinates: 2 or 3.
    pub fn dimensions(&self) -> usize {
        if self.is_3d() {
            3
        } else {
            2
        }
    }

    /// Same horizontal position with the given height.
    pub fn with_z(&self, z: Option<f64>) -> Self {
        Self { z, ..*self }
    }

    /// Horizontal position as a planar point.
    pub fn xy(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Rounds horizontal ordinates to `decimals` and the height to `height_decimals` decimal
    /// places.
    pub fn rounded(&self, decimals: u32, height_decimals: u32) -> Self {
        Self {
            x: round_to(self.x, decimals),
            y: round_to(self.y, decimals),
            z: self.z.map(|z| round_to(z, height_decimals)),
        }
    }

    /// Returns the ordinates as a GeoJSON style position.
    pub fn to_position(&self) -> Vec<f64> {
        match self.z {
            Some(z) => vec![self.x, self.y, z],
            None => vec![self.x, self.y],
        }
    }
}

impl From<Point2<f64>> for Coordinate {
    fn from(value: Point2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl TryFrom<&[f64]> for Coordinate {
    type Error = GeodenseTypesError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        match *value {
            [x, y] => Ok(Self::new(x, y)),
            [x, y, z] => Ok(Self::new_3d(x, y, z)),
            _ => Err(GeodenseTypesError::Conversion(format!(
                "position must contain 2 or 3 ordinates, got {}",
                value.len()
            ))),
        }
    }
}

impl AbsDiffEq for Coordinate {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let z_eq = match (self.z, other.z) {
            (Some(a), Some(b)) => a.abs_diff_eq(&b, epsilon),
            (None, None) => true,
            _ => false,
        };

        z_eq && self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

/// Rounds `value` half away from zero to the given number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn position_conversion() {
        let c = Coordinate::try_from(&[1.0, 2.0][..]).expect("2d position");
        assert_eq!(c, Coordinate::new(1.0, 2.0));
        assert!(!c.is_3d());

        let c = Coordinate::try_from(&[1.0, 2.0, 3.0][..]).expect("3d position");
        assert_eq!(c.z(), Some(3.0));
        assert_eq!(c.to_position(), vec![1.0, 2.0, 3.0]);

        assert_matches!(
            Coordinate::try_from(&[1.0][..]),
            Err(GeodenseTypesError::Conversion(_))
        );
        assert_matches!(
            Coordinate::try_from(&[1.0, 2.0, 3.0, 4.0][..]),
            Err(GeodenseTypesError::Conversion(_))
        );
    }

    #[test]
    fn rounding() {
        let c = Coordinate::new_3d(0.123456789123, 52.987654321987, 1.234567);
        let r = c.rounded(4, 4);
        assert_eq!(r, Coordinate::new_3d(0.1235, 52.9877, 1.2346));

        let r = c.rounded(9, 4);
        assert_eq!(r.x(), 0.123456789);
        assert_eq!(r.y(), 52.987654322);
        assert_eq!(r.z(), Some(1.2346));
    }

    #[test]
    fn abs_diff_eq_respects_dimensions() {
        let a = Coordinate::new(1.0, 1.0);
        let b = Coordinate::new_3d(1.0, 1.0, 0.0);
        assert!(!a.abs_diff_eq(&b, 1e-9));
        assert!(a.abs_diff_eq(&Coordinate::new(1.0 + 1e-12, 1.0), 1e-9));
    }
}
