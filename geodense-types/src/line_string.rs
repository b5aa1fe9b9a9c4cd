use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use crate::coordinate::Coordinate;
use crate::error::GeodenseTypesError;

/// Ordered sequence of coordinates. This is the unit all measurements and densification operate on.
///
/// Unlike a contour, a closed line string (polygon ring) repeats its first coordinate at the end,
/// as in the OGC Simple Features model and GeoJSON.
#[derive(Debug, Default, Clone, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct LineString {
    points: Vec<Coordinate>,
}

impl Deref for LineString {
    type Target = Vec<Coordinate>;

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl DerefMut for LineString {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.points
    }
}

impl LineString {
    /// Creates a new line string.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// True if the first and the last coordinates are the same.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Iterates over consecutive coordinate pairs.
    pub fn iter_segments(&self) -> impl Iterator<Item = (&Coordinate, &Coordinate)> {
        self.points.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Checks that all coordinates have the same number of dimensions.
    pub fn validate_dimensions(&self) -> Result<(), GeodenseTypesError> {
        let Some(first) = self.points.first() else {
            return Ok(());
        };

        let dims = first.dimensions();
        match self.points.iter().position(|c| c.dimensions() != dims) {
            Some(index) => Err(GeodenseTypesError::Conversion(format!(
                "coordinate {index} has {} dimensions, expected {dims} like the rest of the \
                 linestring",
                self.points[index].dimensions()
            ))),
            None => Ok(()),
        }
    }
}

impl From<Vec<Coordinate>> for LineString {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Coordinate> for LineString {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_ring() {
        let ring: LineString = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(0.0, 0.0),
        ]
        .into();
        assert!(ring.is_closed());
        assert_eq!(ring.iter_segments().count(), 3);

        let single: LineString = vec![Coordinate::new(0.0, 0.0)].into();
        assert!(!single.is_closed());
        assert_eq!(single.iter_segments().count(), 0);
    }

    #[test]
    fn mixed_dimensions() {
        let line: LineString =
            vec![Coordinate::new(0.0, 0.0), Coordinate::new_3d(1.0, 0.0, 5.0)].into();
        assert!(line.validate_dimensions().is_err());

        let line: LineString = vec![
            Coordinate::new_3d(0.0, 0.0, 1.0),
            Coordinate::new_3d(1.0, 0.0, 5.0),
        ]
        .into();
        assert!(line.validate_dimensions().is_ok());
    }
}
