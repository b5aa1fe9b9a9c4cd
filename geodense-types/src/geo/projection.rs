use nalgebra::Point2;

use crate::geo::point::GeoPoint2d;

/// Conversion between two coordinate spaces.
pub trait Projection {
    /// Input point type.
    type InPoint;
    /// Output point type.
    type OutPoint;

    /// Converts an input point into the output space. Returns `None` if the point cannot be
    /// projected.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Converts an output point back into the input space.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

#[cfg(feature = "geodesy")]
pub use self::geodesy_impl::GeodesyProjection;

#[cfg(feature = "geodesy")]
mod geodesy_impl {
    use super::*;
    use crate::error::GeodenseTypesError;
    use geodesy::prelude::*;

    /// Projection from geographic coordinates into a planar system, evaluated by a `geodesy`
    /// operator.
    pub struct GeodesyProjection {
        context: Minimal,
        op: OpHandle,
        definition: String,
    }

    impl GeodesyProjection {
        /// Creates a projection from an operator definition, e.g. `utm zone=31`.
        pub fn new(definition: &str) -> Result<Self, GeodenseTypesError> {
            let mut context = Minimal::new();
            let op = context.op(definition).map_err(|err| {
                GeodenseTypesError::Projection(format!("invalid definition '{definition}': {err}"))
            })?;
            Ok(Self {
                context,
                op,
                definition: definition.to_string(),
            })
        }
    }

    impl std::fmt::Debug for GeodesyProjection {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("GeodesyProjection")
                .field("definition", &self.definition)
                .finish()
        }
    }

    impl Projection for GeodesyProjection {
        type InPoint = GeoPoint2d;
        type OutPoint = Point2<f64>;

        fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
            let mut data = [Coor2D::geo(input.lat(), input.lon())];
            self.context.apply(self.op, Fwd, &mut data).ok()?;

            if !data[0].0[0].is_finite() || !data[0].0[1].is_finite() {
                return None;
            }

            Some(Point2::new(data[0].0[0], data[0].0[1]))
        }

        fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
            let mut data = [Coor2D([input.x, input.y])];
            self.context.apply(self.op, Inv, &mut data).ok()?;

            if !data[0].0[0].is_finite() || !data[0].0[1].is_finite() {
                return None;
            }

            Some(GeoPoint2d::latlon(
                data[0].0[1].to_degrees(),
                data[0].0[0].to_degrees(),
            ))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use approx::assert_abs_diff_eq;

        #[test]
        fn utm_round_trip() {
            let projection = GeodesyProjection::new("utm zone=31").expect("valid definition");
            let point = GeoPoint2d::latlon(52.0, 3.0);

            let projected = projection.project(&point).expect("projectable");
            assert_abs_diff_eq!(projected.x, 500_000.0, epsilon = 0.001);
            assert!(projected.y > 5_700_000.0 && projected.y < 5_800_000.0);

            let unprojected = projection.unproject(&projected).expect("unprojectable");
            assert_abs_diff_eq!(unprojected.lat(), 52.0, epsilon = 1e-9);
            assert_abs_diff_eq!(unprojected.lon(), 3.0, epsilon = 1e-9);
        }

        #[test]
        fn invalid_definition() {
            assert!(GeodesyProjection::new("no_such_operator foo=bar").is_err());
        }
    }
}
