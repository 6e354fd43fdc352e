//! Ellipsoid-fit analyzer for volumetric spots.
//!
//! The fit's radii and axes are consumed positionally (rA from slot 0, rC
//! from slot 2) without re-sorting; the aspect ratio is `rA / rC` under that
//! wiring, matching the behavior of the system being reimplemented even
//! though the decomposition does not guarantee any magnitude order.

use crate::features::{self, FeatureInfo};
use crate::geom3::{classify_relative, fit_ellipsoid, ShapeClass};
use crate::spot::{Boundary, Dim, FeatureSink, Spot};

use super::{AnalyzerError, SpotAnalyzer};

/// Writes the fitted ellipsoid (relative center, three radii, per-axis
/// orientation angles, aspect ratio) plus the discrete shape class from the
/// additive-relative rule.
pub struct EllipsoidAnalyzer;

impl SpotAnalyzer for EllipsoidAnalyzer {
    fn key(&self) -> &'static str {
        "ELLIPSOID"
    }

    fn features(&self) -> &'static [FeatureInfo] {
        features::ELLIPSOID_FEATURES
    }

    fn analyze(&self, spot: &mut Spot) -> Result<(), AnalyzerError> {
        if spot.dim != Dim::Three {
            // Planar objects: everything undefined except the class code,
            // which defaults to the generic ellipsoid.
            for info in features::ELLIPSOID_FEATURES {
                spot.put(info.key, f64::NAN);
            }
            spot.put(features::ELLIPSOID_SHAPE, ShapeClass::GENERIC.code());
            return Ok(());
        }

        let fit = match &spot.boundary {
            Boundary::Mesh(m) => fit_ellipsoid(m),
            _ => None,
        };

        match fit {
            Some(fit) => {
                let r_a = fit.radii[0].abs();
                let r_b = fit.radii[1].abs();
                let r_c = fit.radii[2].abs();

                spot.put(features::ELLIPSOID_X0, fit.center.x);
                spot.put(features::ELLIPSOID_Y0, fit.center.y);
                spot.put(features::ELLIPSOID_Z0, fit.center.z);
                spot.put(features::ELLIPSOID_MINOR_LENGTH, r_a);
                spot.put(features::ELLIPSOID_MEDIAN_LENGTH, r_b);
                spot.put(features::ELLIPSOID_MAJOR_LENGTH, r_c);

                let angle_keys = [
                    (features::ELLIPSOID_MINOR_PHI, features::ELLIPSOID_MINOR_THETA),
                    (
                        features::ELLIPSOID_MEDIAN_PHI,
                        features::ELLIPSOID_MEDIAN_THETA,
                    ),
                    (features::ELLIPSOID_MAJOR_PHI, features::ELLIPSOID_MAJOR_THETA),
                ];
                for (axis, (phi_key, theta_key)) in fit.axes.iter().zip(angle_keys) {
                    spot.put(phi_key, axis.y.atan2(axis.x));
                    spot.put(theta_key, axis.z.clamp(-1.0, 1.0).acos());
                }

                spot.put(features::ELLIPSOID_ASPECTRATIO, r_a / r_c);
                spot.put(
                    features::ELLIPSOID_SHAPE,
                    classify_relative(r_a, r_b, r_c).code(),
                );
            }
            None => {
                // Sphere-of-radius fallback: no orientation, generic class.
                let r = spot.radius;
                spot.put(features::ELLIPSOID_X0, 0.0);
                spot.put(features::ELLIPSOID_Y0, 0.0);
                spot.put(features::ELLIPSOID_Z0, 0.0);
                spot.put(features::ELLIPSOID_MINOR_LENGTH, r);
                spot.put(features::ELLIPSOID_MEDIAN_LENGTH, r);
                spot.put(features::ELLIPSOID_MAJOR_LENGTH, r);
                spot.put(features::ELLIPSOID_MINOR_PHI, 0.0);
                spot.put(features::ELLIPSOID_MINOR_THETA, 0.0);
                spot.put(features::ELLIPSOID_MEDIAN_PHI, 0.0);
                spot.put(features::ELLIPSOID_MEDIAN_THETA, 0.0);
                spot.put(features::ELLIPSOID_MAJOR_PHI, 0.0);
                spot.put(features::ELLIPSOID_MAJOR_THETA, 0.0);
                spot.put(features::ELLIPSOID_ASPECTRATIO, 1.0);
                spot.put(features::ELLIPSOID_SHAPE, ShapeClass::GENERIC.code());
            }
        }
        Ok(())
    }
}
