//! Ellipse-fit analyzer for planar spots.

use crate::features::{self, FeatureInfo};
use crate::fit::{fit_ellipse, EllipseParams};
use crate::spot::{Boundary, Dim, FeatureSink, Spot};

use super::{AnalyzerError, SpotAnalyzer};

/// Writes the fitted ellipse (center relative to the spot center, semi-axes,
/// angle, aspect ratio). Spots without a contour fall back to a circle of
/// their radius; failed fits and 3D spots write NaN.
pub struct EllipseAnalyzer;

impl SpotAnalyzer for EllipseAnalyzer {
    fn key(&self) -> &'static str {
        "ELLIPSE"
    }

    fn features(&self) -> &'static [FeatureInfo] {
        features::ELLIPSE_FEATURES
    }

    fn analyze(&self, spot: &mut Spot) -> Result<(), AnalyzerError> {
        let params = match (spot.dim, &spot.boundary) {
            (Dim::Two, Boundary::Polygon(p)) if p.len() >= 3 => match fit_ellipse(&p.verts) {
                Ok((_conic, params)) => Some(params),
                Err(err) => {
                    log::debug!("ellipse fit failed: {err}");
                    None
                }
            },
            (Dim::Two, _) => Some(EllipseParams::circle(spot.radius)),
            (Dim::Three, _) => None,
        };

        match params {
            Some(p) => {
                spot.put(features::ELLIPSE_X0, p.x0);
                spot.put(features::ELLIPSE_Y0, p.y0);
                spot.put(features::ELLIPSE_MAJOR, p.semi_major);
                spot.put(features::ELLIPSE_MINOR, p.semi_minor);
                spot.put(features::ELLIPSE_THETA, p.theta);
                spot.put(features::ELLIPSE_ASPECTRATIO, p.aspect_ratio());
            }
            None => {
                for info in features::ELLIPSE_FEATURES {
                    spot.put(info.key, f64::NAN);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::geom2::Polygon2;

    #[test]
    fn contour_on_a_known_ellipse_recovers_its_parameters() {
        let truth = EllipseParams {
            x0: 0.0,
            y0: 0.0,
            semi_major: 10.0,
            semi_minor: 5.0,
            theta: 0.0,
        };
        let poly = Polygon2::new(truth.sample_points(24));
        let mut spot = Spot::planar(50.0, 60.0, 7.0, 1.0).with_polygon(poly);
        EllipseAnalyzer.analyze(&mut spot).unwrap();

        assert_relative_eq!(
            spot.feature(features::ELLIPSE_MAJOR).unwrap(),
            10.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            spot.feature(features::ELLIPSE_MINOR).unwrap(),
            5.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            spot.feature(features::ELLIPSE_ASPECTRATIO).unwrap(),
            2.0,
            epsilon = 1e-6
        );
        assert!(spot.feature(features::ELLIPSE_THETA).unwrap().abs() < 1e-6);
        assert!(spot.feature(features::ELLIPSE_X0).unwrap().abs() < 1e-6);
    }

    #[test]
    fn no_contour_falls_back_to_a_circle() {
        let mut spot = Spot::planar(0.0, 0.0, 4.0, 1.0);
        EllipseAnalyzer.analyze(&mut spot).unwrap();
        assert_eq!(spot.feature(features::ELLIPSE_X0), Some(0.0));
        assert_eq!(spot.feature(features::ELLIPSE_Y0), Some(0.0));
        assert_eq!(spot.feature(features::ELLIPSE_MAJOR), Some(4.0));
        assert_eq!(spot.feature(features::ELLIPSE_MINOR), Some(4.0));
        assert_eq!(spot.feature(features::ELLIPSE_THETA), Some(0.0));
        assert_eq!(spot.feature(features::ELLIPSE_ASPECTRATIO), Some(1.0));
    }

    #[test]
    fn degenerate_contour_degrades_to_nan() {
        let line = Polygon2::from_xy(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();
        let mut spot = Spot::planar(0.0, 0.0, 1.0, 1.0).with_polygon(line);
        EllipseAnalyzer.analyze(&mut spot).unwrap();
        for info in features::ELLIPSE_FEATURES {
            assert!(
                spot.feature(info.key).unwrap().is_nan(),
                "{} should be NaN",
                info.key
            );
        }
    }

    #[test]
    fn volumetric_spots_get_nan() {
        let mut spot = Spot::volumetric(0.0, 0.0, 0.0, 1.0, 1.0);
        EllipseAnalyzer.analyze(&mut spot).unwrap();
        assert!(spot.feature(features::ELLIPSE_MAJOR).unwrap().is_nan());
    }
}
