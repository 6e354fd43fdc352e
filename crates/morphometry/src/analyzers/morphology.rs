//! Legacy moment-based morphology classifier.
//!
//! A second, independently tunable classification path: multiplicative
//! significance factor over ascending-sorted semi-axes, kept separate from
//! the ellipsoid analyzer's additive-relative rule because stored data
//! depends on each rule's exact thresholds.

use crate::features::{self, FeatureInfo};
use crate::fit::fit_ellipse;
use crate::geom3::{classify_factor_2d, classify_factor_3d, fit_ellipsoid, ShapeClass};
use crate::spot::{Boundary, Dim, FeatureSink, Spot};

use super::{AnalyzerError, SpotAnalyzer};

/// Writes the MORPHOLOGY class code.
pub struct MorphologyAnalyzer;

impl SpotAnalyzer for MorphologyAnalyzer {
    fn key(&self) -> &'static str {
        "MORPHOLOGY"
    }

    fn features(&self) -> &'static [FeatureInfo] {
        features::MORPHOLOGY_FEATURES
    }

    fn analyze(&self, spot: &mut Spot) -> Result<(), AnalyzerError> {
        let code = match (spot.dim, &spot.boundary) {
            (Dim::Two, Boundary::Polygon(p)) if p.len() >= 3 => match fit_ellipse(&p.verts) {
                Ok((_conic, params)) => {
                    classify_factor_2d(params.semi_minor, params.semi_major).code()
                }
                Err(err) => {
                    log::debug!("morphology fit failed: {err}");
                    f64::NAN
                }
            },
            (Dim::Three, Boundary::Mesh(m)) => match fit_ellipsoid(m) {
                Some(fit) => classify_factor_3d(fit.radii).code(),
                None => f64::NAN,
            },
            // Radius-only objects are spherical by definition.
            (_, Boundary::Circle(_)) => ShapeClass::Sphere.code(),
            // Mismatched boundary/dimensionality combinations are undefined.
            _ => f64::NAN,
        };
        spot.put(features::MORPHOLOGY, code);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::fit::EllipseParams;
    use crate::geom2::Polygon2;
    use crate::geom3::TriMesh;

    #[test]
    fn elongated_contour_is_prolate() {
        let poly = Polygon2::new(
            EllipseParams {
                x0: 0.0,
                y0: 0.0,
                semi_major: 6.0,
                semi_minor: 2.0,
                theta: 0.4,
            }
            .sample_points(24),
        );
        let mut spot = Spot::planar(0.0, 0.0, 1.0, 1.0).with_polygon(poly);
        MorphologyAnalyzer.analyze(&mut spot).unwrap();
        assert_eq!(
            spot.feature(features::MORPHOLOGY),
            Some(ShapeClass::Prolate.code())
        );
    }

    #[test]
    fn round_contour_is_spherical() {
        let poly = Polygon2::new(EllipseParams::circle(3.0).sample_points(24));
        let mut spot = Spot::planar(0.0, 0.0, 3.0, 1.0).with_polygon(poly);
        MorphologyAnalyzer.analyze(&mut spot).unwrap();
        assert_eq!(
            spot.feature(features::MORPHOLOGY),
            Some(ShapeClass::Sphere.code())
        );
    }

    #[test]
    fn radius_only_spots_are_spherical() {
        let mut planar = Spot::planar(0.0, 0.0, 1.0, 1.0);
        MorphologyAnalyzer.analyze(&mut planar).unwrap();
        assert_eq!(
            planar.feature(features::MORPHOLOGY),
            Some(ShapeClass::Sphere.code())
        );

        let mut volumetric = Spot::volumetric(0.0, 0.0, 0.0, 1.0, 1.0);
        MorphologyAnalyzer.analyze(&mut volumetric).unwrap();
        assert_eq!(
            volumetric.feature(features::MORPHOLOGY),
            Some(ShapeClass::Sphere.code())
        );
    }

    #[test]
    fn stretched_mesh_is_prolate_under_the_factor_rule() {
        // One long axis, two equal short ones.
        let mesh = TriMesh::icosphere(1.0, 1.0, 2.0, 2);
        let mut spot = Spot::volumetric(0.0, 0.0, 0.0, 1.0, 1.0).with_mesh(mesh);
        MorphologyAnalyzer.analyze(&mut spot).unwrap();
        assert_eq!(
            spot.feature(features::MORPHOLOGY),
            Some(ShapeClass::Prolate.code())
        );
    }

    #[test]
    fn flattened_mesh_is_oblate_under_the_factor_rule() {
        // Two long axes, one short one.
        let mesh = TriMesh::icosphere(2.0, 2.0, 1.0, 2);
        let mut spot = Spot::volumetric(0.0, 0.0, 0.0, 1.0, 1.0).with_mesh(mesh);
        MorphologyAnalyzer.analyze(&mut spot).unwrap();
        assert_eq!(
            spot.feature(features::MORPHOLOGY),
            Some(ShapeClass::Oblate.code())
        );
    }

    #[test]
    fn degenerate_contour_is_undefined() {
        let line = Polygon2::from_xy(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap();
        let mut spot = Spot::planar(0.0, 0.0, 1.0, 1.0).with_polygon(line);
        MorphologyAnalyzer.analyze(&mut spot).unwrap();
        assert!(spot.feature(features::MORPHOLOGY).unwrap().is_nan());
    }
}
