//! Shape descriptor analyzer: planar metrics for 2D spots, volumetric
//! metrics for 3D spots.

use crate::features::{self, FeatureInfo};
use crate::geom2::ShapeSummary2;
use crate::geom3::ShapeSummary3;
use crate::spot::{Boundary, Dim, FeatureSink, Spot};

use super::{AnalyzerError, SpotAnalyzer};

/// Writes AREA, PERIMETER, CIRCULARITY, SOLIDITY, SHAPE_INDEX, VOLUME,
/// CONVEXITY and SPHERICITY; the keys undefined for the spot's
/// dimensionality carry NaN.
pub struct ShapeAnalyzer;

impl SpotAnalyzer for ShapeAnalyzer {
    fn key(&self) -> &'static str {
        "SHAPE"
    }

    fn features(&self) -> &'static [FeatureInfo] {
        features::SHAPE_FEATURES
    }

    fn analyze(&self, spot: &mut Spot) -> Result<(), AnalyzerError> {
        match spot.dim {
            Dim::Two => {
                let summary = match &spot.boundary {
                    Boundary::Polygon(p) if p.len() >= 3 => ShapeSummary2::measure(p),
                    _ => ShapeSummary2::circle(spot.radius),
                };
                spot.put(features::AREA, summary.area);
                spot.put(features::PERIMETER, summary.perimeter);
                spot.put(features::CIRCULARITY, summary.circularity);
                spot.put(features::SOLIDITY, summary.solidity);
                spot.put(features::SHAPE_INDEX, summary.shape_index);
                spot.put(features::VOLUME, f64::NAN);
                spot.put(features::CONVEXITY, f64::NAN);
                spot.put(features::SPHERICITY, f64::NAN);
            }
            Dim::Three => {
                let summary = match &spot.boundary {
                    Boundary::Mesh(m) if m.face_count() > 0 => ShapeSummary3::measure(m),
                    _ => ShapeSummary3::sphere(spot.radius),
                };
                spot.put(features::AREA, summary.surface_area);
                spot.put(features::VOLUME, summary.volume);
                spot.put(features::SOLIDITY, summary.solidity);
                spot.put(features::CONVEXITY, summary.convexity);
                spot.put(features::SPHERICITY, summary.sphericity);
                spot.put(features::PERIMETER, f64::NAN);
                spot.put(features::CIRCULARITY, f64::NAN);
                spot.put(features::SHAPE_INDEX, f64::NAN);
            }
        }
        Ok(())
    }
}
