//! Per-object shape and morphology engine.
//!
//! Turns a detected object's boundary (a 2D contour, a 3D mesh, or just a
//! radius) into quantitative shape descriptors — area, perimeter,
//! circularity, solidity, ellipse and ellipsoid fits, sphericity, discrete
//! shape classes — and fans any such per-object computation across a
//! collection on a bounded worker pool with per-object failure isolation.
//!
//! Layering (leaves first): `geom2` and `geom3` hold the pure geometry,
//! `fit` the numeric kernels, `spot`/`features` the object model, and
//! `analyzers`/`exec` the computation units and the batch harness. No module
//! here touches I/O; feature maps are the only output channel.

pub mod analyzers;
pub mod exec;
pub mod features;
pub mod fit;
pub mod geom2;
pub mod geom3;
pub mod spot;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analyzers::{
        run_analyzer, AnalyzerError, EllipseAnalyzer, EllipsoidAnalyzer, MorphologyAnalyzer,
        ShapeAnalyzer, SpotAnalyzer,
    };
    pub use crate::exec::{BatchProcessor, BatchSummary};
    pub use crate::features::{Dimension, FeatureInfo};
    pub use crate::fit::{fit_ellipse, ConicCoeffs, EllipseParams, FitError};
    pub use crate::geom2::{convex_hull, Polygon2, ShapeSummary2};
    pub use crate::geom3::{
        classify_factor_2d, classify_factor_3d, classify_relative, convex_hull3, fit_ellipsoid,
        EllipsoidFit, ShapeClass, ShapeSummary3, TriMesh,
    };
    pub use crate::spot::{Boundary, Dim, FeatureSink, Spot};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
