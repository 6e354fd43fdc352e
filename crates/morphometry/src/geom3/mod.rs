//! 3D boundary geometry: triangle meshes, convex hulls, volumetric shape
//! metrics, ellipsoid fitting and shape classification.
//!
//! Purpose
//! - The volumetric half of the morphology engine. Meshes are consumed only
//!   through vertex iteration, volume, surface area and hull construction;
//!   everything else is derived from those four operations.
//! - Degenerate meshes (too few vertices, coplanar clouds) degrade to NaN
//!   metrics, never to a panic.

pub mod classify;
pub mod ellipsoid;
pub mod hull;
pub mod mesh;
pub mod metrics;

pub use classify::{classify_factor_2d, classify_factor_3d, classify_relative, ShapeClass};
pub use ellipsoid::{fit_ellipsoid, EllipsoidFit};
pub use hull::convex_hull3;
pub use mesh::TriMesh;
pub use metrics::ShapeSummary3;
