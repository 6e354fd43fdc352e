//! The analyzed object (`Spot`), its boundary variant and the feature sink.
//!
//! Purpose
//! - A spot is one detected object: center, radius, quality, dimensionality,
//!   an optional boundary, and the feature map all analyzers write into.
//! - The feature map is the spot's only mutable state during analysis and is
//!   owned exclusively by the task processing that spot, so the batch layer
//!   needs no locking.
//!
//! Boundary coordinates are spot-relative: producers with absolute
//! coordinates translate by the spot center before attaching a boundary.

use std::collections::HashMap;

use nalgebra::Vector3;

use crate::geom2::Polygon2;
use crate::geom3::TriMesh;

/// Acquisition dimensionality of the object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dim {
    Two,
    Three,
}

/// What is known about the object's boundary.
///
/// `Circle` is the radius-only fallback used when detection produced no
/// contour or mesh; geometry code pattern-matches on the variant instead of
/// type-testing.
#[derive(Clone, Debug)]
pub enum Boundary {
    Circle(f64),
    Polygon(Polygon2),
    Mesh(TriMesh),
}

/// Write seam for feature values. Analyzers only ever `put`; they never
/// replace or clear the map.
pub trait FeatureSink {
    fn put(&mut self, key: &str, value: f64);
}

/// One detected object.
#[derive(Clone, Debug)]
pub struct Spot {
    pub center: Vector3<f64>,
    pub radius: f64,
    pub quality: f64,
    pub dim: Dim,
    pub boundary: Boundary,
    features: HashMap<String, f64>,
}

impl Spot {
    /// Planar spot (z = 0) with the radius-only boundary fallback.
    pub fn planar(x: f64, y: f64, radius: f64, quality: f64) -> Self {
        Self {
            center: Vector3::new(x, y, 0.0),
            radius,
            quality,
            dim: Dim::Two,
            boundary: Boundary::Circle(radius),
            features: HashMap::new(),
        }
    }

    /// Volumetric spot with the radius-only boundary fallback.
    pub fn volumetric(x: f64, y: f64, z: f64, radius: f64, quality: f64) -> Self {
        Self {
            center: Vector3::new(x, y, z),
            radius,
            quality,
            dim: Dim::Three,
            boundary: Boundary::Circle(radius),
            features: HashMap::new(),
        }
    }

    /// Attach a spot-relative contour.
    pub fn with_polygon(mut self, polygon: Polygon2) -> Self {
        self.boundary = Boundary::Polygon(polygon);
        self
    }

    /// Attach a spot-relative mesh.
    pub fn with_mesh(mut self, mesh: TriMesh) -> Self {
        self.boundary = Boundary::Mesh(mesh);
        self
    }

    #[inline]
    pub fn feature(&self, key: &str) -> Option<f64> {
        self.features.get(key).copied()
    }

    #[inline]
    pub fn features(&self) -> &HashMap<String, f64> {
        &self.features
    }
}

impl FeatureSink for Spot {
    #[inline]
    fn put(&mut self, key: &str, value: f64) {
        self.features.insert(key.to_owned(), value);
    }
}
