//! Volumetric shape descriptors derived from a closed mesh.

use std::f64::consts::PI;

use super::mesh::TriMesh;

/// The five volumetric descriptors, bundled for one mesh.
#[derive(Clone, Copy, Debug)]
pub struct ShapeSummary3 {
    pub volume: f64,
    pub surface_area: f64,
    /// `volume / hull_volume`; 1 for a convex body, NaN when the hull is
    /// degenerate.
    pub solidity: f64,
    /// `surface_area / hull_surface_area`; 1 for a convex body.
    pub convexity: f64,
    /// `pi^(1/3) * (6*volume)^(2/3) / surface_area`: the surface area of the
    /// equal-volume sphere over the actual surface area. At most 1, exactly
    /// 1 for a perfect sphere.
    pub sphericity: f64,
}

impl ShapeSummary3 {
    /// Measure a mesh. Hull-based ratios degrade to NaN when the vertex
    /// cloud has no proper hull.
    pub fn measure(mesh: &TriMesh) -> Self {
        let volume = mesh.volume();
        let surface_area = mesh.surface_area();

        let (solidity, convexity) = match mesh.convex_hull() {
            Some(hull) => {
                let hv = hull.volume();
                let ha = hull.surface_area();
                (
                    if hv > 0.0 { volume / hv } else { f64::NAN },
                    if ha > 0.0 { surface_area / ha } else { f64::NAN },
                )
            }
            None => (f64::NAN, f64::NAN),
        };

        let sphericity = if surface_area > 0.0 {
            PI.powf(1.0 / 3.0) * (6.0 * volume).powf(2.0 / 3.0) / surface_area
        } else {
            f64::NAN
        };

        Self {
            volume,
            surface_area,
            solidity,
            convexity,
            sphericity,
        }
    }

    /// Descriptor values of an ideal sphere of radius `r` (the no-mesh
    /// fallback).
    pub fn sphere(r: f64) -> Self {
        Self {
            volume: 4.0 / 3.0 * PI * r * r * r,
            surface_area: 4.0 * PI * r * r,
            solidity: 1.0,
            convexity: 1.0,
            sphericity: 1.0,
        }
    }
}
