//! Closed 2D contour (`Polygon2`).
//!
//! Purpose
//! - One ordered-vertex representation for object boundaries: vertex `i`
//!   connects to vertex `(i + 1) % n`, no explicit closing vertex.
//! - Coordinates may be object-relative or absolute; the two differ only by
//!   a translation and every consumer is translation-aware.
//!
//! Invariants
//! - `n == 0` or `n >= 3` for a meaningful area; smaller contours are legal
//!   values but measure to zero/NaN downstream.

use nalgebra::Vector2;
use thiserror::Error;

/// Coordinate slices of unequal length were passed to [`Polygon2::from_xy`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("coordinate slices differ in length: {xs} x-values vs {ys} y-values")]
pub struct LengthMismatch {
    pub xs: usize,
    pub ys: usize,
}

/// Closed, non-self-intersecting 2D contour.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon2 {
    pub verts: Vec<Vector2<f64>>,
}

impl Polygon2 {
    #[inline]
    pub fn new(verts: Vec<Vector2<f64>>) -> Self {
        Self { verts }
    }

    /// Build from parallel coordinate slices (the wire representation used
    /// by boundary producers).
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self, LengthMismatch> {
        if xs.len() != ys.len() {
            return Err(LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        Ok(Self {
            verts: xs
                .iter()
                .zip(ys.iter())
                .map(|(&x, &y)| Vector2::new(x, y))
                .collect(),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Vertex mean. `None` for an empty contour.
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        if self.verts.is_empty() {
            return None;
        }
        let mut acc = Vector2::zeros();
        for &v in &self.verts {
            acc += v;
        }
        Some(acc / self.verts.len() as f64)
    }

    /// Contour translated by `t` (switches between relative and absolute
    /// coordinate frames).
    pub fn translated(&self, t: Vector2<f64>) -> Self {
        Self {
            verts: self.verts.iter().map(|v| v + t).collect(),
        }
    }
}
