//! Andrew's monotone-chain convex hull.
//!
//! Purpose
//! - Deterministic hull of a finite point set, tolerant of duplicates and
//!   collinear runs, used by the solidity metric and the 3D hull seed step.
//!
//! Output contract
//! - Upper chain first (left to right), then lower chain (right to left),
//!   consistent orientation; no three consecutive output vertices collinear
//!   (the turn test pops on `>= 0`, which removes collinear points).
//! - Collinear input collapses to its two extreme points; inputs with at
//!   most one point are returned unchanged.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// Cross product of `q - r` with `p - r`: positive for a left turn,
/// negative for a right turn, zero when collinear.
#[inline]
fn turn(r: Vector2<f64>, q: Vector2<f64>, p: Vector2<f64>) -> f64 {
    (q.x - r.x) * (p.y - r.y) - (q.y - r.y) * (p.x - r.x)
}

/// Convex hull of `points` (monotone chain).
pub fn convex_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    if points.len() <= 1 {
        return points.to_vec();
    }

    // Total order: x ascending, ties by y ascending. Duplicates stay; they
    // end up adjacent and are absorbed by the collinear pop below.
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });

    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while upper.len() >= 2 {
            let q = upper[upper.len() - 1];
            let r = upper[upper.len() - 2];
            if turn(r, q, p) >= 0.0 {
                upper.pop();
            } else {
                break;
            }
        }
        upper.push(p);
    }
    upper.pop();

    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while lower.len() >= 2 {
            let q = lower[lower.len() - 1];
            let r = lower[lower.len() - 2];
            if turn(r, q, p) >= 0.0 {
                lower.pop();
            } else {
                break;
            }
        }
        lower.push(p);
    }
    lower.pop();

    // All-identical input leaves one copy in each chain; keep a single one.
    if upper.len() == 1 && lower.len() == 1 && upper[0] == lower[0] {
        return upper;
    }

    upper.extend(lower);
    upper
}
