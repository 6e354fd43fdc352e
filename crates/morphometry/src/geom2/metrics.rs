//! Planar shape descriptors derived from a closed contour.
//!
//! Purpose
//! - Turn a `Polygon2` into the five 2D morphology numbers: area, perimeter,
//!   circularity, solidity and shape index.
//! - Objects without a contour measure as a circle of their radius; all
//!   ratios are 1 there by construction.

use std::f64::consts::PI;

use nalgebra::Vector2;

use super::hull::convex_hull;
use super::polygon::Polygon2;

/// Absolute shoelace area of a closed vertex loop. Zero for < 3 vertices.
pub fn polygon_area(verts: &[Vector2<f64>]) -> f64 {
    if verts.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    (acc * 0.5).abs()
}

/// Euclidean length of the closed vertex loop, wrap-around edge included.
/// Zero for < 2 vertices.
pub fn polygon_perimeter(verts: &[Vector2<f64>]) -> f64 {
    if verts.len() < 2 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        acc += (q - p).norm();
    }
    acc
}

/// The five planar descriptors, bundled for one contour.
#[derive(Clone, Copy, Debug)]
pub struct ShapeSummary2 {
    pub area: f64,
    pub perimeter: f64,
    /// `4π·area / perimeter²`; 1 for a circle, NaN for a zero perimeter.
    pub circularity: f64,
    /// `area / hull_area`; 1 for a convex contour, NaN when the hull is
    /// degenerate.
    pub solidity: f64,
    /// `perimeter / sqrt(area)`; NaN for zero area.
    pub shape_index: f64,
}

impl ShapeSummary2 {
    /// Measure a contour.
    pub fn measure(poly: &Polygon2) -> Self {
        let area = polygon_area(&poly.verts);
        let perimeter = polygon_perimeter(&poly.verts);
        let hull_area = polygon_area(&convex_hull(&poly.verts));

        let circularity = if perimeter > 0.0 {
            4.0 * PI * area / (perimeter * perimeter)
        } else {
            f64::NAN
        };
        let solidity = if hull_area > 0.0 {
            area / hull_area
        } else {
            f64::NAN
        };
        let shape_index = if area > 0.0 {
            perimeter / area.sqrt()
        } else {
            f64::NAN
        };

        Self {
            area,
            perimeter,
            circularity,
            solidity,
            shape_index,
        }
    }

    /// Descriptor values of an ideal circle of radius `r` (the no-contour
    /// fallback).
    pub fn circle(r: f64) -> Self {
        let area = PI * r * r;
        let perimeter = 2.0 * PI * r;
        Self {
            area,
            perimeter,
            circularity: 1.0,
            solidity: 1.0,
            shape_index: 2.0 * PI.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Polygon2 {
        Polygon2::from_xy(&[0.0, 1.0, 1.0, 0.0], &[0.0, 0.0, 1.0, 1.0]).unwrap()
    }

    #[test]
    fn square_descriptors() {
        let s = ShapeSummary2::measure(&unit_square());
        assert_relative_eq!(s.area, 1.0, epsilon = 1e-12);
        assert_relative_eq!(s.perimeter, 4.0, epsilon = 1e-12);
        assert_relative_eq!(s.circularity, PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(s.solidity, 1.0, epsilon = 1e-12);
        assert_relative_eq!(s.shape_index, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn orientation_does_not_change_area() {
        let ccw = unit_square();
        let cw = Polygon2::new(ccw.verts.iter().rev().copied().collect());
        assert_relative_eq!(
            polygon_area(&ccw.verts),
            polygon_area(&cw.verts),
            epsilon = 1e-12
        );
    }

    #[test]
    fn concave_contour_has_solidity_below_one() {
        // Square with a notch cut into the top edge.
        let notched = Polygon2::from_xy(
            &[0.0, 4.0, 4.0, 2.5, 2.0, 1.5, 0.0],
            &[0.0, 0.0, 4.0, 4.0, 1.0, 4.0, 4.0],
        )
        .unwrap();
        let s = ShapeSummary2::measure(&notched);
        assert!(s.solidity < 1.0, "solidity {}", s.solidity);
        assert!(s.area < 16.0);
    }

    #[test]
    fn degenerate_contours_measure_to_zero_or_nan() {
        let empty = Polygon2::default();
        let s = ShapeSummary2::measure(&empty);
        assert_eq!(s.area, 0.0);
        assert_eq!(s.perimeter, 0.0);
        assert!(s.circularity.is_nan());
        assert!(s.solidity.is_nan());
        assert!(s.shape_index.is_nan());

        let two = Polygon2::from_xy(&[0.0, 1.0], &[0.0, 0.0]).unwrap();
        assert_eq!(polygon_perimeter(&two.verts), 2.0);
        assert_eq!(polygon_area(&two.verts), 0.0);
    }

    #[test]
    fn circle_fallback_is_self_consistent() {
        let s = ShapeSummary2::circle(3.0);
        assert_relative_eq!(s.area, 9.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(s.perimeter, 6.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(
            4.0 * PI * s.area / (s.perimeter * s.perimeter),
            1.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(s.shape_index, s.perimeter / s.area.sqrt(), epsilon = 1e-12);
    }
}
