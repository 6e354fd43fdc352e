//! Constrained direct least-squares ellipse fit.
//!
//! Purpose
//! - Fit one conic, constrained to be an ellipse, through a 2D point set in
//!   a single linear-algebra pass (no iteration), then convert the algebraic
//!   coefficients to geometric parameters.
//!
//! Method
//! - Split the design matrix into quadratic columns `D1 = [x², xy, y²]` and
//!   linear columns `D2 = [x, y, 1]`, reduce via `T = -pinv(S3)·S2ᵀ`, and
//!   solve the 3x3 eigenproblem of the reduced matrix. The pseudo-inverse
//!   (instead of a plain inverse of `S3`) lets near-singular point sets
//!   degrade to a reported failure rather than a numeric blow-up.
//! - Among the eigenvectors, the ellipse solution is the first (in emission
//!   order) whose discriminant `4·v0·v2 - v1²` is positive.
//!
//! Code cross-refs: `pinv::pinv`, `eigen::real_eigenpairs_3x3`.

use nalgebra::{DMatrix, Matrix3, Vector2, Vector3};
use thiserror::Error;

use super::eigen::real_eigenpairs_3x3;
use super::pinv::pinv;

/// Failure modes of the ellipse fit. All of them are per-object conditions;
/// callers degrade the affected object's outputs to NaN.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FitError {
    #[error("too few points: need {needed}, got {got}")]
    TooFewPoints { needed: usize, got: usize },
    /// The linear subsystem has rank 0 (e.g. all points coincide).
    #[error("point set is degenerate for a conic fit")]
    DegenerateInput,
    /// No eigenvector satisfies the ellipse discriminant (collinear or
    /// hyperbolic point sets).
    #[error("no ellipse-consistent solution for this point set")]
    NoEllipseSolution,
    /// The recovered conic does not convert to a proper ellipse.
    #[error("fitted conic is not a proper ellipse")]
    NotAnEllipse,
}

/// Algebraic conic `a x² + 2b xy + c y² + 2d x + 2f y + g = 0`, scaled to
/// unit Euclidean norm of the coefficient 6-vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConicCoeffs {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub f: f64,
    pub g: f64,
}

impl ConicCoeffs {
    /// Ellipse condition in this convention: `a·c - b² > 0`.
    #[inline]
    pub fn is_ellipse(&self) -> bool {
        self.a * self.c - self.b * self.b > 0.0
    }

    #[inline]
    fn norm(&self) -> f64 {
        (self.a * self.a
            + self.b * self.b
            + self.c * self.c
            + self.d * self.d
            + self.f * self.f
            + self.g * self.g)
            .sqrt()
    }
}

/// Geometric ellipse parameters. `semi_major >= semi_minor`; `theta` is the
/// major-axis angle in radians, wrapped into (-pi, pi] after the swap step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseParams {
    pub x0: f64,
    pub y0: f64,
    pub semi_major: f64,
    pub semi_minor: f64,
    pub theta: f64,
}

impl EllipseParams {
    /// Degenerate-object fallback: a circle of radius `r` at the origin.
    pub fn circle(r: f64) -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            semi_major: r,
            semi_minor: r,
            theta: 0.0,
        }
    }

    /// `semi_major / semi_minor`, >= 1 by construction.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.semi_major / self.semi_minor
    }

    /// Sample `n` points on the boundary, equally spaced in the parametric
    /// angle.
    pub fn sample_points(&self, n: usize) -> Vec<Vector2<f64>> {
        let cos_t = self.theta.cos();
        let sin_t = self.theta.sin();
        (0..n)
            .map(|i| {
                let t = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
                let px = self.semi_major * t.cos();
                let py = self.semi_minor * t.sin();
                Vector2::new(
                    self.x0 + cos_t * px - sin_t * py,
                    self.y0 + sin_t * px + cos_t * py,
                )
            })
            .collect()
    }
}

/// Wrap an angle into (-pi, pi].
#[inline]
fn wrap_pi(a: f64) -> f64 {
    let mut x = a;
    while x <= -std::f64::consts::PI {
        x += 2.0 * std::f64::consts::PI;
    }
    while x > std::f64::consts::PI {
        x -= 2.0 * std::f64::consts::PI;
    }
    x
}

/// Fit an ellipse through `points` (object-relative or absolute; the fit
/// centers on the centroid internally and translates back algebraically).
///
/// Deterministic for a given point set: no randomized tie-breaking anywhere
/// in the pipeline.
pub fn fit_ellipse(points: &[Vector2<f64>]) -> Result<(ConicCoeffs, EllipseParams), FitError> {
    let n = points.len();
    if n < 3 {
        return Err(FitError::TooFewPoints { needed: 3, got: n });
    }

    let mx = points.iter().map(|p| p.x).sum::<f64>() / n as f64;
    let my = points.iter().map(|p| p.y).sum::<f64>() / n as f64;

    // Design matrices over centered coordinates.
    let mut d1 = DMatrix::<f64>::zeros(n, 3);
    let mut d2 = DMatrix::<f64>::zeros(n, 3);
    for (i, p) in points.iter().enumerate() {
        let x = p.x - mx;
        let y = p.y - my;
        d1[(i, 0)] = x * x;
        d1[(i, 1)] = x * y;
        d1[(i, 2)] = y * y;
        d2[(i, 0)] = x;
        d2[(i, 1)] = y;
        d2[(i, 2)] = 1.0;
    }

    let s1_dyn = d1.transpose() * &d1;
    let s2_dyn = d1.transpose() * &d2;
    let s3_dyn = d2.transpose() * &d2;

    // Reduction matrix T = -pinv(S3) S2ᵀ; rank-0 S3 means the fit has no
    // usable solution for this point set.
    let t_dyn = -(pinv(&s3_dyn).ok_or(FitError::DegenerateInput)? * s2_dyn.transpose());

    let s1: Matrix3<f64> = s1_dyn.fixed_view::<3, 3>(0, 0).into_owned();
    let s2: Matrix3<f64> = s2_dyn.fixed_view::<3, 3>(0, 0).into_owned();
    let t: Matrix3<f64> = t_dyn.fixed_view::<3, 3>(0, 0).into_owned();

    let m = s1 + s2 * t;

    // Reduced system: rows scaled by 1/2, middle row sign-flipped.
    let r0 = m.row(0).clone_owned();
    let r1 = m.row(1).clone_owned();
    let r2 = m.row(2).clone_owned();
    let reduced = Matrix3::from_rows(&[r2 * 0.5, -r1, r0 * 0.5]);

    // First eigenvector (in emission order) satisfying the ellipse
    // discriminant 4 v0 v2 - v1² > 0.
    let pair = real_eigenpairs_3x3(&reduced)
        .into_iter()
        .find(|p| 4.0 * p.vector[0] * p.vector[2] - p.vector[1] * p.vector[1] > 0.0)
        .ok_or(FitError::NoEllipseSolution)?;
    log::trace!("ellipse solution at eigenvalue {}", pair.value);
    let a1: Vector3<f64> = pair.vector;

    let a2 = t * a1;

    // Conic in the centered frame: A x² + B xy + C y² + D x + E y + F = 0.
    let (big_a, big_b, big_c) = (a1[0], a1[1], a1[2]);
    let (big_d, big_e, big_f) = (a2[0], a2[1], a2[2]);

    // Undo the centering by substituting x -> x - mx, y -> y - my.
    let d_abs = big_d - 2.0 * big_a * mx - big_b * my;
    let e_abs = big_e - big_b * mx - 2.0 * big_c * my;
    let f_abs = big_f + big_a * mx * mx + big_b * mx * my + big_c * my * my
        - big_d * mx
        - big_e * my;

    // Switch to the 2b/2d/2f convention, orient so a + c > 0, normalize.
    let mut conic = ConicCoeffs {
        a: big_a,
        b: big_b * 0.5,
        c: big_c,
        d: d_abs * 0.5,
        f: e_abs * 0.5,
        g: f_abs,
    };
    if conic.a + conic.c < 0.0 {
        conic = ConicCoeffs {
            a: -conic.a,
            b: -conic.b,
            c: -conic.c,
            d: -conic.d,
            f: -conic.f,
            g: -conic.g,
        };
    }
    let norm = conic.norm();
    if !norm.is_finite() || norm <= 0.0 {
        return Err(FitError::NotAnEllipse);
    }
    conic = ConicCoeffs {
        a: conic.a / norm,
        b: conic.b / norm,
        c: conic.c / norm,
        d: conic.d / norm,
        f: conic.f / norm,
        g: conic.g / norm,
    };

    let params = conic_to_params(&conic)?;
    Ok((conic, params))
}

/// Closed-form conversion from algebraic coefficients to geometric
/// parameters (Cartesian-form recovery of center, semi-axes and angle).
pub fn conic_to_params(conic: &ConicCoeffs) -> Result<EllipseParams, FitError> {
    let ConicCoeffs { a, b, c, d, f, g } = *conic;

    let denom = b * b - a * c;
    if denom >= 0.0 {
        return Err(FitError::NotAnEllipse);
    }

    let x0 = (c * d - b * f) / denom;
    let y0 = (a * f - b * d) / denom;

    let num = 2.0 * (a * f * f + c * d * d + g * b * b - 2.0 * b * d * f - a * c * g);
    let root = ((a - c) * (a - c) + 4.0 * b * b).sqrt();

    let axis1_sq = num / (denom * (root - (a + c)));
    let axis2_sq = num / (denom * (-root - (a + c)));
    if !(axis1_sq.is_finite() && axis2_sq.is_finite()) || axis1_sq <= 0.0 || axis2_sq <= 0.0 {
        return Err(FitError::NotAnEllipse);
    }
    let axis1 = axis1_sq.sqrt();
    let axis2 = axis2_sq.sqrt();

    let theta = if b == 0.0 {
        if a <= c {
            0.0
        } else {
            std::f64::consts::FRAC_PI_2
        }
    } else {
        ((c - a - root) / (2.0 * b)).atan()
    };

    let (semi_major, semi_minor, theta) = if axis1 >= axis2 {
        (axis1, axis2, theta)
    } else {
        (axis2, axis1, theta + std::f64::consts::FRAC_PI_2)
    };

    Ok(EllipseParams {
        x0,
        y0,
        semi_major,
        semi_minor,
        theta: wrap_pi(theta),
    })
}
