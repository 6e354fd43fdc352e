//! Real eigenpairs of a general 3x3 matrix.
//!
//! The reduced matrix of the constrained conic fit is not symmetric, so
//! nalgebra's `SymmetricEigen` does not apply. Eigenvalues come from the
//! characteristic cubic in closed form; each eigenvector is the largest-norm
//! adjugate row of `A - lambda I`. The emission order is the root order of
//! the cubic solver, which is deterministic — the fit's index-based
//! selection rule relies on that.

use nalgebra::{Matrix3, Vector3};

/// One real eigenpair.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EigenPair3 {
    pub value: f64,
    pub vector: Vector3<f64>,
}

/// Real eigenpairs of `a`, in cubic-root order. Roots whose shifted matrix
/// has no recoverable null vector (numerically rank < 2) are skipped.
pub(crate) fn real_eigenpairs_3x3(a: &Matrix3<f64>) -> Vec<EigenPair3> {
    let tr = a[(0, 0)] + a[(1, 1)] + a[(2, 2)];

    // Sum of 2x2 principal minors.
    let minor_sum = a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)] + a[(0, 0)] * a[(2, 2)]
        - a[(0, 2)] * a[(2, 0)]
        + a[(1, 1)] * a[(2, 2)]
        - a[(1, 2)] * a[(2, 1)];

    let det = a.determinant();

    // Characteristic polynomial: lambda^3 - tr lambda^2 + minor_sum lambda - det.
    solve_cubic_real(1.0, -tr, minor_sum, -det)
        .into_iter()
        .filter_map(|value| {
            let shifted = a - Matrix3::identity() * value;
            null_vector_3x3(&shifted).map(|vector| EigenPair3 { value, vector })
        })
        .collect()
}

/// Null vector of a (near-)singular 3x3 matrix: the largest-norm row of the
/// adjugate. For a rank-2 matrix every nonzero adjugate row is proportional
/// to the null vector.
fn null_vector_3x3(m: &Matrix3<f64>) -> Option<Vector3<f64>> {
    let cofactors = [
        Vector3::new(
            m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)],
            -(m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)]),
            m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)],
        ),
        Vector3::new(
            -(m[(0, 1)] * m[(2, 2)] - m[(0, 2)] * m[(2, 1)]),
            m[(0, 0)] * m[(2, 2)] - m[(0, 2)] * m[(2, 0)],
            -(m[(0, 0)] * m[(2, 1)] - m[(0, 1)] * m[(2, 0)]),
        ),
        Vector3::new(
            m[(0, 1)] * m[(1, 2)] - m[(0, 2)] * m[(1, 1)],
            -(m[(0, 0)] * m[(1, 2)] - m[(0, 2)] * m[(1, 0)]),
            m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        ),
    ];

    let mut best = &cofactors[0];
    let mut best_norm = best.norm_squared();
    for c in &cofactors[1..] {
        let n = c.norm_squared();
        if n > best_norm {
            best = c;
            best_norm = n;
        }
    }

    if best_norm < 1e-30 {
        return None;
    }
    Some(best / best_norm.sqrt())
}

/// Real roots of `a x^3 + b x^2 + c x + d = 0` (one or three).
fn solve_cubic_real(a: f64, b: f64, c: f64, d: f64) -> Vec<f64> {
    // Depressed cubic t^3 + p t + q = 0 with x = t - b/(3a).
    let a_inv = 1.0 / a;
    let b_ = b * a_inv;
    let c_ = c * a_inv;
    let d_ = d * a_inv;

    let p = c_ - b_ * b_ / 3.0;
    let q = 2.0 * b_ * b_ * b_ / 27.0 - b_ * c_ / 3.0 + d_;

    let disc = -4.0 * p * p * p - 27.0 * q * q;
    let shift = -b_ / 3.0;

    if disc >= 0.0 {
        // Three real roots (possibly repeated), via the trigonometric form.
        let r = (-p / 3.0).sqrt();
        let cos_arg = if r.abs() < 1e-15 {
            0.0
        } else {
            (-q / (2.0 * r * r * r)).clamp(-1.0, 1.0)
        };
        let theta = cos_arg.acos();
        let two_r = 2.0 * r;
        vec![
            two_r * (theta / 3.0).cos() + shift,
            two_r * ((theta + 2.0 * std::f64::consts::PI) / 3.0).cos() + shift,
            two_r * ((theta + 4.0 * std::f64::consts::PI) / 3.0).cos() + shift,
        ]
    } else {
        // One real root (Cardano).
        let sqrt_disc = (q * q / 4.0 + p * p * p / 27.0).sqrt();
        let u = (-q / 2.0 + sqrt_disc).cbrt();
        let v = (-q / 2.0 - sqrt_disc).cbrt();
        vec![u + v + shift]
    }
}
