//! Moore–Penrose pseudo-inverse via SVD.

use nalgebra::{DMatrix, SVD};

/// Pseudo-inverse of `m`.
///
/// Singular values below `max(rows, cols) * sigma_max * eps` are treated as
/// zero (their reciprocal contributes nothing), which keeps near-singular
/// inputs from amplifying noise. A matrix with no singular value above the
/// threshold (rank 0) yields `None`; callers must treat the surrounding fit
/// as failed for that point set.
///
/// When `rows < cols` the computation runs on the transpose and the result
/// is transposed back; the comparison flips, so the recursion depth is
/// bounded at one.
pub fn pinv(m: &DMatrix<f64>) -> Option<DMatrix<f64>> {
    let (rows, cols) = m.shape();
    if rows == 0 || cols == 0 {
        return None;
    }
    if rows < cols {
        return pinv(&m.transpose()).map(|p| p.transpose());
    }

    let svd = SVD::new(m.clone(), true, true);
    let u = svd.u?;
    let v_t = svd.v_t?;
    let sigma = &svd.singular_values;

    let sigma_max = sigma.iter().cloned().fold(0.0_f64, f64::max);
    let tol = rows.max(cols) as f64 * sigma_max * f64::EPSILON;
    if sigma.iter().all(|&s| s <= tol) {
        return None;
    }

    // A⁺ = V Σ⁺ Uᵀ with the thresholded reciprocals on the diagonal.
    let k = sigma.len();
    let mut sigma_inv = DMatrix::<f64>::zeros(k, k);
    for i in 0..k {
        if sigma[i] > tol {
            sigma_inv[(i, i)] = 1.0 / sigma[i];
        }
    }
    Some(v_t.transpose() * sigma_inv * u.transpose())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn max_abs_diff(a: &DMatrix<f64>, b: &DMatrix<f64>) -> f64 {
        (a - b).iter().fold(0.0_f64, |m, &x| m.max(x.abs()))
    }

    #[test]
    fn inverts_a_full_rank_square_matrix() {
        let m = DMatrix::from_row_slice(3, 3, &[2.0, 0.0, 1.0, 0.0, 3.0, 0.0, 1.0, 0.0, 2.0]);
        let p = pinv(&m).unwrap();
        let identity = DMatrix::<f64>::identity(3, 3);
        assert!(max_abs_diff(&(&m * &p), &identity) < 1e-12);
        assert!(max_abs_diff(&(&p * &m), &identity) < 1e-12);
    }

    #[test]
    fn tall_matrix_gives_left_inverse() {
        let m = DMatrix::from_row_slice(4, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, -1.0]);
        let p = pinv(&m).unwrap();
        assert_eq!(p.shape(), (2, 4));
        let identity = DMatrix::<f64>::identity(2, 2);
        assert!(max_abs_diff(&(&p * &m), &identity) < 1e-12);
    }

    #[test]
    fn wide_matrix_recurses_on_the_transpose() {
        let m = DMatrix::from_row_slice(2, 4, &[1.0, 0.0, 1.0, 2.0, 0.0, 1.0, 1.0, -1.0]);
        let p = pinv(&m).unwrap();
        assert_eq!(p.shape(), (4, 2));
        let identity = DMatrix::<f64>::identity(2, 2);
        assert!(max_abs_diff(&(&m * &p), &identity) < 1e-12);
    }

    #[test]
    fn rank_deficient_matrix_satisfies_penrose_conditions() {
        // Rank 1: every row is a multiple of the first.
        let m = DMatrix::from_row_slice(3, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, -1.0, -2.0, -3.0]);
        let p = pinv(&m).unwrap();
        let m2 = &m * &p * &m;
        let p2 = &p * &m * &p;
        assert!(max_abs_diff(&m2, &m) < 1e-10);
        assert!(max_abs_diff(&p2, &p) < 1e-10);
    }

    #[test]
    fn zero_matrix_has_no_pseudo_inverse() {
        let m = DMatrix::<f64>::zeros(3, 3);
        assert!(pinv(&m).is_none());
    }

    #[test]
    fn scalar_case_matches_reciprocal() {
        let m = DMatrix::from_element(1, 1, 4.0);
        let p = pinv(&m).unwrap();
        assert_relative_eq!(p[(0, 0)], 0.25, epsilon = 1e-15);
    }
}
