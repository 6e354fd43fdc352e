//! Best-matching ellipsoid via principal-axis moment decomposition.

use nalgebra::{Matrix3, SymmetricEigen, Vector3};

use super::mesh::TriMesh;

/// Fitted ellipsoid: center, three radii and the matching unit axis
/// vectors.
///
/// Radii and axes are emitted in the order the eigen-decomposition produces
/// them; downstream consumers take magnitudes and ratios positionally and
/// must NOT assume any sorting.
#[derive(Clone, Copy, Debug)]
pub struct EllipsoidFit {
    pub center: Vector3<f64>,
    pub radii: [f64; 3],
    pub axes: [Vector3<f64>; 3],
}

/// Fit an ellipsoid to the mesh vertex cloud.
///
/// The center is the vertex centroid; the axes are the eigenvectors of the
/// vertex second-moment matrix. Radii use `sqrt(3*lambda)`: the per-axis
/// surface second moment of a radius-`r` sphere is `r^2/3`, so the scale is
/// exact for (axis-scaled) uniformly tessellated spheres and a close
/// approximation for other closed surfaces.
///
/// `None` for meshes with fewer than four vertices.
pub fn fit_ellipsoid(mesh: &TriMesh) -> Option<EllipsoidFit> {
    let verts = mesh.vertices();
    if verts.len() < 4 {
        return None;
    }

    let n = verts.len() as f64;
    let mut center = Vector3::zeros();
    for &v in verts {
        center += v;
    }
    center /= n;

    let mut cov = Matrix3::zeros();
    for &v in verts {
        let rel = v - center;
        cov += rel * rel.transpose();
    }
    cov /= n;

    let eig = SymmetricEigen::new(cov);
    let mut radii = [0.0; 3];
    let mut axes = [Vector3::zeros(); 3];
    for i in 0..3 {
        radii[i] = (3.0 * eig.eigenvalues[i].max(0.0)).sqrt();
        let col = eig.eigenvectors.column(i);
        let norm = col.norm();
        axes[i] = if norm > 0.0 {
            col.into_owned() / norm
        } else {
            Vector3::zeros()
        };
    }

    Some(EllipsoidFit {
        center,
        radii,
        axes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sphere_fit_recovers_the_radius() {
        let m = TriMesh::icosphere(2.5, 2.5, 2.5, 2);
        let fit = fit_ellipsoid(&m).expect("fit exists");
        assert!(fit.center.norm() < 1e-9);
        for r in fit.radii {
            assert_relative_eq!(r, 2.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn scaled_sphere_recovers_the_axis_radii() {
        let m = TriMesh::icosphere(1.0, 2.0, 4.0, 2);
        let fit = fit_ellipsoid(&m).expect("fit exists");
        let mut radii = fit.radii;
        radii.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_relative_eq!(radii[0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(radii[1], 2.0, epsilon = 1e-6);
        assert_relative_eq!(radii[2], 4.0, epsilon = 1e-6);
    }

    #[test]
    fn axes_align_with_the_scaling_directions() {
        let m = TriMesh::icosphere(1.0, 1.0, 5.0, 2);
        let fit = fit_ellipsoid(&m).expect("fit exists");
        // The largest radius must pair with the z axis.
        let (imax, _) = fit
            .radii
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap();
        let axis = fit.axes[imax];
        assert!(axis.z.abs() > 0.999, "axis {axis:?}");
        assert_relative_eq!(axis.norm(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn center_follows_a_translated_mesh() {
        let mut m = TriMesh::icosphere(1.0, 1.0, 1.0, 1);
        let shift = Vector3::new(10.0, -5.0, 2.0);
        for v in &mut m.verts {
            *v += shift;
        }
        let fit = fit_ellipsoid(&m).expect("fit exists");
        assert!((fit.center - shift).norm() < 1e-9);
    }

    #[test]
    fn tiny_meshes_do_not_fit() {
        let m = TriMesh::new(
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        assert!(fit_ellipsoid(&m).is_none());
    }
}
