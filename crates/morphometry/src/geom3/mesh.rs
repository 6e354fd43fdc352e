//! Triangulated surface (`TriMesh`).
//!
//! Purpose
//! - Minimal closed-surface representation: shared vertices plus triangle
//!   index faces with outward orientation.
//! - Volume comes from the divergence theorem (signed tetrahedra against the
//!   origin), surface area from per-face cross products; both are origin-
//!   and orientation-robust because the final value is taken absolutely.

use nalgebra::Vector3;

use super::hull::convex_hull3;

/// Triangulated surface with consistently oriented faces.
#[derive(Clone, Debug, Default)]
pub struct TriMesh {
    pub verts: Vec<Vector3<f64>>,
    pub faces: Vec<[usize; 3]>,
}

impl TriMesh {
    #[inline]
    pub fn new(verts: Vec<Vector3<f64>>, faces: Vec<[usize; 3]>) -> Self {
        Self { verts, faces }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector3<f64>] {
        &self.verts
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Enclosed volume: |sum of signed tetrahedra| over faces.
    pub fn volume(&self) -> f64 {
        let mut acc = 0.0;
        for &[i, j, k] in &self.faces {
            let v0 = self.verts[i];
            let v1 = self.verts[j];
            let v2 = self.verts[k];
            acc += v0.dot(&v1.cross(&v2));
        }
        (acc / 6.0).abs()
    }

    /// Total triangle area.
    pub fn surface_area(&self) -> f64 {
        let mut acc = 0.0;
        for &[i, j, k] in &self.faces {
            let e1 = self.verts[j] - self.verts[i];
            let e2 = self.verts[k] - self.verts[i];
            acc += e1.cross(&e2).norm();
        }
        acc * 0.5
    }

    /// Convex hull of the vertex set. `None` when the vertices are
    /// degenerate (fewer than four, or all coplanar).
    pub fn convex_hull(&self) -> Option<TriMesh> {
        convex_hull3(&self.verts)
    }

    /// Axis-aligned box centered on `center` with half-extents `hx, hy, hz`
    /// (12 outward-oriented triangles). Exact volume and area make it the
    /// reference body for metric tests.
    pub fn cuboid(center: Vector3<f64>, hx: f64, hy: f64, hz: f64) -> Self {
        let c = center;
        let verts = vec![
            c + Vector3::new(-hx, -hy, -hz),
            c + Vector3::new(hx, -hy, -hz),
            c + Vector3::new(hx, hy, -hz),
            c + Vector3::new(-hx, hy, -hz),
            c + Vector3::new(-hx, -hy, hz),
            c + Vector3::new(hx, -hy, hz),
            c + Vector3::new(hx, hy, hz),
            c + Vector3::new(-hx, hy, hz),
        ];
        let faces = vec![
            [0, 2, 1],
            [0, 3, 2], // bottom
            [4, 5, 6],
            [4, 6, 7], // top
            [0, 1, 5],
            [0, 5, 4], // front
            [2, 3, 7],
            [2, 7, 6], // back
            [0, 4, 7],
            [0, 7, 3], // left
            [1, 2, 6],
            [1, 6, 5], // right
        ];
        Self { verts, faces }
    }

    /// Axis-scaled icosphere: a subdivided icosahedron mapped onto the unit
    /// sphere and scaled per axis by `(rx, ry, rz)`.
    ///
    /// The icosahedral vertex arrangement is isotropic, so the vertex
    /// second-moment matrix of the unit variant is exactly `I/3` — the
    /// calibration assumed by the ellipsoid fit.
    pub fn icosphere(rx: f64, ry: f64, rz: f64, subdivisions: usize) -> Self {
        let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let mut verts: Vec<Vector3<f64>> = [
            (-1.0, t, 0.0),
            (1.0, t, 0.0),
            (-1.0, -t, 0.0),
            (1.0, -t, 0.0),
            (0.0, -1.0, t),
            (0.0, 1.0, t),
            (0.0, -1.0, -t),
            (0.0, 1.0, -t),
            (t, 0.0, -1.0),
            (t, 0.0, 1.0),
            (-t, 0.0, -1.0),
            (-t, 0.0, 1.0),
        ]
        .iter()
        .map(|&(x, y, z)| Vector3::new(x, y, z).normalize())
        .collect();
        let mut faces: Vec<[usize; 3]> = vec![
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];

        for _ in 0..subdivisions {
            let mut midpoint = std::collections::HashMap::<(usize, usize), usize>::new();
            let mut next = Vec::with_capacity(faces.len() * 4);
            for &[a, b, c] in &faces {
                let ab = midpoint_index(&mut verts, &mut midpoint, a, b);
                let bc = midpoint_index(&mut verts, &mut midpoint, b, c);
                let ca = midpoint_index(&mut verts, &mut midpoint, c, a);
                next.push([a, ab, ca]);
                next.push([b, bc, ab]);
                next.push([c, ca, bc]);
                next.push([ab, bc, ca]);
            }
            faces = next;
        }

        for v in &mut verts {
            *v = Vector3::new(v.x * rx, v.y * ry, v.z * rz);
        }
        Self { verts, faces }
    }
}

fn midpoint_index(
    verts: &mut Vec<Vector3<f64>>,
    cache: &mut std::collections::HashMap<(usize, usize), usize>,
    a: usize,
    b: usize,
) -> usize {
    let key = (a.min(b), a.max(b));
    if let Some(&i) = cache.get(&key) {
        return i;
    }
    let mid = ((verts[a] + verts[b]) * 0.5).normalize();
    verts.push(mid);
    let i = verts.len() - 1;
    cache.insert(key, i);
    i
}
