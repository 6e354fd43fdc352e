//! Incremental 3D convex hull (visible faces + horizon re-triangulation).
//!
//! Purpose
//! - Hull of a mesh vertex cloud for the solidity/convexity ratios, kept as
//!   in-crate explicit enumeration over a small face table rather than an
//!   external dependency.
//!
//! Algorithm
//! - Seed with an extremal non-degenerate tetrahedron, orient its faces
//!   outward, then insert every remaining point: delete the faces that see
//!   the point, and re-triangulate the horizon loop against it. Directed
//!   horizon edges keep the new faces outward-oriented.
//! - Points within `eps` of the current hull surface are skipped; `eps`
//!   scales with the cloud's bounding-box diagonal.

use nalgebra::Vector3;

use super::mesh::TriMesh;

#[derive(Clone, Copy, Debug)]
struct Face {
    idx: [usize; 3],
    normal: Vector3<f64>,
    anchor: Vector3<f64>,
}

impl Face {
    fn new(idx: [usize; 3], pts: &[Vector3<f64>]) -> Self {
        let a = pts[idx[0]];
        let b = pts[idx[1]];
        let c = pts[idx[2]];
        let normal = (b - a).cross(&(c - a));
        Self {
            idx,
            normal,
            anchor: a,
        }
    }

    /// Outward signed distance scaled by the (unnormalized) normal length.
    #[inline]
    fn signed(&self, p: Vector3<f64>) -> f64 {
        self.normal.dot(&(p - self.anchor))
    }

    fn flipped(mut self) -> Self {
        self.idx.swap(1, 2);
        self.normal = -self.normal;
        self
    }
}

/// Convex hull of `points`. `None` when fewer than four points remain after
/// degeneracy checks (coincident, collinear or coplanar clouds).
pub fn convex_hull3(points: &[Vector3<f64>]) -> Option<TriMesh> {
    if points.len() < 4 {
        return None;
    }

    let (lo, hi) = bounds(points);
    let eps = 1e-9 * (hi - lo).norm().max(1.0);

    let seed = seed_tetrahedron(points, eps)?;
    let centroid = (points[seed[0]] + points[seed[1]] + points[seed[2]] + points[seed[3]]) / 4.0;

    let mut faces: Vec<Face> = [
        [seed[0], seed[1], seed[2]],
        [seed[0], seed[1], seed[3]],
        [seed[0], seed[2], seed[3]],
        [seed[1], seed[2], seed[3]],
    ]
    .into_iter()
    .map(|idx| {
        let f = Face::new(idx, points);
        if f.signed(centroid) > 0.0 {
            f.flipped()
        } else {
            f
        }
    })
    .collect();

    for (pi, &p) in points.iter().enumerate() {
        if seed.contains(&pi) {
            continue;
        }
        let visible: Vec<usize> = (0..faces.len())
            .filter(|&fi| faces[fi].signed(p) > eps * faces[fi].normal.norm().max(1e-300))
            .collect();
        if visible.is_empty() {
            continue;
        }

        // Horizon: directed edges of visible faces whose reverse edge is not
        // itself part of a visible face.
        let mut directed = std::collections::HashSet::<(usize, usize)>::new();
        for &fi in &visible {
            let [a, b, c] = faces[fi].idx;
            directed.insert((a, b));
            directed.insert((b, c));
            directed.insert((c, a));
        }
        let horizon: Vec<(usize, usize)> = directed
            .iter()
            .filter(|&&(a, b)| !directed.contains(&(b, a)))
            .copied()
            .collect();

        let mut keep: Vec<Face> = faces
            .iter()
            .enumerate()
            .filter(|(fi, _)| !visible.contains(fi))
            .map(|(_, f)| *f)
            .collect();
        for (a, b) in horizon {
            keep.push(Face::new([a, b, pi], points));
        }
        faces = keep;
    }

    // Compact: re-index only the vertices the hull actually uses.
    let mut remap = std::collections::HashMap::<usize, usize>::new();
    let mut verts = Vec::new();
    let mut out_faces = Vec::with_capacity(faces.len());
    for f in &faces {
        let mut tri = [0usize; 3];
        for (slot, &old) in tri.iter_mut().zip(f.idx.iter()) {
            let next = verts.len();
            let new = *remap.entry(old).or_insert_with(|| {
                verts.push(points[old]);
                next
            });
            *slot = new;
        }
        out_faces.push(tri);
    }
    Some(TriMesh::new(verts, out_faces))
}

fn bounds(points: &[Vector3<f64>]) -> (Vector3<f64>, Vector3<f64>) {
    let mut lo = points[0];
    let mut hi = points[0];
    for p in points {
        lo = lo.inf(p);
        hi = hi.sup(p);
    }
    (lo, hi)
}

/// Four affinely independent extremal points, or `None` for a degenerate
/// cloud.
fn seed_tetrahedron(points: &[Vector3<f64>], eps: f64) -> Option<[usize; 4]> {
    let i0 = 0;
    let i1 = (0..points.len()).max_by(|&a, &b| {
        (points[a] - points[i0])
            .norm()
            .partial_cmp(&(points[b] - points[i0]).norm())
            .unwrap_or(std::cmp::Ordering::Equal)
    })?;
    if (points[i1] - points[i0]).norm() <= eps {
        return None;
    }
    let dir = (points[i1] - points[i0]).normalize();
    let i2 = (0..points.len()).max_by(|&a, &b| {
        let da = line_distance(points[a], points[i0], dir);
        let db = line_distance(points[b], points[i0], dir);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    })?;
    if line_distance(points[i2], points[i0], dir) <= eps {
        return None;
    }
    let normal = (points[i1] - points[i0])
        .cross(&(points[i2] - points[i0]))
        .normalize();
    let i3 = (0..points.len()).max_by(|&a, &b| {
        let da = normal.dot(&(points[a] - points[i0])).abs();
        let db = normal.dot(&(points[b] - points[i0])).abs();
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    })?;
    if normal.dot(&(points[i3] - points[i0])).abs() <= eps {
        return None;
    }
    Some([i0, i1, i2, i3])
}

#[inline]
fn line_distance(p: Vector3<f64>, origin: Vector3<f64>, dir: Vector3<f64>) -> f64 {
    let rel = p - origin;
    (rel - dir * dir.dot(&rel)).norm()
}
