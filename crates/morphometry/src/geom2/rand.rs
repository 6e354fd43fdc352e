//! Seeded synthetic boundaries for benches and property tests.
//!
//! Model
//! - `draw_blob` jitters `n` equally spaced boundary angles radially around
//!   a base radius, producing a star-shaped (not necessarily convex)
//!   contour in counter-clockwise order.
//! - Determinism uses a replay token `(seed, index)` mixed into a single
//!   RNG, so any drawn shape can be reproduced from its token alone.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::Polygon2;

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct BlobCfg {
    /// Number of boundary vertices (clamped to >= 3).
    pub vertices: usize,
    /// Radial jitter amplitude: radii are `base_radius * (1 + u)` with
    /// `u` uniform in `[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
}

impl Default for BlobCfg {
    fn default() -> Self {
        Self {
            vertices: 16,
            radial_jitter: 0.25,
            base_radius: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a star-shaped contour with radial jitter, centered on the origin.
pub fn draw_blob(cfg: BlobCfg, tok: ReplayToken) -> Polygon2 {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices.max(3);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / n as f64;
    let verts = (0..n)
        .map(|k| {
            let th = k as f64 * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Polygon2::new(verts)
}

/// Deterministic star polygon alternating between two radii; concave for
/// `r_inner < r_outer`, handy for solidity tests.
pub fn star_polygon(spikes: usize, r_inner: f64, r_outer: f64) -> Polygon2 {
    let n = spikes.max(3) * 2;
    let delta = 2.0 * std::f64::consts::PI / n as f64;
    let verts = (0..n)
        .map(|k| {
            let th = k as f64 * delta;
            let r = if k % 2 == 0 { r_outer } else { r_inner };
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Polygon2::new(verts)
}
