//! Batch timing probe: how long does a full analyzer pass take on a
//! synthetic population of spots, per pool size?
//!
//! Why this shape
//! - One seeded population, measured once per analyzer and pool size, gives
//!   a reproducible data point for sizing analysis pipelines without a full
//!   criterion run.

use morphometry::analyzers::{
    run_analyzer, EllipseAnalyzer, EllipsoidAnalyzer, MorphologyAnalyzer, ShapeAnalyzer,
    SpotAnalyzer,
};
use morphometry::exec::{default_pool_size, BatchProcessor};
use morphometry::geom2::rand::{draw_blob, BlobCfg, ReplayToken};
use morphometry::geom3::TriMesh;
use morphometry::spot::Spot;

fn population(n: usize) -> Vec<Spot> {
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                let blob = draw_blob(
                    BlobCfg {
                        vertices: 48,
                        radial_jitter: 0.3,
                        base_radius: 2.5,
                    },
                    ReplayToken {
                        seed: 2024,
                        index: i as u64,
                    },
                );
                Spot::planar(i as f64, 0.0, 2.5, 1.0).with_polygon(blob)
            } else {
                let squash = 1.0 + (i % 5) as f64 * 0.4;
                Spot::volumetric(i as f64, 0.0, 0.0, 2.0, 1.0)
                    .with_mesh(TriMesh::icosphere(2.0, 2.0, 2.0 * squash, 2))
            }
        })
        .collect()
}

fn main() {
    env_logger::init();

    let analyzers: [&dyn SpotAnalyzer; 4] = [
        &ShapeAnalyzer,
        &EllipseAnalyzer,
        &EllipsoidAnalyzer,
        &MorphologyAnalyzer,
    ];
    let n = 500;

    println!("spots={n} default_pool={}", default_pool_size());
    for threads in [1, default_pool_size()] {
        let mut processor = BatchProcessor::with_threads(threads);
        for analyzer in analyzers {
            let mut spots = population(n);
            let summary = run_analyzer(&mut processor, &mut spots, analyzer);
            println!(
                "analyzer={} threads={} total={} failed={} time_ms={:.3}",
                analyzer.key(),
                threads,
                summary.total,
                summary.failed,
                summary.duration.as_secs_f64() * 1e3
            );
        }
    }
}
