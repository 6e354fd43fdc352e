//! Criterion benchmarks for the ellipse and ellipsoid fits.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use morphometry::fit::{fit_ellipse, EllipseParams};
use morphometry::geom3::{fit_ellipsoid, TriMesh};

fn bench_ellipse(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");
    for &n in &[8usize, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("ellipse_direct", n), &n, |b, &n| {
            let truth = EllipseParams {
                x0: 20.0,
                y0: -7.0,
                semi_major: 12.0,
                semi_minor: 5.0,
                theta: 0.6,
            };
            b.iter_batched(
                || truth.sample_points(n),
                |pts| {
                    let _fit = fit_ellipse(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    for &sub in &[1usize, 2, 3] {
        group.bench_with_input(BenchmarkId::new("ellipsoid_moments", sub), &sub, |b, &sub| {
            b.iter_batched(
                || TriMesh::icosphere(1.0, 2.0, 3.0, sub),
                |mesh| {
                    let _fit = fit_ellipsoid(&mesh);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ellipse);
criterion_main!(benches);
