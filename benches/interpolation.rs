use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use regrid::{interpolate_temporal, synthetic, upscale_spatial, Method};

fn bench_temporal(c: &mut Criterion) {
    let mut group = c.benchmark_group("temporal");
    let frames = synthetic::coherent_sequence(2, 32, 32, 42).unwrap();

    for method in [Method::Lagrange, Method::CubicSpline] {
        group.bench_with_input(
            BenchmarkId::new("32x32", method.name()),
            &method,
            |b, &method| {
                b.iter(|| {
                    black_box(
                        interpolate_temporal(&frames[0], &frames[1], 0.5, method).unwrap(),
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_spatial(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial");
    let grid = synthetic::random_binary_grid(16, 16, 42).unwrap();

    for method in [Method::Lagrange, Method::CubicSpline] {
        group.bench_with_input(
            BenchmarkId::new("16x16_x2", method.name()),
            &method,
            |b, &method| {
                b.iter(|| black_box(upscale_spatial(&grid, 2, method).unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_temporal, bench_spatial);
criterion_main!(benches);
