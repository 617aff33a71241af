use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glass_core::{outline_path, squircle_sdf, Vec2};

fn bench_outline_path_data(c: &mut Criterion) {
    c.bench_function("outline_path_data", |b| {
        b.iter(|| {
            black_box(outline_path(black_box(320.0), black_box(180.0), 24.0, 0.5).to_path_data())
        });
    });
}

fn bench_squircle_sdf_10000(c: &mut Criterion) {
    let half = Vec2::new(0.3, 0.2);
    c.bench_function("squircle_sdf_10000", |b| {
        b.iter(|| {
            for i in 0..10000 {
                let p = Vec2::new((i % 100) as f32 / 100.0 - 0.5, (i / 100) as f32 / 100.0 - 0.5);
                black_box(squircle_sdf(p, half, 0.6));
            }
        });
    });
}

criterion_group!(benches, bench_outline_path_data, bench_squircle_sdf_10000);
criterion_main!(benches);
