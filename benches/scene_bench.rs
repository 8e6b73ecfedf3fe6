//! Benchmarks for the decorative scene and chart layouts
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use early_warning::charts::*;
use early_warning::config::SceneConfig;
use early_warning::geometry::Point;
use early_warning::scene::*;

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");
    let camera = PerspectiveCamera::default();

    for points in [40, 200, 1000] {
        let config = SceneConfig {
            data_point_count: points,
            ..SceneConfig::default()
        };
        let mut model = SceneModel::build(&config);

        group.throughput(Throughput::Elements(model.object_count() as u64));

        group.bench_function(format!("update_{}", points), |b| {
            let mut t = 0.0;
            b.iter(|| {
                t += 1.0 / 60.0;
                model.update(black_box(t));
            })
        });

        group.bench_function(format!("compose_frame_{}", points), |b| {
            b.iter(|| compose_frame(black_box(&model), &camera, 600.0))
        });
    }

    group.bench_function("build_default", |b| {
        let config = SceneConfig::default();
        b.iter(|| SceneModel::build(black_box(&config)))
    });

    group.finish();
}

fn bench_charts(c: &mut Criterion) {
    let mut group = c.benchmark_group("charts");
    let plot = cartesian_plot(CHART_WIDTH, CHART_HEIGHT);

    group.bench_function("pie_layout", |b| {
        b.iter(|| {
            PieLayout::compute(
                black_box(&DROPOUT_REASONS),
                pie_center(CHART_WIDTH, CHART_HEIGHT),
                0.0,
                PIE_RADIUS,
            )
        })
    });

    group.bench_function("bar_layout", |b| {
        b.iter(|| BarLayout::compute(black_box(&COUNSELOR_RATIOS), plot, RATIO_DOMAIN))
    });

    group.bench_function("area_layout", |b| {
        b.iter(|| AreaLayout::compute(black_box(&INTERVENTION_TREND), plot, INTERVENTION_DOMAIN))
    });

    let pie = PieLayout::compute(
        &DROPOUT_REASONS,
        pie_center(CHART_WIDTH, CHART_HEIGHT),
        0.0,
        PIE_RADIUS,
    );
    group.bench_function("pie_hit", |b| {
        b.iter(|| pie.hit(black_box(Point::new(180.0, 90.0))).map(|s| s.index))
    });

    group.finish();
}

criterion_group!(benches, bench_scene, bench_charts);
criterion_main!(benches);
