use camera::{make_rectangular_camera_geometry, RectangularGridConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use muon::{regular_polygon, ImpactPoint, MuonIntegratorConfig, MuonLineIntegrate, MuonRing};

fn make_integrator() -> MuonLineIntegrate {
    let mirror = regular_polygon(36, 12.0, (0.0, 0.0));
    let hole = regular_polygon(6, 1.5, (0.0, 0.0));
    let config = MuonIntegratorConfig {
        pixel_width: 0.025,
        oversample_bins: 5,
    };
    MuonLineIntegrate::new(&mirror, &hole, &config).expect("valid integrator config")
}

fn bench_plot_pos(c: &mut Criterion) {
    let integrator = make_integrator();

    let mut group = c.benchmark_group("plot_pos");
    group.bench_function("radius_0.3", |b| {
        b.iter(|| integrator.plot_pos(black_box(4.0), black_box(1.0), black_box(0.3)))
    });
    group.bench_function("radius_1.0", |b| {
        b.iter(|| integrator.plot_pos(black_box(4.0), black_box(1.0), black_box(1.0)))
    });
    group.finish();
}

fn bench_predict_camera(c: &mut Criterion) {
    let integrator = make_integrator();
    let camera = make_rectangular_camera_geometry(&RectangularGridConfig::default())
        .expect("valid camera layout");
    let ring = MuonRing::new(0.05, -0.02, 0.3, 0.02);
    let impact = ImpactPoint::new(4.0, 1.0);

    c.bench_function("predict_camera_40x40", |b| {
        b.iter(|| integrator.predict_camera(black_box(impact), black_box(&ring), &camera))
    });
}

criterion_group!(benches, bench_plot_pos, bench_predict_camera);
criterion_main!(benches);
