use criterion::{Criterion, criterion_group, criterion_main};
use survey_wpml::{CameraSpec, FlightSpec, GeoPoint, Polygon, Rectangle, plan_polygon, plan_rectangle};

fn planner_benchmark(c: &mut Criterion) {
    let camera = CameraSpec::new(6.17, 4.55, 4.5).unwrap();
    let flight = FlightSpec::new(50.0, 0.8, 0.8).unwrap();

    // ~1km squarish survey area
    let rect = Rectangle::new([
        GeoPoint::new(44.800, -0.610),
        GeoPoint::new(44.800, -0.598),
        GeoPoint::new(44.809, -0.598),
        GeoPoint::new(44.809, -0.610),
    ]);

    c.bench_function("plan_rectangle_1km", |b| {
        b.iter(|| plan_rectangle(&rect, &camera, &flight).unwrap());
    });

    // irregular hexagon over the same area
    let poly = Polygon::new(vec![
        GeoPoint::new(44.800, -0.606),
        GeoPoint::new(44.802, -0.598),
        GeoPoint::new(44.807, -0.599),
        GeoPoint::new(44.809, -0.604),
        GeoPoint::new(44.807, -0.610),
        GeoPoint::new(44.801, -0.609),
    ])
    .unwrap();

    c.bench_function("plan_polygon_1km", |b| {
        b.iter(|| plan_polygon(&poly, &camera, &flight).unwrap());
    });
}

criterion_group!(benches, planner_benchmark);
criterion_main!(benches);
