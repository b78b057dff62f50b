use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use survey_wpml::{CameraSpec, FlightSpec, GeoPoint, MissionWriter, Rectangle, plan_rectangle};

fn writer_benchmark(c: &mut Criterion) {
    c.bench_function("render_mission_1km", |b| {
        b.iter_batched(
            || {
                // Setup: plan a ~1km survey (not timed)
                let camera = CameraSpec::new(6.17, 4.55, 4.5).unwrap();
                let flight = FlightSpec::new(50.0, 0.8, 0.8).unwrap();
                let rect = Rectangle::new([
                    GeoPoint::new(44.800, -0.610),
                    GeoPoint::new(44.800, -0.598),
                    GeoPoint::new(44.809, -0.598),
                    GeoPoint::new(44.809, -0.610),
                ]);
                plan_rectangle(&rect, &camera, &flight).unwrap()
            },
            |scan| {
                // Timed: render both mission documents
                MissionWriter::new(&scan)
                    .with_timestamp_ms(1_700_000_000_000)
                    .render()
                    .unwrap()
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, writer_benchmark);
criterion_main!(benches);
