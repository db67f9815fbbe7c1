use chart_drawings::api::{DrawingEngine, DrawingEngineConfig};
use chart_drawings::core::{AxisLocale, BaseInterval, TimeAxis, TimeUnit, ValueAxis, Viewport};
use chart_drawings::core::CoordinateMapper;
use chart_drawings::interaction::{HitTarget, PointerEvent};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_pixel_to_domain_round_trip(c: &mut Criterion) {
    let time_axis = TimeAxis::new(
        0.0,
        86_400_000.0,
        BaseInterval::new(TimeUnit::Hour, 1),
        AxisLocale::default(),
    )
    .expect("time axis");
    let value_axis = ValueAxis::new(0.0, 2_500.0).expect("value axis");
    let mapper = CoordinateMapper::new(time_axis, value_axis, Viewport::new(1920, 1080));

    c.bench_function("pixel_to_domain_round_trip", |b| {
        b.iter(|| {
            let time = mapper.pixel_to_time(black_box(1_234.5)).expect("to time");
            let value = mapper.pixel_to_value(black_box(321.0)).expect("to value");
            let location = mapper.fractional_location(time).expect("location");
            black_box((time, value, location))
        })
    });
}

fn bench_shape_drag_cycle_32_anchors(c: &mut Criterion) {
    let config = DrawingEngineConfig::new(Viewport::new(1920, 1080), 0.0, 86_400_000.0)
        .with_value_domain(0.0, 2_500.0)
        .with_base_interval(BaseInterval::new(TimeUnit::Hour, 1));
    let mut engine = DrawingEngine::new(config).expect("engine init");
    let shape = engine.allocate_shape();
    for i in 0..32 {
        engine
            .insert_anchor(
                shape,
                &format!("p{i}"),
                1_000_000.0 + i as f64 * 2_000_000.0,
                100.0 + i as f64 * 10.0,
            )
            .expect("insert anchor");
    }

    c.bench_function("shape_drag_cycle_32_anchors", |b| {
        let mut t = 0.0f64;
        b.iter(|| {
            t += 1.0;
            engine.element_drag_start(
                HitTarget::Fill { shape },
                PointerEvent::primary(900.0, 500.0, t),
            );
            engine.element_drag_stop(
                HitTarget::Fill { shape },
                PointerEvent::primary(905.0, 495.0, t + 0.2),
            );
        })
    });
}

criterion_group!(
    benches,
    bench_pixel_to_domain_round_trip,
    bench_shape_drag_cycle_32_anchors
);
criterion_main!(benches);
