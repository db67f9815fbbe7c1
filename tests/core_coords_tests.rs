use chart_drawings::core::{
    AxisLocale, BaseInterval, CoordinateMapper, TimeAxis, TimeUnit, ValueAxis, ValueDisplayMode,
    Viewport,
};

fn mapper() -> CoordinateMapper {
    let time_axis = TimeAxis::new(
        0.0,
        1_000.0,
        BaseInterval::new(TimeUnit::Millisecond, 1),
        AxisLocale::default(),
    )
    .expect("time axis");
    let value_axis = ValueAxis::new(0.0, 50.0).expect("value axis");
    CoordinateMapper::new(time_axis, value_axis, Viewport::new(1000, 500))
}

#[test]
fn pixel_time_round_trip_within_one_pixel() {
    let mapper = mapper();
    let viewport = mapper.viewport();

    for x in [1.5, 250.0, 499.9, 777.25, 998.0] {
        let time = mapper.pixel_to_time(x).expect("to time");
        let back = mapper
            .time_axis()
            .time_to_pixel(time, viewport)
            .expect("to pixel");
        assert!((back - x).abs() <= 1.0, "x={x} came back as {back}");
    }
}

#[test]
fn pixel_to_time_clamps_one_unit_inside_axis_range() {
    let mapper = mapper();

    // Pixels beyond the plotted edge saturate instead of extrapolating.
    let below = mapper.pixel_to_time(-400.0).expect("below range");
    let above = mapper.pixel_to_time(5_000.0).expect("above range");
    assert_eq!(below, 1.0);
    assert_eq!(above, 999.0);

    // Interior pixels are untouched by the clamp.
    let mid = mapper.pixel_to_time(500.0).expect("mid");
    assert!((mid - 500.0).abs() <= 1e-9);
}

#[test]
fn pixel_to_value_uses_inverted_y_axis() {
    let mapper = mapper();

    let top = mapper.pixel_to_value(0.0).expect("top");
    let bottom = mapper.pixel_to_value(500.0).expect("bottom");
    assert!((top - 50.0).abs() <= 1e-9);
    assert!(bottom.abs() <= 1e-9);
}

#[test]
fn percent_change_mode_rescales_around_base_value() {
    let time_axis = TimeAxis::new(
        0.0,
        1_000.0,
        BaseInterval::new(TimeUnit::Millisecond, 1),
        AxisLocale::default(),
    )
    .expect("time axis");
    // Axis shows -50%..+50%; anchors live in real value space.
    let value_axis = ValueAxis::new_with_mode(
        -50.0,
        50.0,
        ValueDisplayMode::PercentChange { base_value: 200.0 },
    )
    .expect("value axis");
    let mapper = CoordinateMapper::new(time_axis, value_axis, Viewport::new(1000, 500));

    // Mid-plot reads 0% which is exactly the base value.
    let mid = mapper.pixel_to_value(250.0).expect("mid");
    assert!((mid - 200.0).abs() <= 1e-9);

    // +10% of a 200 base lands at 220.
    assert!((mapper.display_to_value(10.0) - 220.0).abs() <= 1e-9);
    // -100% goes to zero.
    assert!(mapper.display_to_value(-100.0).abs() <= 1e-9);
}

#[test]
fn visible_window_changes_remap_without_touching_the_clamp_range() {
    let mut time_axis = TimeAxis::new(
        0.0,
        1_000.0,
        BaseInterval::new(TimeUnit::Millisecond, 1),
        AxisLocale::default(),
    )
    .expect("time axis");
    time_axis
        .set_visible_range(200.0, 700.0)
        .expect("set visible range");
    let value_axis = ValueAxis::new(0.0, 50.0).expect("value axis");
    let mapper = CoordinateMapper::new(time_axis, value_axis, Viewport::new(1000, 500));

    // Pixel 0 now reads the visible-window start...
    let left = mapper.pixel_to_time(0.0).expect("left edge");
    assert!((left - 200.0).abs() <= 1e-9);

    // ...but clamping still works against the full range, not the window.
    let far_right = mapper.pixel_to_time(5_000.0).expect("far right");
    assert_eq!(far_right, 999.0);

    // Panning shifts the window rigidly.
    let mut panned = time_axis;
    panned.pan_visible_by_delta(100.0).expect("pan");
    assert_eq!(panned.visible_range(), (300.0, 800.0));
    assert_eq!(panned.full_range(), (0.0, 1_000.0));
}

#[test]
fn fractional_location_positions_time_inside_its_bucket() {
    let time_axis = TimeAxis::new(
        0.0,
        48.0 * 3_600_000.0,
        BaseInterval::new(TimeUnit::Hour, 1),
        AxisLocale::default(),
    )
    .expect("time axis");
    let value_axis = ValueAxis::new(0.0, 1.0).expect("value axis");
    let mapper = CoordinateMapper::new(time_axis, value_axis, Viewport::new(1000, 500));

    // 15 minutes into an hourly bucket.
    let quarter_past = 7.25 * 3_600_000.0;
    let location = mapper
        .fractional_location(quarter_past)
        .expect("fractional location");
    assert!((location - 0.25).abs() <= 1e-9);

    // Bucket opens map to zero.
    let on_open = mapper
        .fractional_location(7.0 * 3_600_000.0)
        .expect("fractional location");
    assert!(on_open.abs() <= 1e-12);
}

#[test]
fn fractional_location_stays_in_unit_range_for_multi_count_buckets() {
    let time_axis = TimeAxis::new(
        0.0,
        10.0 * 86_400_000.0,
        BaseInterval::new(TimeUnit::Hour, 4),
        AxisLocale::default(),
    )
    .expect("time axis");
    let value_axis = ValueAxis::new(0.0, 1.0).expect("value axis");
    let mapper = CoordinateMapper::new(time_axis, value_axis, Viewport::new(1000, 500));

    for hour in [0.0, 1.0, 3.999, 5.0, 17.5, 23.0] {
        let location = mapper
            .fractional_location(hour * 3_600_000.0)
            .expect("fractional location");
        assert!((0.0..1.0).contains(&location), "hour={hour} gave {location}");
    }
}
