use chart_drawings::core::AnchorPoint;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

#[test]
fn decimal_ingestion_converts_time_and_value() {
    let time = Utc
        .with_ymd_and_hms(2024, 3, 1, 12, 30, 0)
        .single()
        .expect("valid timestamp");
    let value = Decimal::new(1_234_56, 2);

    let anchor = AnchorPoint::from_decimal_time(time, value).expect("anchor");
    assert_eq!(anchor.value_x, time.timestamp_millis() as f64);
    assert!((anchor.value_y - 1_234.56).abs() <= 1e-9);
    assert!((anchor.value_y_working - anchor.value_y).abs() <= 1e-12);
    assert!(anchor.membership.is_none());
    assert_eq!(anchor.location_x, 0.0);
}

#[test]
fn fresh_anchors_start_untagged_and_untemplated() {
    let anchor = AnchorPoint::new(1_000.0, 25.0);
    assert!(anchor.membership.is_none());
    assert!(anchor.stroke_template.is_none());
    assert!(anchor.fill_template.is_none());
}
