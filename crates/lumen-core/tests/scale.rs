// File: crates/lumen-core/tests/scale.rs
// Purpose: Validate the scale mapper's range, monotonicity, and flat-domain fallback.

use lumen_core::{LinearScale, Series, ValueExtent};

#[test]
fn offsets_stay_within_extent() {
    let scale = LinearScale::new(-5.0, 15.0);
    let extent = 240.0;
    for i in 0..=100 {
        let v = -5.0 + 20.0 * (i as f64 / 100.0);
        let px = scale.offset(v, extent);
        assert!(px >= 0.0 && px <= extent, "offset {px} out of [0, {extent}] for value {v}");
    }
    assert_eq!(scale.offset(-5.0, extent), 0.0);
    assert_eq!(scale.offset(15.0, extent), extent);
}

#[test]
fn offset_is_monotonic_in_value() {
    let scale = LinearScale::new(0.0, 100.0);
    let mut last = f32::NEG_INFINITY;
    for i in 0..=50 {
        let px = scale.offset(i as f64 * 2.0, 500.0);
        assert!(px >= last, "offset decreased at value {}", i * 2);
        last = px;
    }
}

#[test]
fn flat_domain_maps_to_midpoint() {
    // Constant series would otherwise divide by zero.
    for c in [-3.0, 0.0, 7.5] {
        let scale = LinearScale::new(c, c);
        assert_eq!(scale.offset(c, 100.0), 50.0);
        assert_eq!(scale.offset(c + 1.0, 100.0), 50.0);
        assert_eq!(scale.offset_down(c, 100.0), 50.0);
    }
}

#[test]
fn offset_down_inverts_vertical_axis() {
    let scale = LinearScale::new(0.0, 10.0);
    assert_eq!(scale.offset_down(0.0, 200.0), 200.0);
    assert_eq!(scale.offset_down(10.0, 200.0), 0.0);
    assert_eq!(scale.offset_down(5.0, 200.0), 100.0);
}

#[test]
fn extent_spans_all_series_and_skips_non_finite() {
    let a = Series::from_values("a", &[("x", 1.0), ("y", 9.0)]);
    let mut b = Series::from_values("b", &[("x", -4.0)]);
    b.push(lumen_core::DataPoint::new("bad", f64::NAN));
    b.push(lumen_core::DataPoint::new("worse", f64::INFINITY));

    let extent = ValueExtent::from_series([&a, &b]).unwrap();
    assert_eq!(extent.min, -4.0);
    assert_eq!(extent.max, 9.0);
}

#[test]
fn extent_is_none_without_finite_values() {
    let empty = Series::new("empty");
    let mut nan = Series::new("nan");
    nan.push(lumen_core::DataPoint::new("x", f64::NAN));
    assert!(ValueExtent::from_series([&empty, &nan]).is_none());
}
