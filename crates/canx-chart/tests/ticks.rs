// File: crates/canx-chart/tests/ticks.rs
// Purpose: Validate numeric and duration tick label formatting.

use canx_chart::{format_duration, format_numeric};

#[test]
fn numeric_bands() {
    assert_eq!(format_numeric(999.0), "999");
    assert_eq!(format_numeric(1000.0), "1000");
    assert_eq!(format_numeric(12345.6), "12346");
    assert_eq!(format_numeric(150.26), "150.3");
    assert_eq!(format_numeric(12.5), "12.5");
    assert_eq!(format_numeric(1.5), "1.5");
    assert_eq!(format_numeric(0.25), "0.25");
    assert_eq!(format_numeric(0.005), "5.00e-3");
    assert_eq!(format_numeric(0.0), "0");
}

#[test]
fn numeric_sign_uses_magnitude_band() {
    assert_eq!(format_numeric(-1500.0), "-1500");
    assert_eq!(format_numeric(-0.005), "-5.00e-3");
    assert_eq!(format_numeric(-2.5), "-2.5");
}

#[test]
fn numeric_non_finite_placeholder() {
    assert_eq!(format_numeric(f64::NAN), "-");
}

#[test]
fn duration_seconds_and_millis() {
    assert_eq!(format_duration(0.5), "500 ms");
    assert_eq!(format_duration(2.345), "2.3 s");
    assert_eq!(format_duration(30.0), "30.0 s");
    assert_eq!(format_duration(0.0123), "12.3 ms");
    assert_eq!(format_duration(0.00125), "1.25 ms");
    assert_eq!(format_duration(0.0), "0 ms");
    assert_eq!(format_duration(-12.0), "-12.0 s");
}
