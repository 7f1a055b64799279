// core/tests/test_format.rs

use fitscribe_core::{format_duration, format_pace};

#[test]
fn duration_is_total_over_all_inputs() {
    // Ugyldige og negative verdier skal aldri gi uformatert utdata.
    for s in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0, -12345.6] {
        assert_eq!(format_duration(s), "00:00:00", "input {s}");
    }
    assert_eq!(format_duration(0.0), "00:00:00");
    assert_eq!(format_duration(3923.0), "01:05:23");
    // Svært store verdier beholder mønsteret; timene vokser forbi to sifre.
    assert_eq!(format_duration(360_000.0), "100:00:00");
}

#[test]
fn duration_floors_fractional_seconds() {
    assert_eq!(format_duration(59.9), "00:00:59");
    assert_eq!(format_duration(3600.4), "01:00:00");
}

#[test]
fn pace_boundaries_render_na() {
    assert_eq!(format_pace(0.0), "N/A");
    assert_eq!(format_pace(-1.0), "N/A");
    assert_eq!(format_pace(f64::NAN), "N/A");
}

#[test]
fn pace_for_typical_running_speed() {
    // 10.2 km på 01:05:23 => 2.6001 m/s => 384.6 s/km => 6:25.
    assert_eq!(format_pace(2.6001), "6:25 min/km");
}

#[test]
fn pace_seconds_are_zero_padded() {
    // 3.3 m/s => 303.0 s/km => 5:03.
    assert_eq!(format_pace(3.3), "5:03 min/km");
}

#[test]
fn pace_rounding_carries_into_minutes() {
    // 359.6 s/km runder sekundene til 60 og skal bære over til 6:00,
    // aldri rendre "5:60".
    let speed = 1000.0 / 359.6;
    assert_eq!(format_pace(speed), "6:00 min/km");
}
