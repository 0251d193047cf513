use simak::application::services::{format_timecode, format_timecode_short};

#[test]
fn given_zero_seconds_when_formatting_then_returns_midnight() {
    assert_eq!(format_timecode(0.0), "00:00:00");
}

#[test]
fn given_fractional_seconds_when_formatting_then_truncates() {
    assert_eq!(format_timecode(61.9), "00:01:01");
}

#[test]
fn given_hour_boundary_when_formatting_then_rolls_over() {
    assert_eq!(format_timecode(3600.0), "01:00:00");
    assert_eq!(format_timecode(3661.0), "01:01:01");
}

#[test]
fn given_duration_beyond_one_day_when_formatting_then_wraps_the_clock() {
    assert_eq!(format_timecode(86_400.0), "00:00:00");
    assert_eq!(format_timecode(90_000.0), "01:00:00");
}

#[test]
fn given_seconds_when_short_formatting_then_uses_minute_second_form() {
    assert_eq!(format_timecode_short(0.0), "0:00");
    assert_eq!(format_timecode_short(59.4), "0:59");
    assert_eq!(format_timecode_short(125.0), "2:05");
}

#[test]
fn given_over_an_hour_when_short_formatting_then_minutes_keep_counting() {
    assert_eq!(format_timecode_short(3725.0), "62:05");
}
