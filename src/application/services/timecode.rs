use chrono::NaiveTime;

const SECONDS_PER_DAY: u64 = 86_400;

/// Format a non-negative duration as a zero-padded `HH:mm:ss` clock string
/// anchored at midnight. Fractional seconds are truncated. Durations of
/// 24 hours or more wrap around the clock; segment starts and ends go
/// through the same rule.
pub fn format_timecode(seconds: f64) -> String {
    let total = (seconds.max(0.0) as u64 % SECONDS_PER_DAY) as u32;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(total, 0).unwrap_or(NaiveTime::MIN);
    time.format("%H:%M:%S").to_string()
}

/// Compact `m:ss` rendering used in generated placeholder text.
pub fn format_timecode_short(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
