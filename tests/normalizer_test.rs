use simak::application::services::{format_timecode, normalize_transcript};
use simak::domain::RawTranscriptEntry;

fn entry(text: &str, offset: f64, duration: f64) -> RawTranscriptEntry {
    RawTranscriptEntry {
        text: text.to_string(),
        offset,
        duration,
    }
}

#[test]
fn given_no_entries_when_normalizing_then_fails() {
    let result = normalize_transcript(&[]);
    assert!(result.is_err());
}

#[test]
fn given_timed_entries_when_normalizing_then_start_and_end_match_formatter() {
    let entries = vec![entry("Welcome", 90.0, 30.5)];

    let segments = normalize_transcript(&entries).unwrap();

    assert_eq!(segments[0].start, format_timecode(90.0));
    assert_eq!(segments[0].end, format_timecode(120.5));
    assert_eq!(segments[0].start, "00:01:30");
    assert_eq!(segments[0].end, "00:02:00");
}

#[test]
fn given_many_entries_when_normalizing_then_order_and_cardinality_are_preserved() {
    let entries: Vec<_> = (0..25)
        .map(|i| entry(&format!("line {}", i), i as f64 * 5.0, 5.0))
        .collect();

    let segments = normalize_transcript(&entries).unwrap();

    assert_eq!(segments.len(), 25);
    assert_eq!(segments[0].text, "line 0");
    assert_eq!(segments[24].text, "line 24");
}

#[test]
fn given_sentinel_entry_when_normalizing_then_substitutes_short_formatted_placeholder() {
    let entries = vec![entry("N/A", 125.0, 5.0)];

    let segments = normalize_transcript(&entries).unwrap();

    assert_eq!(segments[0].text, "Segment at 2:05");
}

#[test]
fn given_sentinel_entry_when_normalizing_then_chapter_flag_sees_original_text() {
    // The substituted placeholder would pass the heuristic's length check;
    // the sentinel itself must not.
    let entries = vec![entry("N/A", 0.0, 5.0)];

    let segments = normalize_transcript(&entries).unwrap();

    assert!(!segments[0].is_chapter_start);
}

#[test]
fn given_short_entry_at_stride_position_when_normalizing_then_flags_chapter() {
    let mut entries: Vec<_> = (0..11)
        .map(|i| {
            entry(
                "this line is long enough to never be a heading",
                i as f64,
                1.0,
            )
        })
        .collect();
    entries[10] = entry("Recap", 10.0, 1.0);

    let segments = normalize_transcript(&entries).unwrap();

    assert!(!segments[0].is_chapter_start);
    assert!(!segments[9].is_chapter_start);
    assert!(segments[10].is_chapter_start);
}

#[test]
fn given_missing_timings_when_normalizing_then_defaults_to_zero() {
    let entries = vec![entry("Hello", 0.0, 0.0)];

    let segments = normalize_transcript(&entries).unwrap();

    assert_eq!(segments[0].start, "00:00:00");
    assert_eq!(segments[0].end, "00:00:00");
}
