use crate::domain::{RawTranscriptEntry, TranscriptSegment};

use super::chapters::is_chapter_start;
use super::timecode::{format_timecode, format_timecode_short};

/// Sentinel some transcript providers emit for entries with no usable text.
pub const NO_TEXT_SENTINEL: &str = "N/A";

#[derive(Debug, thiserror::Error)]
#[error("transcript has no entries")]
pub struct EmptyTranscriptError;

/// Convert raw provider entries into canonical segments, preserving order
/// and cardinality.
///
/// Sentinel entries get a generated placeholder naming their start offset;
/// the chapter flag is always computed from the provider's original text,
/// not the substituted placeholder. An empty input is a hard failure — the
/// direct caller decides what an absent transcript means.
pub fn normalize_transcript(
    entries: &[RawTranscriptEntry],
) -> Result<Vec<TranscriptSegment>, EmptyTranscriptError> {
    if entries.is_empty() {
        return Err(EmptyTranscriptError);
    }

    Ok(entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let start = entry.offset;
            let end = entry.offset + entry.duration;
            let text = if entry.text == NO_TEXT_SENTINEL {
                format!("Segment at {}", format_timecode_short(start))
            } else {
                entry.text.clone()
            };

            TranscriptSegment {
                start: format_timecode(start),
                end: format_timecode(end),
                is_chapter_start: is_chapter_start(&entry.text, index),
                text,
            }
        })
        .collect())
}
