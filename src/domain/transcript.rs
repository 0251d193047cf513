use serde::{Deserialize, Serialize};

/// A normalized, time-bounded slice of a transcript.
///
/// `start` and `end` are zero-padded `HH:mm:ss` clock strings measured from
/// the beginning of the video. Both come from monotonically non-decreasing
/// offsets, so `start <= end` lexically within a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: String,
    pub end: String,
    pub text: String,
    pub is_chapter_start: bool,
}

/// One entry as delivered by an external transcript provider.
///
/// Providers routinely omit timing fields; both default to 0 seconds.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTranscriptEntry {
    pub text: String,
    #[serde(default)]
    pub offset: f64,
    #[serde(default)]
    pub duration: f64,
}
