use super::normalizer::NO_TEXT_SENTINEL;

const MAX_HEADING_CHARS: usize = 30;
const HEADING_STRIDE: usize = 10;

/// Decide whether a transcript entry opens a chapter.
///
/// A rough placeholder for real chapter detection: short entries at regular
/// positions are flagged, sentinel and "segment" boilerplate are not. The
/// flag is approximate and the rule is expected to be replaced; `index` is
/// the entry's 0-based position in the full ordered sequence.
pub fn is_chapter_start(text: &str, index: usize) -> bool {
    text.chars().count() < MAX_HEADING_CHARS
        && !text.contains("segment")
        && text != NO_TEXT_SENTINEL
        && (index == 0 || index % HEADING_STRIDE == 0)
}
