mod chapters;
mod language;
mod normalizer;
mod quick_start_service;
mod summary_service;
mod timecode;
mod transcript_service;
mod video_service;

pub use chapters::is_chapter_start;
pub use language::{LanguageResolver, fold_stored_tag};
pub use normalizer::{EmptyTranscriptError, NO_TEXT_SENTINEL, normalize_transcript};
pub use quick_start_service::{
    MAX_PROMPT_TOKENS, QuickStartError, QuickStartService, truncate_to_token_budget,
};
pub use summary_service::SummaryService;
pub use timecode::{format_timecode, format_timecode_short};
pub use transcript_service::{TranscriptOutcome, TranscriptService};
pub use video_service::VideoService;
