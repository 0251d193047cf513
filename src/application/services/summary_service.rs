use std::sync::Arc;

use crate::application::ports::{Summarizer, SummarizerError, Summary};
use crate::domain::{TranscriptSegment, UserVideoId, Video};

use super::language::LanguageResolver;

/// Assembles summarization input from video metadata plus transcript text
/// and delegates to the external summarizer. No retries, no validation —
/// that belongs to the summarizer.
pub struct SummaryService<S>
where
    S: Summarizer,
{
    summarizer: Arc<S>,
    language: LanguageResolver,
}

impl<S> SummaryService<S>
where
    S: Summarizer,
{
    pub fn new(summarizer: Arc<S>, language: LanguageResolver) -> Self {
        Self {
            summarizer,
            language,
        }
    }

    pub async fn summarize(
        &self,
        video: &Video,
        segments: &[TranscriptSegment],
        user_video_id: Option<UserVideoId>,
    ) -> Result<Summary, SummarizerError> {
        let transcript = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let text = format!("{}\n{}\n{}", video.title, video.description, transcript);

        let language = self.language.resolve().await;
        self.summarizer
            .summarize(&text, language, &video.id, user_video_id)
            .await
    }
}
