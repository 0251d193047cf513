use std::sync::Arc;

use crate::application::ports::{
    RepositoryError, TranscriptRepository, TranscriptSource, TranscriptSourceError,
    UserVideoRepository,
};
use crate::domain::{TranscriptSegment, UserId, UserVideo, VideoId};

use super::normalizer::{EmptyTranscriptError, normalize_transcript};

const NO_TRANSCRIPT_MESSAGE: &str = "No transcript is available for this video";

/// What a caller always gets back from the transcript pipeline: a usable
/// shape whether or not a transcript could be produced.
#[derive(Debug, Clone)]
pub struct TranscriptOutcome {
    pub segments: Vec<TranscriptSegment>,
    pub user_video: Option<UserVideo>,
    pub error: bool,
    pub error_message: Option<String>,
}

impl TranscriptOutcome {
    fn available(segments: Vec<TranscriptSegment>, user_video: UserVideo) -> Self {
        Self {
            segments,
            user_video: Some(user_video),
            error: false,
            error_message: None,
        }
    }

    fn unavailable(message: impl Into<String>) -> Self {
        Self {
            segments: Vec::new(),
            user_video: None,
            error: true,
            error_message: Some(message.into()),
        }
    }
}

/// Cache-or-compute entry point for transcript segments.
///
/// Stored segments win; otherwise the external source is consulted, the
/// result normalized and persisted. Everything that can go wrong is
/// absorbed into a degraded [`TranscriptOutcome`] so callers never crash on
/// transcript unavailability.
pub struct TranscriptService<S>
where
    S: TranscriptSource,
{
    source: Arc<S>,
    transcripts: Arc<dyn TranscriptRepository>,
    user_videos: Arc<dyn UserVideoRepository>,
}

impl<S> TranscriptService<S>
where
    S: TranscriptSource,
{
    pub fn new(
        source: Arc<S>,
        transcripts: Arc<dyn TranscriptRepository>,
        user_videos: Arc<dyn UserVideoRepository>,
    ) -> Self {
        Self {
            source,
            transcripts,
            user_videos,
        }
    }

    pub async fn get_or_fetch(&self, video_id: &VideoId, user_id: UserId) -> TranscriptOutcome {
        match self.load_or_ingest(video_id, user_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(video_id = %video_id, error = %e, "Transcript pipeline failed");
                TranscriptOutcome::unavailable(e.to_string())
            }
        }
    }

    async fn load_or_ingest(
        &self,
        video_id: &VideoId,
        user_id: UserId,
    ) -> Result<TranscriptOutcome, TranscriptError> {
        let mut stored = self.transcripts.get_segments(video_id).await?;
        if !stored.is_empty() {
            // Stored row order is not trusted.
            stored.sort_by(|a, b| a.start.cmp(&b.start));
            let user_video = self.user_videos.get_or_create(user_id, video_id).await?;
            tracing::debug!(
                video_id = %video_id,
                segments = stored.len(),
                "Transcript served from store"
            );
            return Ok(TranscriptOutcome::available(stored, user_video));
        }

        let entries = self.source.fetch(video_id).await?;
        if entries.is_empty() {
            // No viewing record for content that cannot be shown.
            tracing::info!(video_id = %video_id, "Provider returned no transcript");
            return Ok(TranscriptOutcome::unavailable(NO_TRANSCRIPT_MESSAGE));
        }

        let segments = normalize_transcript(&entries)?;
        self.transcripts
            .replace_segments(video_id, &segments)
            .await?;
        let user_video = self.user_videos.get_or_create(user_id, video_id).await?;
        tracing::info!(
            video_id = %video_id,
            segments = segments.len(),
            "Transcript ingested"
        );
        Ok(TranscriptOutcome::available(segments, user_video))
    }
}

#[derive(Debug, thiserror::Error)]
enum TranscriptError {
    #[error("transcript source: {0}")]
    Source(#[from] TranscriptSourceError),
    #[error("normalization: {0}")]
    Normalization(#[from] EmptyTranscriptError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
