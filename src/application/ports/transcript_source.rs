use async_trait::async_trait;

use crate::domain::{RawTranscriptEntry, VideoId};

#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the raw transcript for a video. An empty list is a valid
    /// answer meaning the video has no transcript.
    async fn fetch(
        &self,
        video_id: &VideoId,
    ) -> Result<Vec<RawTranscriptEntry>, TranscriptSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptSourceError {
    #[error("transcript request failed: {0}")]
    RequestFailed(String),
    #[error("invalid transcript payload: {0}")]
    InvalidResponse(String),
}
