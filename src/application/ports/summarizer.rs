use async_trait::async_trait;

use crate::domain::{LanguageCode, UserVideoId, VideoId};

#[derive(Debug, Clone)]
pub struct Summary {
    pub text: String,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a free-text summary of `text` in the requested language.
    /// Retries, validation, and writing the summary back onto the
    /// association are the implementor's concern.
    async fn summarize(
        &self,
        text: &str,
        language: LanguageCode,
        video_id: &VideoId,
        user_video_id: Option<UserVideoId>,
    ) -> Result<Summary, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("summary request failed: {0}")]
    RequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid summary payload: {0}")]
    InvalidResponse(String),
}
