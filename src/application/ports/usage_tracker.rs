use async_trait::async_trait;

use crate::domain::{UserId, UserVideoId, VideoId};

/// One LLM call's worth of accounting data.
#[derive(Debug, Clone)]
pub struct UsageRecord {
    pub user_id: Option<UserId>,
    pub model: String,
    pub provider: String,
    pub operation: String,
    pub video_id: Option<VideoId>,
    pub user_video_id: Option<UserVideoId>,
    pub request_duration_ms: u64,
}

#[async_trait]
pub trait UsageTracker: Send + Sync {
    /// Record a usage event. Callers treat failures as non-fatal; the sink
    /// must never be load-bearing for the primary result.
    async fn record(&self, record: UsageRecord) -> Result<(), UsageTrackerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UsageTrackerError {
    #[error("usage sink unavailable: {0}")]
    SinkUnavailable(String),
    #[error("usage record rejected: {0}")]
    Rejected(String),
}
