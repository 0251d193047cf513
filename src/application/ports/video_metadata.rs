use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::VideoId;

/// Snapshot of a video's public metadata as reported by the provider.
#[derive(Debug, Clone)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnail_url: Option<String>,
    pub tags: Vec<String>,
}

#[async_trait]
pub trait VideoMetadataProvider: Send + Sync {
    async fn fetch(&self, video_id: &VideoId) -> Result<VideoMetadata, MetadataError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("metadata request failed: {0}")]
    RequestFailed(String),
    #[error("video not found: {0}")]
    NotFound(String),
    #[error("invalid metadata payload: {0}")]
    InvalidResponse(String),
}
