use std::sync::Arc;

use crate::application::ports::{RepositoryError, VideoMetadataProvider, VideoRepository};
use crate::domain::{Video, VideoId};

/// Resolves a video row for an external id, registering it on first sight.
pub struct VideoService<M>
where
    M: VideoMetadataProvider,
{
    metadata: Arc<M>,
    videos: Arc<dyn VideoRepository>,
}

impl<M> VideoService<M>
where
    M: VideoMetadataProvider,
{
    pub fn new(metadata: Arc<M>, videos: Arc<dyn VideoRepository>) -> Self {
        Self { metadata, videos }
    }

    /// Return the stored video, fetching and upserting metadata when the id
    /// is new. A failing metadata provider degrades to a placeholder row
    /// instead of surfacing the transport error.
    pub async fn get_or_register(&self, video_id: &VideoId) -> Result<Video, RepositoryError> {
        if let Some(existing) = self.videos.get(video_id).await? {
            return Ok(existing);
        }

        let video = match self.metadata.fetch(video_id).await {
            Ok(metadata) => Video {
                id: video_id.clone(),
                title: metadata.title,
                description: metadata.description,
                channel_title: metadata.channel_title,
                published_at: metadata.published_at,
                thumbnail_url: metadata.thumbnail_url,
            },
            Err(e) => {
                tracing::warn!(
                    video_id = %video_id,
                    error = %e,
                    "Metadata unavailable, storing placeholder"
                );
                Video::placeholder(video_id.clone())
            }
        };

        self.videos.upsert(&video).await
    }
}
