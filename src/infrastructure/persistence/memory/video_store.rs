use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{RepositoryError, VideoRepository};
use crate::domain::{Video, VideoId};

/// Process-local video store keyed by external id.
#[derive(Default)]
pub struct InMemoryVideoRepository {
    videos: RwLock<HashMap<VideoId, Video>>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn upsert(&self, video: &Video) -> Result<Video, RepositoryError> {
        let mut videos = self.videos.write().await;
        videos.insert(video.id.clone(), video.clone());
        Ok(video.clone())
    }

    async fn get(&self, id: &VideoId) -> Result<Option<Video>, RepositoryError> {
        let videos = self.videos.read().await;
        Ok(videos.get(id).cloned())
    }
}
