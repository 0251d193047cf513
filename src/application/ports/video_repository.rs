use async_trait::async_trait;

use crate::domain::{Video, VideoId};

use super::RepositoryError;

#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Insert or update the row keyed by `video.id`, returning the stored
    /// state. Repeated upserts for the same id never create duplicates.
    async fn upsert(&self, video: &Video) -> Result<Video, RepositoryError>;

    async fn get(&self, id: &VideoId) -> Result<Option<Video>, RepositoryError>;
}
