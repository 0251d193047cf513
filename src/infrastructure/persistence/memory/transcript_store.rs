use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{RepositoryError, TranscriptRepository};
use crate::domain::{TranscriptSegment, VideoId};

/// Process-local segment store. Replace semantics mirror a bulk
/// delete-and-insert keyed by video id, so repeated ingestion never leaves
/// duplicate rows.
#[derive(Default)]
pub struct InMemoryTranscriptRepository {
    segments: RwLock<HashMap<VideoId, Vec<TranscriptSegment>>>,
}

impl InMemoryTranscriptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TranscriptRepository for InMemoryTranscriptRepository {
    async fn replace_segments(
        &self,
        video_id: &VideoId,
        segments: &[TranscriptSegment],
    ) -> Result<(), RepositoryError> {
        let mut stored = self.segments.write().await;
        stored.insert(video_id.clone(), segments.to_vec());
        Ok(())
    }

    async fn get_segments(
        &self,
        video_id: &VideoId,
    ) -> Result<Vec<TranscriptSegment>, RepositoryError> {
        let stored = self.segments.read().await;
        Ok(stored.get(video_id).cloned().unwrap_or_default())
    }
}
