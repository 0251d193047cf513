use async_trait::async_trait;

use crate::domain::{TranscriptSegment, VideoId};

use super::RepositoryError;

#[async_trait]
pub trait TranscriptRepository: Send + Sync {
    /// Replace all stored segments for the video in one shot. Re-ingesting
    /// the same video must not leave duplicate rows behind.
    async fn replace_segments(
        &self,
        video_id: &VideoId,
        segments: &[TranscriptSegment],
    ) -> Result<(), RepositoryError>;

    /// Read back stored segments. Row order is whatever the store returns;
    /// callers that need ordering sort by `start` themselves.
    async fn get_segments(
        &self,
        video_id: &VideoId,
    ) -> Result<Vec<TranscriptSegment>, RepositoryError>;
}
