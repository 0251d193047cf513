use async_trait::async_trait;

use crate::domain::{UserId, UserVideo, UserVideoId, VideoId};

use super::RepositoryError;

#[async_trait]
pub trait UserVideoRepository: Send + Sync {
    /// Return the association for the pair, creating it with an empty
    /// summary on first access. Must be a single atomic get-or-insert at
    /// the store, not a read followed by a conditional write; the store's
    /// uniqueness constraint on (user, video) keeps concurrent callers from
    /// producing two rows.
    async fn get_or_create(
        &self,
        user_id: UserId,
        video_id: &VideoId,
    ) -> Result<UserVideo, RepositoryError>;

    async fn find(
        &self,
        user_id: UserId,
        video_id: &VideoId,
    ) -> Result<Option<UserVideo>, RepositoryError>;

    /// Overwrite the stored quick-start questions for an association.
    async fn save_questions(
        &self,
        id: UserVideoId,
        questions: &[String],
    ) -> Result<(), RepositoryError>;
}
