use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{RepositoryError, UserVideoRepository};
use crate::domain::{UserId, UserVideo, UserVideoId, VideoId};

/// Process-local association store. The single write lock around the whole
/// get-or-create makes it atomic, standing in for the uniqueness constraint
/// a real store enforces on (user, video).
#[derive(Default)]
pub struct InMemoryUserVideoRepository {
    rows: RwLock<HashMap<(UserId, VideoId), UserVideo>>,
}

impl InMemoryUserVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserVideoRepository for InMemoryUserVideoRepository {
    async fn get_or_create(
        &self,
        user_id: UserId,
        video_id: &VideoId,
    ) -> Result<UserVideo, RepositoryError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .entry((user_id, video_id.clone()))
            .or_insert_with(|| UserVideo::new(user_id, video_id.clone()));
        Ok(row.clone())
    }

    async fn find(
        &self,
        user_id: UserId,
        video_id: &VideoId,
    ) -> Result<Option<UserVideo>, RepositoryError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&(user_id, video_id.clone())).cloned())
    }

    async fn save_questions(
        &self,
        id: UserVideoId,
        questions: &[String],
    ) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .values_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("user video {}", id.as_uuid())))?;
        row.quick_start_questions = Some(questions.to_vec());
        Ok(())
    }
}
