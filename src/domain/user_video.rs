use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{UserId, VideoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserVideoId(Uuid);

impl UserVideoId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserVideoId {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-(user, video) record tracking the generated summary and quick-start
/// questions for that user. Created lazily on first access, at most one per
/// pair; the persistence layer enforces uniqueness.
#[derive(Debug, Clone, PartialEq)]
pub struct UserVideo {
    pub id: UserVideoId,
    pub user_id: UserId,
    pub video_id: VideoId,
    pub summary: String,
    pub quick_start_questions: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl UserVideo {
    pub fn new(user_id: UserId, video_id: VideoId) -> Self {
        Self {
            id: UserVideoId::new(),
            user_id,
            video_id,
            summary: String::new(),
            quick_start_questions: None,
            created_at: Utc::now(),
        }
    }
}
