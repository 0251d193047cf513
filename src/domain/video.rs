use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// External identifier of a video, as assigned by the hosting provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical video metadata, upserted by external id and never duplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnail_url: Option<String>,
}

impl Video {
    /// Stand-in row used when the metadata provider is unavailable.
    pub fn placeholder(id: VideoId) -> Self {
        let title = format!("Video {}", id);
        Self {
            id,
            title,
            description: String::new(),
            channel_title: String::new(),
            published_at: None,
            thumbnail_url: None,
        }
    }
}
