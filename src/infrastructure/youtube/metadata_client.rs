use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{MetadataError, VideoMetadata, VideoMetadataProvider};
use crate::domain::VideoId;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Video metadata via the YouTube Data API v3 `videos` endpoint.
pub struct YouTubeMetadataClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Deserialize)]
struct VideoItem {
    snippet: Snippet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    channel_title: String,
    published_at: Option<DateTime<Utc>>,
    thumbnails: Option<Thumbnails>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Deserialize)]
struct Thumbnails {
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Deserialize)]
struct Thumbnail {
    url: String,
}

impl YouTubeMetadataClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl VideoMetadataProvider for YouTubeMetadataClient {
    #[tracing::instrument(skip(self), fields(video_id = %video_id))]
    async fn fetch(&self, video_id: &VideoId) -> Result<VideoMetadata, MetadataError> {
        let response = self
            .client
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("id", video_id.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| MetadataError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MetadataError::RequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let listing: VideoListResponse = response
            .json()
            .await
            .map_err(|e| MetadataError::InvalidResponse(e.to_string()))?;

        let item = listing
            .items
            .into_iter()
            .next()
            .ok_or_else(|| MetadataError::NotFound(video_id.to_string()))?;

        let snippet = item.snippet;
        let thumbnail_url = snippet
            .thumbnails
            .and_then(|t| t.medium.or(t.default))
            .map(|t| t.url);

        Ok(VideoMetadata {
            title: snippet.title,
            description: snippet.description,
            channel_title: snippet.channel_title,
            published_at: snippet.published_at,
            thumbnail_url,
            tags: snippet.tags,
        })
    }
}
