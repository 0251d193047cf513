use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{TranscriptSource, TranscriptSourceError};
use crate::domain::{RawTranscriptEntry, VideoId};

const DEFAULT_BASE_URL: &str = "https://www.youtube.com/api/timedtext";

/// Caption track fetch via the YouTube timedtext endpoint (`fmt=json3`).
///
/// Timings arrive in milliseconds and are converted to seconds; events
/// without text (styling and window events) are dropped.
pub struct TimedTextClient {
    client: Client,
    base_url: String,
    caption_language: String,
}

#[derive(Deserialize)]
struct TimedTextResponse {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Deserialize)]
struct TimedTextEvent {
    #[serde(rename = "tStartMs", default)]
    start_ms: u64,
    #[serde(rename = "dDurationMs", default)]
    duration_ms: u64,
    segs: Option<Vec<TimedTextSeg>>,
}

#[derive(Deserialize)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: String,
}

impl TimedTextClient {
    pub fn new(caption_language: String) -> Self {
        Self::with_base_url(caption_language, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(caption_language: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            caption_language,
        }
    }
}

#[async_trait]
impl TranscriptSource for TimedTextClient {
    #[tracing::instrument(skip(self), fields(video_id = %video_id))]
    async fn fetch(
        &self,
        video_id: &VideoId,
    ) -> Result<Vec<RawTranscriptEntry>, TranscriptSourceError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("v", video_id.as_str()),
                ("lang", self.caption_language.as_str()),
                ("fmt", "json3"),
            ])
            .send()
            .await
            .map_err(|e| TranscriptSourceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptSourceError::RequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        // Videos without captions answer with an empty body.
        let body = response
            .text()
            .await
            .map_err(|e| TranscriptSourceError::RequestFailed(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let track: TimedTextResponse = serde_json::from_str(&body)
            .map_err(|e| TranscriptSourceError::InvalidResponse(e.to_string()))?;

        let entries = track
            .events
            .into_iter()
            .filter_map(|event| {
                let text = event
                    .segs?
                    .into_iter()
                    .map(|seg| seg.utf8)
                    .collect::<String>()
                    .trim()
                    .to_string();
                if text.is_empty() {
                    return None;
                }
                Some(RawTranscriptEntry {
                    text,
                    offset: event.start_ms as f64 / 1000.0,
                    duration: event.duration_ms as f64 / 1000.0,
                })
            })
            .collect();

        Ok(entries)
    }
}
