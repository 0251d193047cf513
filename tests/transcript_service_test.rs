use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use simak::application::ports::{
    TranscriptRepository, TranscriptSource, TranscriptSourceError, UserVideoRepository,
};
use simak::application::services::TranscriptService;
use simak::domain::{RawTranscriptEntry, TranscriptSegment, UserId, VideoId};
use simak::infrastructure::persistence::{
    InMemoryTranscriptRepository, InMemoryUserVideoRepository,
};

struct CountingSource {
    entries: Vec<RawTranscriptEntry>,
    calls: AtomicUsize,
}

impl CountingSource {
    fn new(entries: Vec<RawTranscriptEntry>) -> Self {
        Self {
            entries,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TranscriptSource for CountingSource {
    async fn fetch(
        &self,
        _video_id: &VideoId,
    ) -> Result<Vec<RawTranscriptEntry>, TranscriptSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.clone())
    }
}

struct FailingSource;

#[async_trait::async_trait]
impl TranscriptSource for FailingSource {
    async fn fetch(
        &self,
        _video_id: &VideoId,
    ) -> Result<Vec<RawTranscriptEntry>, TranscriptSourceError> {
        Err(TranscriptSourceError::RequestFailed(
            "connection refused".to_string(),
        ))
    }
}

fn entries() -> Vec<RawTranscriptEntry> {
    (0..12)
        .map(|i| RawTranscriptEntry {
            text: format!("spoken line number {}", i),
            offset: i as f64 * 5.0,
            duration: 5.0,
        })
        .collect()
}

struct Harness {
    source: Arc<CountingSource>,
    transcripts: Arc<InMemoryTranscriptRepository>,
    user_videos: Arc<InMemoryUserVideoRepository>,
    service: TranscriptService<CountingSource>,
}

fn harness(raw: Vec<RawTranscriptEntry>) -> Harness {
    let source = Arc::new(CountingSource::new(raw));
    let transcripts = Arc::new(InMemoryTranscriptRepository::new());
    let user_videos = Arc::new(InMemoryUserVideoRepository::new());
    let service = TranscriptService::new(
        Arc::clone(&source),
        transcripts.clone() as Arc<dyn TranscriptRepository>,
        user_videos.clone() as Arc<dyn UserVideoRepository>,
    );
    Harness {
        source,
        transcripts,
        user_videos,
        service,
    }
}

#[tokio::test]
async fn given_unseen_video_when_fetching_then_ingests_and_creates_association() {
    let h = harness(entries());
    let video_id = VideoId::new("dQw4w9WgXcQ");
    let user_id = UserId::new();

    let outcome = h.service.get_or_fetch(&video_id, user_id).await;

    assert!(!outcome.error);
    assert_eq!(outcome.segments.len(), 12);
    assert_eq!(outcome.segments[0].start, "00:00:00");
    let user_video = outcome.user_video.expect("association should exist");
    assert_eq!(user_video.summary, "");
    assert!(user_video.quick_start_questions.is_none());
}

#[tokio::test]
async fn given_already_ingested_video_when_fetching_again_then_serves_from_store() {
    let h = harness(entries());
    let video_id = VideoId::new("dQw4w9WgXcQ");
    let user_id = UserId::new();

    let first = h.service.get_or_fetch(&video_id, user_id).await;
    let second = h.service.get_or_fetch(&video_id, user_id).await;

    assert_eq!(h.source.calls(), 1);
    assert_eq!(first.segments, second.segments);

    let stored = h.transcripts.get_segments(&video_id).await.unwrap();
    assert_eq!(stored.len(), 12);
}

#[tokio::test]
async fn given_shuffled_stored_segments_when_fetching_then_returns_sorted_by_start() {
    let h = harness(Vec::new());
    let video_id = VideoId::new("dQw4w9WgXcQ");

    let shuffled: Vec<TranscriptSegment> = [120.0, 0.0, 60.0, 30.0]
        .iter()
        .map(|&offset| TranscriptSegment {
            start: simak::application::services::format_timecode(offset),
            end: simak::application::services::format_timecode(offset + 10.0),
            text: format!("at {}", offset),
            is_chapter_start: false,
        })
        .collect();
    h.transcripts
        .replace_segments(&video_id, &shuffled)
        .await
        .unwrap();

    let outcome = h.service.get_or_fetch(&video_id, UserId::new()).await;

    let starts: Vec<&str> = outcome.segments.iter().map(|s| s.start.as_str()).collect();
    assert_eq!(starts, vec!["00:00:00", "00:00:30", "00:01:00", "00:02:00"]);
    assert_eq!(h.source.calls(), 0);
}

#[tokio::test]
async fn given_provider_without_transcript_when_fetching_then_flags_error_without_association() {
    let h = harness(Vec::new());
    let video_id = VideoId::new("dQw4w9WgXcQ");
    let user_id = UserId::new();

    let outcome = h.service.get_or_fetch(&video_id, user_id).await;

    assert!(outcome.error);
    assert!(outcome.error_message.is_some());
    assert!(outcome.segments.is_empty());
    assert!(outcome.user_video.is_none());
    assert!(h.user_videos.find(user_id, &video_id).await.unwrap().is_none());
}

#[tokio::test]
async fn given_failing_provider_when_fetching_then_absorbs_into_degraded_outcome() {
    let transcripts = Arc::new(InMemoryTranscriptRepository::new());
    let user_videos = Arc::new(InMemoryUserVideoRepository::new());
    let service = TranscriptService::new(
        Arc::new(FailingSource),
        transcripts as Arc<dyn TranscriptRepository>,
        user_videos as Arc<dyn UserVideoRepository>,
    );

    let outcome = service
        .get_or_fetch(&VideoId::new("dQw4w9WgXcQ"), UserId::new())
        .await;

    assert!(outcome.error);
    assert!(outcome.segments.is_empty());
    assert!(outcome.user_video.is_none());
}
