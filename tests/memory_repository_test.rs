use simak::application::ports::{RepositoryError, TranscriptRepository, UserVideoRepository};
use simak::domain::{TranscriptSegment, UserId, UserVideoId, VideoId};
use simak::infrastructure::persistence::{
    InMemoryTranscriptRepository, InMemoryUserVideoRepository,
};

fn segment(start: &str, text: &str) -> TranscriptSegment {
    TranscriptSegment {
        start: start.to_string(),
        end: start.to_string(),
        text: text.to_string(),
        is_chapter_start: false,
    }
}

#[tokio::test]
async fn given_same_pair_when_getting_or_creating_twice_then_returns_one_row() {
    let repo = InMemoryUserVideoRepository::new();
    let user_id = UserId::new();
    let video_id = VideoId::new("dQw4w9WgXcQ");

    let first = repo.get_or_create(user_id, &video_id).await.unwrap();
    let second = repo.get_or_create(user_id, &video_id).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.summary, "");
}

#[tokio::test]
async fn given_saved_questions_when_saving_again_then_overwrites() {
    let repo = InMemoryUserVideoRepository::new();
    let user_id = UserId::new();
    let video_id = VideoId::new("dQw4w9WgXcQ");
    let row = repo.get_or_create(user_id, &video_id).await.unwrap();

    repo.save_questions(row.id, &["first".to_string()])
        .await
        .unwrap();
    repo.save_questions(row.id, &["second".to_string()])
        .await
        .unwrap();

    let stored = repo.find(user_id, &video_id).await.unwrap().unwrap();
    assert_eq!(stored.quick_start_questions, Some(vec!["second".to_string()]));
}

#[tokio::test]
async fn given_unknown_association_when_saving_questions_then_reports_not_found() {
    let repo = InMemoryUserVideoRepository::new();

    let result = repo
        .save_questions(UserVideoId::new(), &["orphan".to_string()])
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
async fn given_replaced_segments_when_reading_then_only_latest_remain() {
    let repo = InMemoryTranscriptRepository::new();
    let video_id = VideoId::new("dQw4w9WgXcQ");

    repo.replace_segments(
        &video_id,
        &[segment("00:00:00", "old a"), segment("00:00:05", "old b")],
    )
    .await
    .unwrap();
    repo.replace_segments(&video_id, &[segment("00:00:00", "new")])
        .await
        .unwrap();

    let stored = repo.get_segments(&video_id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].text, "new");
}

#[tokio::test]
async fn given_unknown_video_when_reading_segments_then_returns_empty() {
    let repo = InMemoryTranscriptRepository::new();

    let stored = repo
        .get_segments(&VideoId::new("missing"))
        .await
        .unwrap();

    assert!(stored.is_empty());
}
