mod preference_store;
mod transcript_store;
mod user_video_store;
mod video_store;

pub use preference_store::InMemoryPreferenceRepository;
pub use transcript_store::InMemoryTranscriptRepository;
pub use user_video_store::InMemoryUserVideoRepository;
pub use video_store::InMemoryVideoRepository;
