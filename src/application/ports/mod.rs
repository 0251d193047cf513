mod current_user;
mod preference_repository;
mod prompt_templates;
mod question_generator;
mod repository_error;
mod summarizer;
mod transcript_repository;
mod transcript_source;
mod usage_tracker;
mod user_video_repository;
mod video_metadata;
mod video_repository;

pub use current_user::{CurrentUser, CurrentUserError};
pub use preference_repository::PreferenceRepository;
pub use prompt_templates::PromptTemplates;
pub use question_generator::{GeneratedQuestions, GenerationError, QuestionGenerator};
pub use repository_error::RepositoryError;
pub use summarizer::{Summarizer, SummarizerError, Summary};
pub use transcript_repository::TranscriptRepository;
pub use transcript_source::{TranscriptSource, TranscriptSourceError};
pub use usage_tracker::{UsageRecord, UsageTracker, UsageTrackerError};
pub use user_video_repository::UserVideoRepository;
pub use video_metadata::{MetadataError, VideoMetadata, VideoMetadataProvider};
pub use video_repository::VideoRepository;
