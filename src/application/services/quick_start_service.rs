use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::{
    CurrentUser, GenerationError, PromptTemplates, QuestionGenerator, RepositoryError,
    UsageRecord, UsageTracker, UserVideoRepository,
};
use crate::domain::{TranscriptSegment, UserVideoId, VideoId};

use super::language::LanguageResolver;

/// Hard cap on whitespace-delimited tokens fed to the generator, bounding
/// LLM input cost.
pub const MAX_PROMPT_TOKENS: usize = 6000;

const OPERATION: &str = "quick_start_questions";

/// Derives quick-start questions from a transcript via structured
/// generation, with best-effort usage accounting and idempotent
/// persistence of the result.
pub struct QuickStartService<G>
where
    G: QuestionGenerator,
{
    generator: Arc<G>,
    templates: Arc<dyn PromptTemplates>,
    usage: Arc<dyn UsageTracker>,
    user_videos: Arc<dyn UserVideoRepository>,
    current_user: Arc<dyn CurrentUser>,
    language: LanguageResolver,
}

impl<G> QuickStartService<G>
where
    G: QuestionGenerator,
{
    pub fn new(
        generator: Arc<G>,
        templates: Arc<dyn PromptTemplates>,
        usage: Arc<dyn UsageTracker>,
        user_videos: Arc<dyn UserVideoRepository>,
        current_user: Arc<dyn CurrentUser>,
        language: LanguageResolver,
    ) -> Self {
        Self {
            generator,
            templates,
            usage,
            user_videos,
            current_user,
            language,
        }
    }

    /// Generate questions for a transcript. An empty list is a valid
    /// result, not an error.
    pub async fn generate(
        &self,
        segments: &[TranscriptSegment],
        video_title: Option<&str>,
        video_description: Option<&str>,
        user_video_id: Option<UserVideoId>,
        video_id: Option<&VideoId>,
    ) -> Result<Vec<String>, QuickStartError> {
        let language = self.language.resolve().await;
        let transcript = truncate_to_token_budget(segments, MAX_PROMPT_TOKENS);
        let prompt = build_prompt(
            &self.templates.quick_start(language),
            video_title,
            video_description,
            &transcript,
        );

        let started = Instant::now();
        let generated = self.generator.generate(&prompt).await?;
        let request_duration_ms = started.elapsed().as_millis() as u64;
        tracing::debug!(
            questions = generated.questions.len(),
            request_duration_ms,
            "Quick-start generation finished"
        );

        self.record_usage(video_id, user_video_id, request_duration_ms)
            .await;

        if let Some(id) = user_video_id {
            if !generated.questions.is_empty() {
                self.user_videos
                    .save_questions(id, &generated.questions)
                    .await?;
            }
        }

        Ok(generated.questions)
    }

    /// Accounting runs after the questions are already in hand; a failing
    /// sink is logged and discarded, never surfaced.
    async fn record_usage(
        &self,
        video_id: Option<&VideoId>,
        user_video_id: Option<UserVideoId>,
        request_duration_ms: u64,
    ) {
        let user_id = self
            .current_user
            .current()
            .await
            .ok()
            .map(|account| account.id);

        let record = UsageRecord {
            user_id,
            model: self.generator.model().to_string(),
            provider: self.generator.provider().to_string(),
            operation: OPERATION.to_string(),
            video_id: video_id.cloned(),
            user_video_id,
            request_duration_ms,
        };

        if let Err(e) = self.usage.record(record).await {
            tracing::warn!(error = %e, "Usage tracking failed");
        }
    }
}

/// Join segment texts with single spaces and cap the result at `budget`
/// whitespace-delimited tokens.
pub fn truncate_to_token_budget(segments: &[TranscriptSegment], budget: usize) -> String {
    let joined = segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let tokens: Vec<&str> = joined.split_whitespace().collect();
    let kept = tokens.len().min(budget);
    tokens[..kept].join(" ")
}

fn build_prompt(
    instructions: &str,
    video_title: Option<&str>,
    video_description: Option<&str>,
    transcript: &str,
) -> String {
    let mut prompt = instructions.to_string();

    if let Some(title) = video_title {
        prompt.push_str("\nVideo title: ");
        prompt.push_str(title);
    }
    if let Some(description) = video_description {
        prompt.push_str("\nVideo description: ");
        prompt.push_str(description);
    }

    prompt.push_str("\n\nTranscript:\n\"\"\"\n");
    prompt.push_str(transcript);
    prompt.push_str("\n\"\"\"");
    prompt
}

#[derive(Debug, thiserror::Error)]
pub enum QuickStartError {
    #[error("generation: {0}")]
    Generation(#[from] GenerationError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
