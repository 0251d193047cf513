use async_trait::async_trait;
use serde::Deserialize;

/// Typed shape the structured-generation service must return.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuestions {
    pub questions: Vec<String>,
}

#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedQuestions, GenerationError>;

    /// Model and provider identity, recorded with every usage event.
    fn model(&self) -> &str;
    fn provider(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    RequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid generation payload: {0}")]
    InvalidResponse(String),
}
