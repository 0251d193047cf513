use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Summarizer, SummarizerError, Summary};
use crate::domain::{LanguageCode, UserVideoId, VideoId};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Free-text summarization against an OpenAI-compatible chat completions
/// endpoint.
pub struct OpenAiSummarizer {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiSummarizer {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    fn system_prompt(language: LanguageCode) -> &'static str {
        match language {
            LanguageCode::En => {
                "Summarize the video below in a few short paragraphs. \
                 Reply in English."
            }
            LanguageCode::Id => {
                "Ringkas video berikut dalam beberapa paragraf singkat. \
                 Jawab dalam Bahasa Indonesia."
            }
        }
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    #[tracing::instrument(skip(self, text), fields(video_id = %video_id, language = %language))]
    async fn summarize(
        &self,
        text: &str,
        language: LanguageCode,
        video_id: &VideoId,
        _user_video_id: Option<UserVideoId>,
    ) -> Result<Summary, SummarizerError> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Self::system_prompt(language).to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizerError::RequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SummarizerError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizerError::RequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(e.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| SummarizerError::InvalidResponse("no choices".to_string()))?;

        Ok(Summary { text })
    }
}
