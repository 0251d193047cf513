use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::application::ports::{GeneratedQuestions, GenerationError, QuestionGenerator};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

// The generation model only accepts its default temperature.
const QUESTION_TEMPERATURE: f32 = 1.0;

/// Structured question generation against an OpenAI-compatible chat
/// completions endpoint, constrained to a `{ "questions": [...] }` schema.
pub struct OpenAiQuestionGenerator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    provider: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: serde_json::Value,
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

impl OpenAiQuestionGenerator {
    pub fn new(api_key: String, model: String, provider: String) -> Self {
        Self::with_base_url(api_key, model, provider, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(
        api_key: String,
        model: String,
        provider: String,
        base_url: String,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
            provider,
        }
    }

    fn response_format() -> serde_json::Value {
        json!({
            "type": "json_schema",
            "json_schema": {
                "name": "quick_start_questions",
                "schema": {
                    "type": "object",
                    "properties": {
                        "questions": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["questions"],
                    "additionalProperties": false
                }
            }
        })
    }
}

#[async_trait]
impl QuestionGenerator for OpenAiQuestionGenerator {
    #[tracing::instrument(skip(self, prompt))]
    async fn generate(&self, prompt: &str) -> Result<GeneratedQuestions, GenerationError> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: QUESTION_TEMPERATURE,
            response_format: Self::response_format(),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::RequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::InvalidResponse("no choices".to_string()))?;

        serde_json::from_str(&content).map_err(|e| GenerationError::InvalidResponse(e.to_string()))
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider(&self) -> &str {
        &self.provider
    }
}
