use serde::Deserialize;

/// Runtime settings for the infrastructure adapters.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub llm: LlmSettings,
    pub youtube: YouTubeSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub provider: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeSettings {
    pub api_key: String,
    pub caption_language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Assemble settings from environment variables, with defaults that
    /// match the hosted OpenAI endpoint and English captions.
    pub fn from_env() -> Self {
        Self {
            llm: LlmSettings {
                api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
                base_url: std::env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                model: std::env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
                provider: std::env::var("LLM_PROVIDER").unwrap_or_else(|_| "openai".to_string()),
            },
            youtube: YouTubeSettings {
                api_key: std::env::var("YOUTUBE_API_KEY").unwrap_or_default(),
                caption_language: std::env::var("CAPTION_LANGUAGE")
                    .unwrap_or_else(|_| "en".to_string()),
            },
            logging: LoggingSettings {
                level: std::env::var("LOG_LEVEL")
                    .unwrap_or_else(|_| "info,simak=debug".to_string()),
                enable_json: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        }
    }
}
