use crate::application::ports::PromptTemplates;
use crate::domain::LanguageCode;

const QUICK_START_EN: &str = "You help viewers get into a video they just opened. \
Based on the transcript below, write exactly 3 short, curious questions in English \
that a viewer could tap to start exploring the video. \
Answer with JSON of the form {\"questions\": [\"...\"]}.";

const QUICK_START_ID: &str = "Kamu membantu penonton memahami video yang baru mereka buka. \
Berdasarkan transkrip di bawah, buat tepat 3 pertanyaan singkat dan menarik dalam Bahasa Indonesia \
yang bisa dipilih penonton untuk mulai menjelajahi video. \
Jawab dengan JSON berbentuk {\"questions\": [\"...\"]}.";

/// Built-in per-language instruction templates.
#[derive(Default)]
pub struct StaticPromptTemplates;

impl StaticPromptTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl PromptTemplates for StaticPromptTemplates {
    fn quick_start(&self, language: LanguageCode) -> String {
        match language {
            LanguageCode::En => QUICK_START_EN.to_string(),
            LanguageCode::Id => QUICK_START_ID.to_string(),
        }
    }
}
