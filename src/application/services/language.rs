use std::sync::Arc;

use crate::application::ports::{CurrentUser, PreferenceRepository, RepositoryError};
use crate::domain::LanguageCode;

/// Resolves the acting user's preferred output language.
///
/// Used defensively everywhere a language is needed: no session, a storage
/// error, or an unsupported stored tag all collapse to English instead of
/// failing the surrounding request.
#[derive(Clone)]
pub struct LanguageResolver {
    current_user: Arc<dyn CurrentUser>,
    preferences: Arc<dyn PreferenceRepository>,
}

impl LanguageResolver {
    pub fn new(
        current_user: Arc<dyn CurrentUser>,
        preferences: Arc<dyn PreferenceRepository>,
    ) -> Self {
        Self {
            current_user,
            preferences,
        }
    }

    pub async fn resolve(&self) -> LanguageCode {
        let account = match self.current_user.current().await {
            Ok(account) => account,
            Err(e) => {
                tracing::debug!(error = %e, "No resolvable user, defaulting language");
                return LanguageCode::En;
            }
        };

        let stored = self.preferences.preferred_language(account.id).await;
        if let Err(e) = &stored {
            tracing::debug!(error = %e, "Language preference lookup failed, defaulting");
        }
        fold_stored_tag(stored)
    }
}

/// Fold a preference lookup outcome into a language, with an explicit
/// fallback branch instead of suppressed exceptions at call sites.
pub fn fold_stored_tag(stored: Result<Option<String>, RepositoryError>) -> LanguageCode {
    stored
        .ok()
        .flatten()
        .and_then(|tag| tag.parse::<LanguageCode>().ok())
        .unwrap_or(LanguageCode::En)
}
