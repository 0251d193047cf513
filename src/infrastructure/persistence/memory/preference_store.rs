use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{PreferenceRepository, RepositoryError};
use crate::domain::UserId;

/// Process-local language preference store.
#[derive(Default)]
pub struct InMemoryPreferenceRepository {
    languages: RwLock<HashMap<UserId, String>>,
}

impl InMemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_language(&self, user_id: UserId, tag: impl Into<String>) {
        let mut languages = self.languages.write().await;
        languages.insert(user_id, tag.into());
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryPreferenceRepository {
    async fn preferred_language(
        &self,
        user_id: UserId,
    ) -> Result<Option<String>, RepositoryError> {
        let languages = self.languages.read().await;
        Ok(languages.get(&user_id).cloned())
    }
}
