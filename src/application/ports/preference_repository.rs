use async_trait::async_trait;

use crate::domain::UserId;

use super::RepositoryError;

#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Raw stored language tag for the user, if any. Validation against the
    /// supported set is the resolver's job, not the store's.
    async fn preferred_language(
        &self,
        user_id: UserId,
    ) -> Result<Option<String>, RepositoryError>;
}
