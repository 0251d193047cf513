use async_trait::async_trait;

use crate::domain::UserAccount;

#[async_trait]
pub trait CurrentUser: Send + Sync {
    /// Identity of the user behind the current request. Fails when no
    /// session is attached; callers that only need a language treat that
    /// failure as "use the default".
    async fn current(&self) -> Result<UserAccount, CurrentUserError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CurrentUserError {
    #[error("no authenticated user")]
    NotAuthenticated,
    #[error("session lookup failed: {0}")]
    LookupFailed(String),
}
