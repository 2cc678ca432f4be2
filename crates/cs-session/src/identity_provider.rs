use crate::Result as SessionResult;

use cs_core::Session;

use async_trait::async_trait;

/// Turns credentials into a session.
///
/// Errors such as `SessionError::InvalidCredentials` are surfaced unchanged
/// by the session manager.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> SessionResult<Session>;

    async fn signup(&self, name: &str, email: &str, password: &str) -> SessionResult<Session>;
}
