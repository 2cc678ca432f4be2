mod error;
mod mock_identity_provider;

use crate::{
    AuthSessionManager, IdentityProvider, KeyValueStore, MemoryStore, MockIdentityProvider,
    Result as SessionResult, SessionError, SessionStore,
};

use cs_core::Session;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

pub(crate) const SESSION_KEY: &str = "user";

pub(crate) fn memory_session_store() -> (Arc<MemoryStore>, SessionStore) {
    let slots = Arc::new(MemoryStore::new());
    let store = SessionStore::new(slots.clone(), SESSION_KEY);
    (slots, store)
}

pub(crate) fn instant_provider() -> Arc<MockIdentityProvider> {
    Arc::new(MockIdentityProvider::new(Duration::ZERO))
}

/// Manager over an empty in-memory store with no simulated latency.
pub(crate) fn started_manager() -> (Arc<MemoryStore>, AuthSessionManager) {
    let (slots, store) = memory_session_store();
    let manager = AuthSessionManager::start(store, instant_provider());
    (slots, manager)
}

/// Slots that refuse every write.
pub(crate) struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn read(&self, _key: &str) -> SessionResult<Option<String>> {
        Ok(None)
    }

    fn write(&self, key: &str, _value: &str) -> SessionResult<()> {
        Err(SessionError::file_write(
            PathBuf::from(format!("/readonly/{key}.json")),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }

    fn delete(&self, key: &str) -> SessionResult<()> {
        Err(SessionError::file_write(
            PathBuf::from(format!("/readonly/{key}.json")),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        ))
    }
}

/// Provider that rejects every credential.
pub(crate) struct RejectingProvider;

#[async_trait]
impl IdentityProvider for RejectingProvider {
    async fn login(&self, email: &str, _password: &str) -> SessionResult<Session> {
        Err(SessionError::invalid_credentials(email))
    }

    async fn signup(&self, _name: &str, email: &str, _password: &str) -> SessionResult<Session> {
        Err(SessionError::invalid_credentials(email))
    }
}
