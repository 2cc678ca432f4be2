use crate::{Result as SessionResult, SessionError};

use std::path::PathBuf;

/// Local durable key-value slots.
///
/// Implementations must make a successful `write` visible to the next `read`
/// of the same key, and `delete` of a missing key must succeed.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> SessionResult<Option<String>>;

    fn write(&self, key: &str, value: &str) -> SessionResult<()>;

    fn delete(&self, key: &str) -> SessionResult<()>;

    /// Moves an unreadable value out of the way, returning where it went.
    fn quarantine(&self, _key: &str) -> SessionResult<Option<PathBuf>> {
        Ok(None)
    }
}

/// Keys double as file names, so only `[A-Za-z0-9_-]` is accepted.
#[track_caller]
pub(crate) fn validate_key(key: &str) -> SessionResult<()> {
    if key.is_empty() {
        return Err(SessionError::invalid_key(key, "key cannot be empty"));
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(SessionError::invalid_key(
            key,
            "only ASCII letters, digits, '-' and '_' are allowed",
        ));
    }

    Ok(())
}
