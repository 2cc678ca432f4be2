use crate::{KeyValueStore, Result as SessionResult};

use cs_core::Session;

use std::sync::Arc;

use log::{info, warn};

/// The single persisted session record.
///
/// Loading never fails: unreadable or malformed records count as "no session".
#[derive(Clone)]
pub struct SessionStore {
    slots: Arc<dyn KeyValueStore>,
    key: String,
}

impl SessionStore {
    pub fn new(slots: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self) -> Option<Session> {
        let contents = match self.slots.read(&self.key) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                info!("No persisted session under '{}'", self.key);
                return None;
            }
            Err(e) if e.is_corrupted_record() => {
                warn!("Persisted session under '{}' is corrupted: {e}", self.key);
                self.quarantine();
                return None;
            }
            Err(e) => {
                warn!("Persisted session unreadable, starting anonymous: {e}");
                return None;
            }
        };

        match serde_json::from_str::<Session>(&contents) {
            Ok(session) => {
                info!("Loaded persisted session for {}", session.email);
                Some(session)
            }
            Err(e) => {
                warn!("Persisted session under '{}' is malformed: {e}", self.key);
                self.quarantine();
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> SessionResult<()> {
        let json = serde_json::to_string_pretty(session)?;
        self.slots.write(&self.key, &json)?;

        info!("Saved session for {}", session.email);
        Ok(())
    }

    /// Removes the record. Clearing an empty store is not an error.
    pub fn clear(&self) -> SessionResult<()> {
        self.slots.delete(&self.key)?;

        info!("Cleared persisted session '{}'", self.key);
        Ok(())
    }

    /// Moves a damaged record aside so a later save does not overwrite it.
    fn quarantine(&self) {
        if let Err(e) = self.slots.quarantine(&self.key) {
            warn!("{e} ({})", e.recovery_hint());
        }
    }
}
