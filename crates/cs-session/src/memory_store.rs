use crate::key_value_store::validate_key;
use crate::{KeyValueStore, Result as SessionResult, SessionError};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Process-local slots. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[track_caller]
    fn slots(&self) -> SessionResult<MutexGuard<'_, HashMap<String, String>>> {
        self.slots
            .lock()
            .map_err(|e| SessionError::lock_poisoned(e.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> SessionResult<Option<String>> {
        validate_key(key)?;
        Ok(self.slots()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> SessionResult<()> {
        validate_key(key)?;
        self.slots()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> SessionResult<()> {
        validate_key(key)?;
        self.slots()?.remove(key);
        Ok(())
    }
}
