use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SESSION_DIR, DEFAULT_SESSION_KEY,
    MAX_SESSION_KEY_LENGTH,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Slot directory, relative to the config directory
    pub dir: String,
    /// Key of the persisted session record
    pub key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_SESSION_DIR),
            key: String::from(DEFAULT_SESSION_KEY),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::session(
                "session.dir must be relative and cannot contain '..'",
            ));
        }

        if self.key.is_empty() || self.key.len() > MAX_SESSION_KEY_LENGTH {
            return Err(ConfigError::session(format!(
                "session.key must be 1-{} characters, got {}",
                MAX_SESSION_KEY_LENGTH,
                self.key.len()
            )));
        }

        if !self
            .key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ConfigError::session(format!(
                "session.key may only contain ASCII letters, digits, '-' and '_', got '{}'",
                self.key
            )));
        }

        Ok(())
    }
}
