use crate::{DEFAULT_LOG_COLORED, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored output when writing to a terminal
    pub colored: bool,
    /// Append to this file instead of stderr
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Where log lines end up: the configured file, else stderr.
    pub fn destination(&self) -> &str {
        self.file.as_deref().unwrap_or("stderr")
    }
}
