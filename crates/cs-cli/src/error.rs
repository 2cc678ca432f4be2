use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] cs_config::ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] cs_session::SessionError),

    #[error("{0}")]
    Core(#[from] cs_core::CoreError),

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(source: serde_json::Error) -> Self {
        CliError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
