mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "CS_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".chartsight";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_SESSION_DIR: &str = "session";
const DEFAULT_SESSION_KEY: &str = "user";
const MAX_SESSION_KEY_LENGTH: usize = 64;

const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1000;
const MAX_SIMULATED_LATENCY_MS: u64 = 30_000;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
