use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SIMULATED_LATENCY_MS, MAX_SIMULATED_LATENCY_MS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Artificial round-trip applied by the mock identity provider
    pub simulated_latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.simulated_latency_ms > MAX_SIMULATED_LATENCY_MS {
            return Err(ConfigError::auth(format!(
                "auth.simulated_latency_ms must be at most {}, got {}",
                MAX_SIMULATED_LATENCY_MS, self.simulated_latency_ms
            )));
        }

        Ok(())
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}
