use crate::{IdentityProvider, Result as SessionResult};

use cs_config::AuthConfig;
use cs_core::{PlanTier, Session};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

/// Placeholder id handed to every mock identity.
pub const MOCK_USER_ID: &str = "1";

const PREMIUM_MARKER: &str = "premium";

/// Demo provider: accepts any password after a fixed delay.
///
/// The plan is derived from the email text (`premium` anywhere in it means
/// the premium tier). Signup always yields the free tier.
#[derive(Debug, Clone)]
pub struct MockIdentityProvider {
    latency: Duration,
}

impl MockIdentityProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.simulated_latency())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn login(&self, email: &str, _password: &str) -> SessionResult<Session> {
        debug!("Mock login for {email}");
        self.round_trip().await;

        let plan = if email.contains(PREMIUM_MARKER) {
            PlanTier::Premium
        } else {
            PlanTier::Free
        };

        Ok(Session::new(
            MOCK_USER_ID,
            email,
            Session::local_part(email),
            plan,
        ))
    }

    async fn signup(&self, name: &str, email: &str, _password: &str) -> SessionResult<Session> {
        debug!("Mock signup for {email}");
        self.round_trip().await;

        Ok(Session::new(MOCK_USER_ID, email, name, PlanTier::Free))
    }
}
