use crate::{IdentityProvider, MockIdentityProvider};

use cs_config::AuthConfig;
use cs_core::PlanTier;

use std::time::Duration;

use tokio::time::Instant;

#[tokio::test]
async fn given_emails_containing_premium_when_login_then_premium_plan() {
    let provider = MockIdentityProvider::new(Duration::ZERO);

    for email in ["bob@premium.io", "premium@x.com", "xpremiumx", "a@b.premium"] {
        let session = provider.login(email, "pw").await.unwrap();
        assert_eq!(session.plan, PlanTier::Premium, "email: {email}");
    }
}

#[tokio::test]
async fn given_other_emails_when_login_then_free_plan() {
    let provider = MockIdentityProvider::new(Duration::ZERO);

    for email in ["alice@x.com", "Premium@x.com", "prem@ium.io", ""] {
        let session = provider.login(email, "pw").await.unwrap();
        assert_eq!(session.plan, PlanTier::Free, "email: {email}");
    }
}

#[tokio::test]
async fn given_login_when_resolved_then_name_is_local_part_and_id_placeholder() {
    let provider = MockIdentityProvider::new(Duration::ZERO);

    let session = provider.login("alice@x.com", "").await.unwrap();

    assert_eq!(session.id, "1");
    assert_eq!(session.email, "alice@x.com");
    assert_eq!(session.name, "alice");
}

#[tokio::test]
async fn given_premium_email_when_signup_then_still_free_and_name_verbatim() {
    let provider = MockIdentityProvider::new(Duration::ZERO);

    let session = provider
        .signup("Bob Builder", "bob@premium.io", "pw")
        .await
        .unwrap();

    assert_eq!(session.plan, PlanTier::Free);
    assert_eq!(session.name, "Bob Builder");
    assert_eq!(session.email, "bob@premium.io");
}

#[tokio::test(start_paused = true)]
async fn given_latency_when_login_then_resolves_after_delay() {
    let provider = MockIdentityProvider::new(Duration::from_millis(1000));
    let started = Instant::now();

    provider.login("alice@x.com", "pw").await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1000));
}

#[test]
fn given_auth_config_when_from_config_then_latency_matches() {
    let config = AuthConfig {
        simulated_latency_ms: 250,
    };

    let provider = MockIdentityProvider::from_config(&config);

    assert_eq!(provider.latency(), Duration::from_millis(250));
}
