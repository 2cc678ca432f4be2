use cs_core::{AuthState, Route};

use log::{debug, warn};
use serde::Serialize;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "to", rename_all = "snake_case")]
pub enum GuardDecision {
    Allow,
    /// Session is still being restored; show a neutral placeholder
    Pending,
    Redirect(Route),
}

/// Decides whether navigation to a route may proceed.
pub struct RouteGuard {
    state_rx: watch::Receiver<AuthState>,
}

impl RouteGuard {
    pub fn new(state_rx: watch::Receiver<AuthState>) -> Self {
        Self { state_rx }
    }

    pub fn decide(state: &AuthState, route: Route) -> GuardDecision {
        if !route.is_protected() {
            return GuardDecision::Allow;
        }

        match state {
            AuthState::Authenticated(_) => GuardDecision::Allow,
            AuthState::Uninitialized | AuthState::Loading => GuardDecision::Pending,
            AuthState::Anonymous => GuardDecision::Redirect(Route::anonymous_entry()),
        }
    }

    /// Decision for the current state, without waiting.
    pub fn check(&self, route: Route) -> GuardDecision {
        Self::decide(&self.state_rx.borrow(), route)
    }

    /// Waits out rehydration before deciding, so a protected route is never
    /// redirected just because the session had not been restored yet.
    pub async fn resolve(&mut self, route: Route) -> GuardDecision {
        if !route.is_protected() {
            return GuardDecision::Allow;
        }

        let decision = match self.state_rx.wait_for(AuthState::is_settled).await {
            Ok(state) => Self::decide(&state, route),
            Err(_) => {
                warn!("Session manager dropped before settling, denying {route}");
                GuardDecision::Redirect(Route::anonymous_entry())
            }
        };

        debug!("Guard decision for {route}: {decision:?}");
        decision
    }
}
