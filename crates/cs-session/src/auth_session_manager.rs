use crate::{
    FeatureGate, IdentityProvider, Result as SessionResult, RouteGuard, SessionError,
    SessionStore,
};

use cs_core::{AuthState, Session};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};
use tokio::sync::watch;

/// Single writer of the current session.
///
/// State changes are published on a watch channel; the route guard, the
/// feature gate and any view subscribe to it instead of reading globals.
/// Every state change and its write-through to the store happen inside one
/// `send_if_modified` call, so readers never see the two disagree.
pub struct AuthSessionManager {
    state_tx: watch::Sender<AuthState>,
    store: SessionStore,
    provider: Arc<dyn IdentityProvider>,
    /// Bumped by every logout; in-flight logins started under an older
    /// generation are discarded on completion.
    generation: AtomicU64,
}

impl AuthSessionManager {
    /// Creates the manager in `Loading`. Call [`Self::rehydrate`] next, or use
    /// [`Self::start`] which does both.
    pub fn new(store: SessionStore, provider: Arc<dyn IdentityProvider>) -> Self {
        let (state_tx, _) = watch::channel(AuthState::Uninitialized);
        state_tx.send_replace(AuthState::Loading);

        Self {
            state_tx,
            store,
            provider,
            generation: AtomicU64::new(0),
        }
    }

    /// Creates the manager and immediately restores any persisted session.
    pub fn start(store: SessionStore, provider: Arc<dyn IdentityProvider>) -> Self {
        let manager = Self::new(store, provider);
        manager.rehydrate();
        manager
    }

    /// `Loading -> Authenticated | Anonymous` from the persisted record.
    /// No-op once the state has settled.
    pub fn rehydrate(&self) -> AuthState {
        let rehydrated = self.state_tx.send_if_modified(|state| {
            if *state != AuthState::Loading {
                return false;
            }

            *state = match self.store.load() {
                Some(session) => AuthState::Authenticated(session),
                None => AuthState::Anonymous,
            };
            true
        });

        let state = self.state();
        if rehydrated {
            info!("Session rehydrated: {}", state.name());
        } else {
            debug!("Rehydrate skipped, state already {}", state.name());
        }
        state
    }

    pub async fn login(&self, email: &str, password: &str) -> SessionResult<Session> {
        let ticket = self.generation.load(Ordering::SeqCst);
        let session = self.provider.login(email, password).await?;
        self.commit(ticket, session)
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> SessionResult<Session> {
        let ticket = self.generation.load(Ordering::SeqCst);
        let session = self.provider.signup(name, email, password).await?;
        self.commit(ticket, session)
    }

    /// Drops the session and the persisted record. Pending logins started
    /// before this call will not resurrect the session.
    ///
    /// Before rehydration has settled the persisted record is left alone, so
    /// a later `rehydrate` still restores it.
    pub fn logout(&self) {
        let changed = self.state_tx.send_if_modified(|state| {
            self.generation.fetch_add(1, Ordering::SeqCst);

            if !state.is_settled() {
                debug!("Logout while {}, persisted session kept", state.name());
                return false;
            }

            if let Err(e) = self.store.clear() {
                warn!("Persisted session not cleared: {e} ({})", e.recovery_hint());
            }

            if !state.is_authenticated() {
                return false;
            }
            *state = AuthState::Anonymous;
            true
        });

        if changed {
            info!("Logged out");
        } else {
            debug!("Logout with no active session");
        }
    }

    pub fn is_premium_plan(&self) -> bool {
        self.state_tx.borrow().is_premium()
    }

    pub fn state(&self) -> AuthState {
        self.state_tx.borrow().clone()
    }

    pub fn session(&self) -> Option<Session> {
        self.state_tx.borrow().session().cloned()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }

    pub fn route_guard(&self) -> RouteGuard {
        RouteGuard::new(self.subscribe())
    }

    pub fn feature_gate(&self) -> FeatureGate {
        FeatureGate::new(self.subscribe())
    }

    /// Last write wins: a commit replaces whatever session is current.
    fn commit(&self, ticket: u64, session: Session) -> SessionResult<Session> {
        let mut outcome = Ok(());

        self.state_tx.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != ticket {
                outcome = Err(SessionError::superseded());
                return false;
            }

            if !state.is_settled() {
                outcome = Err(SessionError::not_ready(state.name()));
                return false;
            }

            if let Err(e) = self.store.save(&session) {
                warn!(
                    "Session for {} kept in memory only: {e} ({})",
                    session.email,
                    e.recovery_hint()
                );
            }

            *state = AuthState::Authenticated(session.clone());
            true
        });

        match outcome {
            Ok(()) => {
                info!("Authenticated {} ({})", session.email, session.plan.label());
                Ok(session)
            }
            Err(e) => {
                warn!("Discarding session for {}: {e}", session.email);
                Err(e)
            }
        }
    }
}
