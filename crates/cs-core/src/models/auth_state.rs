use crate::Session;

use serde::Serialize;

/// Session lifecycle as seen by every consumer of the session manager.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "session", rename_all = "snake_case")]
pub enum AuthState {
    #[default]
    Uninitialized,
    /// Persisted session is being rehydrated
    Loading,
    Anonymous,
    Authenticated(Session),
}

impl AuthState {
    /// True once rehydration has finished, whatever its outcome.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Anonymous | Self::Authenticated(_))
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_premium(&self) -> bool {
        self.session().is_some_and(Session::is_premium)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Loading => "loading",
            Self::Anonymous => "anonymous",
            Self::Authenticated(_) => "authenticated",
        }
    }
}
