use crate::PlanTier;

use serde::{Deserialize, Serialize};

/// The currently authenticated identity.
///
/// Serializes to the flat `{id, email, name, plan}` record kept in the
/// session slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: String,
    pub plan: PlanTier,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        plan: PlanTier,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            plan,
        }
    }

    /// Display name derived from an email address: the text before the first `@`.
    pub fn local_part(email: &str) -> &str {
        email.split('@').next().unwrap_or(email)
    }

    pub fn is_premium(&self) -> bool {
        self.plan.is_premium()
    }
}
