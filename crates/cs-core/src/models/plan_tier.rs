use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Subscription tier attached to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Every new account starts here
    #[default]
    Free,
    /// Unlocks the gated analysis features
    Premium,
}

impl PlanTier {
    /// Convert to persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Premium => "premium",
        }
    }

    /// Label shown next to the account in the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            Self::Free => "Free Plan",
            Self::Premium => "Premium Plan",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Self::Free => "Basic access with limited features",
            Self::Premium => "Unlimited access to all features",
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, Self::Premium)
    }
}

impl FromStr for PlanTier {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "free" => Ok(Self::Free),
            "premium" => Ok(Self::Premium),
            _ => Err(CoreError::InvalidPlan {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
