use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::Serialize;

/// Navigation targets of the client.
///
/// Everything under `/dashboard` requires an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Landing,
    Login,
    Signup,
    Overview,
    Upload,
    Analysis,
    Settings,
    /// Any other path under `/dashboard/`: the dashboard shell with no panel.
    DashboardOther,
}

const DASHBOARD_PREFIX: &str = "/dashboard/";

impl Route {
    /// The named routes. `DashboardOther` is reached only by parsing.
    pub const ALL: [Route; 7] = [
        Self::Landing,
        Self::Login,
        Self::Signup,
        Self::Overview,
        Self::Upload,
        Self::Analysis,
        Self::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Overview => "/dashboard",
            Self::Upload => "/dashboard/upload",
            Self::Analysis => "/dashboard/analysis",
            Self::Settings => "/dashboard/settings",
            Self::DashboardOther => "/dashboard/*",
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Overview
                | Self::Upload
                | Self::Analysis
                | Self::Settings
                | Self::DashboardOther
        )
    }

    /// Where anonymous visitors of a protected route are sent.
    pub fn anonymous_entry() -> Self {
        Self::Login
    }
}

impl FromStr for Route {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let trimmed = s.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };

        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .or_else(|| normalized.starts_with(DASHBOARD_PREFIX).then_some(Self::DashboardOther))
            .ok_or_else(|| CoreError::InvalidRoute {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
