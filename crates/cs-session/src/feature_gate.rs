use cs_core::{AuthState, Feature};

use serde::Serialize;
use tokio::sync::watch;

const UPSELL_TITLE: &str = "Premium Feature";
const UPSELL_MESSAGE: &str = "Upgrade to our Premium plan to access advanced chart analysis \
     features including trend prediction, pattern recognition, and AI-powered insights.";
const UPSELL_ACTION: &str = "Upgrade to Premium";

/// Placeholder rendered instead of a gated feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Upsell {
    pub feature: Feature,
    pub title: &'static str,
    pub message: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    Full,
    Restricted { upsell: Upsell },
}

impl GateDecision {
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Premium gating. Re-evaluated on every call, nothing is cached.
pub struct FeatureGate {
    state_rx: watch::Receiver<AuthState>,
}

impl FeatureGate {
    pub fn new(state_rx: watch::Receiver<AuthState>) -> Self {
        Self { state_rx }
    }

    pub fn decide(is_premium: bool, feature: Feature) -> GateDecision {
        if is_premium || !feature.requires_premium() {
            return GateDecision::Full;
        }

        GateDecision::Restricted {
            upsell: Upsell {
                feature,
                title: UPSELL_TITLE,
                message: UPSELL_MESSAGE,
                action: UPSELL_ACTION,
            },
        }
    }

    pub fn is_premium_plan(&self) -> bool {
        self.state_rx.borrow().is_premium()
    }

    pub fn evaluate(&self, feature: Feature) -> GateDecision {
        Self::decide(self.is_premium_plan(), feature)
    }

    /// The "PRO" marker next to gated navigation entries.
    pub fn show_pro_badge(&self) -> bool {
        !self.is_premium_plan()
    }
}
