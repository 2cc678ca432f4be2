use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::Serialize;

/// Dashboard affordances that may sit behind the premium plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    TrendDetection,
    StatisticalAnalysis,
    AnomalyDetection,
    PredictiveModeling,
    SentimentAnalysis,
    /// The whole AI analysis panel
    AiAnalysis,
    /// Billing date, amount and payment method in settings
    BillingDetails,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Self::TrendDetection,
        Self::StatisticalAnalysis,
        Self::AnomalyDetection,
        Self::PredictiveModeling,
        Self::SentimentAnalysis,
        Self::AiAnalysis,
        Self::BillingDetails,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::TrendDetection => "trend-detection",
            Self::StatisticalAnalysis => "statistical-analysis",
            Self::AnomalyDetection => "anomaly-detection",
            Self::PredictiveModeling => "predictive-modeling",
            Self::SentimentAnalysis => "sentiment-analysis",
            Self::AiAnalysis => "ai-analysis",
            Self::BillingDetails => "billing-details",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::TrendDetection => "Trend Detection",
            Self::StatisticalAnalysis => "Statistical Analysis",
            Self::AnomalyDetection => "Anomaly Detection",
            Self::PredictiveModeling => "Predictive Modeling",
            Self::SentimentAnalysis => "Sentiment Analysis",
            Self::AiAnalysis => "AI Chart Analysis",
            Self::BillingDetails => "Billing Details",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::TrendDetection => "Identify up/down trends and patterns",
            Self::StatisticalAnalysis => "Get detailed statistical insights",
            Self::AnomalyDetection => "Find outliers and anomalies",
            Self::PredictiveModeling => "Forecast future trends",
            Self::SentimentAnalysis => "Determine market sentiment",
            Self::AiAnalysis => "Trend prediction, pattern recognition and AI-powered insights",
            Self::BillingDetails => "Next billing date, amount and payment method",
        }
    }

    pub fn requires_premium(&self) -> bool {
        !matches!(self, Self::TrendDetection | Self::StatisticalAnalysis)
    }
}

impl FromStr for Feature {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|feature| feature.slug() == wanted)
            .ok_or_else(|| CoreError::UnknownFeature {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}
