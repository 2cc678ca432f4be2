use crate::Feature;

use std::str::FromStr;

#[test]
fn test_free_features() {
    let free: Vec<Feature> = Feature::ALL
        .into_iter()
        .filter(|f| !f.requires_premium())
        .collect();

    assert_eq!(
        free,
        vec![Feature::TrendDetection, Feature::StatisticalAnalysis]
    );
}

#[test]
fn given_slug_or_snake_case_when_parse_then_feature() {
    assert_eq!(
        Feature::from_str("anomaly-detection").unwrap(),
        Feature::AnomalyDetection
    );
    assert_eq!(
        Feature::from_str("Predictive_Modeling").unwrap(),
        Feature::PredictiveModeling
    );
}

#[test]
fn given_unknown_slug_when_parse_then_error() {
    assert!(Feature::from_str("teleportation").is_err());
}

#[test]
fn given_any_feature_when_serialized_then_matches_slug() {
    for feature in Feature::ALL {
        assert_eq!(
            serde_json::to_value(feature).unwrap(),
            serde_json::Value::from(feature.slug())
        );
    }
}
