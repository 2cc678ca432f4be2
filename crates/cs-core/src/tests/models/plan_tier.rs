use crate::PlanTier;

use std::str::FromStr;

#[test]
fn test_plan_tier_as_str() {
    assert_eq!(PlanTier::Free.as_str(), "free");
    assert_eq!(PlanTier::Premium.as_str(), "premium");
}

#[test]
fn test_plan_tier_from_str() {
    assert_eq!(PlanTier::from_str("free").unwrap(), PlanTier::Free);
    assert_eq!(PlanTier::from_str("premium").unwrap(), PlanTier::Premium);
    assert!(PlanTier::from_str("Premium").is_err());
    assert!(PlanTier::from_str("gold").is_err());
}

#[test]
fn test_plan_tier_default() {
    assert_eq!(PlanTier::default(), PlanTier::Free);
}

#[test]
fn test_plan_tier_labels() {
    assert_eq!(PlanTier::Free.label(), "Free Plan");
    assert_eq!(PlanTier::Premium.label(), "Premium Plan");
    assert_eq!(
        PlanTier::Premium.summary(),
        "Unlimited access to all features"
    );
}

#[test]
fn given_plan_when_serialize_then_lowercase_string() {
    assert_eq!(
        serde_json::to_string(&PlanTier::Premium).unwrap(),
        "\"premium\""
    );
    assert_eq!(serde_json::to_string(&PlanTier::Free).unwrap(), "\"free\"");
}
