use crate::{PlanTier, Session};

use googletest::prelude::*;

#[test]
fn given_email_with_at_when_local_part_then_text_before_at() {
    assert_eq!(Session::local_part("alice@x.com"), "alice");
}

#[test]
fn given_email_with_two_ats_when_local_part_then_stops_at_first() {
    assert_eq!(Session::local_part("a@b@c"), "a");
}

#[test]
fn given_email_without_at_when_local_part_then_whole_input() {
    assert_eq!(Session::local_part("nobody"), "nobody");
}

#[test]
fn given_session_when_serialize_then_flat_record_with_four_fields() {
    let session = Session::new("1", "bob@premium.io", "bob", PlanTier::Premium);

    let value = serde_json::to_value(&session).unwrap();

    assert_that!(
        value,
        eq(&serde_json::json!({
            "id": "1",
            "email": "bob@premium.io",
            "name": "bob",
            "plan": "premium"
        }))
    );
}

#[test]
fn given_unknown_plan_when_deserialize_then_error() {
    let json = r#"{"id":"1","email":"a@b.c","name":"a","plan":"gold"}"#;
    assert!(serde_json::from_str::<Session>(json).is_err());
}

#[test]
fn given_missing_field_when_deserialize_then_error() {
    let json = r#"{"id":"1","email":"a@b.c","plan":"free"}"#;
    assert!(serde_json::from_str::<Session>(json).is_err());
}
