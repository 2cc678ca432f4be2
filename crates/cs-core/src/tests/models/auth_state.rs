use crate::{AuthState, PlanTier, Session};

#[test]
fn given_default_state_when_checked_then_uninitialized_and_unsettled() {
    let state = AuthState::default();
    assert_eq!(state, AuthState::Uninitialized);
    assert!(!state.is_settled());
}

#[test]
fn given_loading_state_when_checked_then_not_premium() {
    assert!(!AuthState::Loading.is_premium());
    assert!(!AuthState::Loading.is_settled());
}

#[test]
fn given_free_session_when_checked_then_authenticated_but_not_premium() {
    let state = AuthState::Authenticated(Session::new("1", "a@x.com", "a", PlanTier::Free));
    assert!(state.is_authenticated());
    assert!(state.is_settled());
    assert!(!state.is_premium());
}

#[test]
fn given_premium_session_when_checked_then_premium() {
    let state = AuthState::Authenticated(Session::new(
        "1",
        "bob@premium.io",
        "bob",
        PlanTier::Premium,
    ));
    assert!(state.is_premium());
    assert_eq!(state.name(), "authenticated");
}
