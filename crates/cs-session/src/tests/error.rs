use crate::SessionError;

use std::path::PathBuf;

#[test]
fn given_file_read_error_when_is_transient_then_returns_true() {
    let err = SessionError::file_read(
        PathBuf::from("/test"),
        std::io::Error::new(std::io::ErrorKind::Other, "test"),
    );
    assert!(err.is_transient());
}

#[test]
fn given_invalid_key_error_when_is_transient_then_returns_false() {
    let err = SessionError::invalid_key("../x", "bad");
    assert!(!err.is_transient());
}

#[test]
fn given_invalid_credentials_when_is_transient_then_returns_false() {
    assert!(!SessionError::invalid_credentials("a@x.com").is_transient());
}

#[test]
fn given_superseded_when_is_transient_then_returns_true() {
    assert!(SessionError::superseded().is_transient());
}

#[test]
fn given_any_error_when_recovery_hint_then_returns_non_empty_string() {
    let errors = vec![
        SessionError::invalid_key("", "empty"),
        SessionError::lock_poisoned("poisoned"),
        SessionError::invalid_credentials("a@x.com"),
        SessionError::superseded(),
        SessionError::not_ready("loading"),
        SessionError::backup_failed(
            PathBuf::from("/test"),
            std::io::Error::new(std::io::ErrorKind::Other, "test"),
        ),
    ];

    for err in errors {
        let hint = err.recovery_hint();
        assert!(
            !hint.is_empty(),
            "recovery_hint should not be empty for {err:?}"
        );
    }
}

#[test]
fn given_serde_error_when_converted_then_serialization_variant() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let err: SessionError = json_err.into();

    assert!(matches!(err, SessionError::Serialization { .. }));
}

#[test]
fn given_invalid_credentials_when_displayed_then_mentions_email() {
    let err = SessionError::invalid_credentials("a@x.com");

    assert!(err.to_string().contains("a@x.com"));
}

#[test]
fn given_invalid_encoding_when_classified_then_corrupted_and_not_transient() {
    let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
    let err = SessionError::invalid_encoding(PathBuf::from("/test/user.json"), utf8_err);

    assert!(err.is_corrupted_record());
    assert!(!err.is_transient());
    assert!(err.recovery_hint().contains("corrupted"));
}
