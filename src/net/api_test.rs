use super::*;

#[test]
fn classify_confirms_direct_user_payload() {
    let check = classify_identity_response(200, r#"{"id":"u1","username":"alice"}"#);
    match check {
        IdentityCheck::Confirmed(user) => assert_eq!(user.username, "alice"),
        other => panic!("expected Confirmed, got {other:?}"),
    }
}

#[test]
fn classify_confirms_enveloped_user_payload() {
    let check = classify_identity_response(200, r#"{"user":{"id":"u1","username":"alice"}}"#);
    assert!(matches!(check, IdentityCheck::Confirmed(_)));
}

#[test]
fn classify_treats_401_as_authoritative() {
    assert_eq!(
        classify_identity_response(401, ""),
        IdentityCheck::Unauthenticated
    );
    // Even a body that parses as a user does not outrank the status.
    assert_eq!(
        classify_identity_response(401, r#"{"id":"u1","username":"alice"}"#),
        IdentityCheck::Unauthenticated
    );
}

#[test]
fn classify_treats_server_errors_as_indeterminate() {
    assert_eq!(classify_identity_response(500, ""), IdentityCheck::Indeterminate);
    assert_eq!(classify_identity_response(503, "busy"), IdentityCheck::Indeterminate);
    assert_eq!(classify_identity_response(403, ""), IdentityCheck::Indeterminate);
}

#[test]
fn classify_treats_unparseable_success_body_as_indeterminate() {
    assert_eq!(
        classify_identity_response(200, "<html>proxy error</html>"),
        IdentityCheck::Indeterminate
    );
    assert_eq!(
        classify_identity_response(200, r#"{"id":"u1"}"#),
        IdentityCheck::Indeterminate
    );
}

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(429), "login failed: 429");
}

#[test]
fn setup_failed_message_formats_status() {
    assert_eq!(setup_failed_message(409), "setup failed: 409");
}
