use super::*;

fn user(username: &str, role: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        username: username.to_owned(),
        first_name: None,
        last_name: None,
        email: None,
        department: None,
        role: role.map(str::to_owned),
    }
}

// =============================================================
// Identity payload parsing
// =============================================================

#[test]
fn parse_user_json_accepts_direct_shape() {
    let parsed = parse_user_json(r#"{"id":"u1","username":"alice","role":"user"}"#)
        .expect("direct payload");
    assert_eq!(parsed.id, "u1");
    assert_eq!(parsed.username, "alice");
    assert_eq!(parsed.role.as_deref(), Some("user"));
}

#[test]
fn parse_user_json_accepts_envelope_shape() {
    let parsed = parse_user_json(r#"{"user":{"id":"u2","username":"bob","email":"b@x.io"}}"#)
        .expect("envelope payload");
    assert_eq!(parsed.id, "u2");
    assert_eq!(parsed.email.as_deref(), Some("b@x.io"));
}

#[test]
fn parse_user_json_rejects_malformed_text() {
    assert!(parse_user_json("not json at all").is_none());
    assert!(parse_user_json("{\"id\":").is_none());
    assert!(parse_user_json("").is_none());
}

#[test]
fn parse_user_json_rejects_partial_identity() {
    // Structurally valid JSON missing the username field.
    assert!(parse_user_json(r#"{"id":"u1"}"#).is_none());
    // Present but empty fields fail the invariant too.
    assert!(parse_user_json(r#"{"id":"","username":"alice"}"#).is_none());
    assert!(parse_user_json(r#"{"id":"u1","username":""}"#).is_none());
}

// =============================================================
// Administrator predicate
// =============================================================

#[test]
fn admin_role_grants_administrator() {
    assert!(user("carol", Some("admin")).is_administrator());
}

#[test]
fn plain_role_does_not_grant_administrator() {
    assert!(!user("alice", Some("user")).is_administrator());
    assert!(!user("alice", None).is_administrator());
}

#[test]
fn reserved_username_grants_administrator_without_role() {
    assert!(user("admin", None).is_administrator());
}

// =============================================================
// Display name
// =============================================================

#[test]
fn display_name_prefers_full_name() {
    let mut u = user("alice", None);
    u.first_name = Some("Alice".to_owned());
    u.last_name = Some("Liddell".to_owned());
    assert_eq!(u.display_name(), "Alice Liddell");
}

#[test]
fn display_name_falls_back_to_username() {
    assert_eq!(user("alice", None).display_name(), "alice");
}

#[test]
fn stats_accept_float_encoded_counts() {
    let stats: DashboardStats =
        serde_json::from_str(r#"{"assets":12.0,"users":3,"licenses":0,"equipment":7}"#)
            .expect("stats payload");
    assert_eq!(stats.assets, 12);
    assert_eq!(stats.equipment, 7);
}
