use super::*;

fn user(id: &str, username: &str, role: Option<&str>) -> User {
    User {
        id: id.to_owned(),
        username: username.to_owned(),
        first_name: None,
        last_name: None,
        email: None,
        department: None,
        role: role.map(str::to_owned),
    }
}

// =============================================================
// Session defaults and accessors
// =============================================================

#[test]
fn session_starts_loading() {
    let session = Session::default();
    assert!(session.is_loading());
    assert!(!session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn authenticated_session_exposes_user() {
    let session = Session::Authenticated(user("u1", "alice", Some("user")));
    assert!(session.is_authenticated());
    assert_eq!(session.user().map(|u| u.username.as_str()), Some("alice"));
}

// =============================================================
// Reconciliation state machine
// =============================================================

#[test]
fn confirmed_resolves_loading_to_authenticated() {
    let next = Session::Loading.reconciled(IdentityCheck::Confirmed(user("u1", "alice", None)));
    assert_eq!(next, Session::Authenticated(user("u1", "alice", None)));
}

#[test]
fn confirmed_refreshes_cached_identity_with_server_truth() {
    let cached = Session::Authenticated(user("u1", "alice", None));
    let fresh = user("u1", "alice", Some("admin"));
    let next = cached.reconciled(IdentityCheck::Confirmed(fresh.clone()));
    assert_eq!(next, Session::Authenticated(fresh));
}

#[test]
fn confirmed_does_not_resurrect_an_anonymous_session() {
    // A stale /api/me response landing after logout must not sign back in.
    let next = Session::Anonymous.reconciled(IdentityCheck::Confirmed(user("u1", "alice", None)));
    assert_eq!(next, Session::Anonymous);
}

#[test]
fn authoritative_unauthenticated_clears_any_state() {
    let cached = Session::Authenticated(user("u1", "alice", None));
    assert_eq!(cached.reconciled(IdentityCheck::Unauthenticated), Session::Anonymous);
    assert_eq!(
        Session::Loading.reconciled(IdentityCheck::Unauthenticated),
        Session::Anonymous
    );
    assert_eq!(
        Session::Anonymous.reconciled(IdentityCheck::Unauthenticated),
        Session::Anonymous
    );
}

#[test]
fn indeterminate_preserves_cached_identity() {
    // A network failure never signs a user out.
    let cached = Session::Authenticated(user("u1", "alice", Some("user")));
    let next = cached.clone().reconciled(IdentityCheck::Indeterminate);
    assert_eq!(next, cached);
}

#[test]
fn indeterminate_resolves_loading_to_anonymous() {
    // With no cached identity there is nothing to preserve.
    assert_eq!(
        Session::Loading.reconciled(IdentityCheck::Indeterminate),
        Session::Anonymous
    );
}

// =============================================================
// Store operations
// =============================================================

#[test]
fn login_then_current_returns_exactly_that_user() {
    let store = SessionStore::new();
    let alice = user("u1", "alice", Some("user"));
    store.login(alice.clone());
    assert_eq!(store.current(), Session::Authenticated(alice));
}

#[test]
fn login_overwrites_previous_identity() {
    let store = SessionStore::new();
    store.login(user("u1", "alice", None));
    let bob = user("u2", "bob", None);
    store.login(bob.clone());
    assert_eq!(store.current(), Session::Authenticated(bob));
}

#[test]
fn logout_results_in_anonymous() {
    let store = SessionStore::new();
    store.login(user("u1", "alice", None));
    store.logout();
    assert_eq!(store.current(), Session::Anonymous);
}

#[test]
fn logout_is_idempotent() {
    let store = SessionStore::new();
    store.login(user("u1", "alice", None));
    store.logout();
    store.logout();
    assert_eq!(store.current(), Session::Anonymous);
}

#[test]
fn new_store_starts_loading() {
    let store = SessionStore::new();
    assert!(store.current().is_loading());
}
