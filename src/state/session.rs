//! Session store: the single source of truth for "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once at application start and provided via context; torn down
//! never during the tab's life. Route guards and user-aware components read
//! it; only the store's own operations mutate it.
//!
//! DESIGN
//! ======
//! The session is published from a locally cached identity before any
//! network round-trip, so a returning user renders signed-in immediately.
//! The server stays authoritative for "logged out": a background lookup
//! against `/api/me` can refresh or clear the session, but a mere network
//! failure never signs anyone out. That asymmetry lives in
//! [`Session::reconciled`], which is pure so the whole state machine is
//! testable without a browser.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::api::IdentityCheck;
use crate::net::types::User;
use crate::util::storage;

/// The tri-state session lifecycle.
///
/// `Loading` exists only between application start and the first resolution;
/// every later transition lands on `Authenticated` or `Anonymous`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Hydration has not resolved yet; render neutral, decide nothing.
    #[default]
    Loading,
    /// A signed-in user.
    Authenticated(User),
    /// No session.
    Anonymous,
}

impl Session {
    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Apply the outcome of an identity lookup to this session.
    ///
    /// Rules, in order of authority:
    /// - an authoritative 401 always lands on `Anonymous`;
    /// - a confirmed identity refreshes the session, except on an already
    ///   `Anonymous` session (an explicit logout outranks a stale
    ///   confirmation that was in flight when the user signed out);
    /// - an indeterminate outcome never signs a resolved session out, and
    ///   resolves `Loading` to `Anonymous` since there is nothing to keep.
    pub fn reconciled(self, check: IdentityCheck) -> Session {
        match check {
            IdentityCheck::Unauthenticated => Session::Anonymous,
            IdentityCheck::Confirmed(user) => match self {
                Session::Anonymous => Session::Anonymous,
                _ => Session::Authenticated(user),
            },
            IdentityCheck::Indeterminate => match self {
                Session::Loading => Session::Anonymous,
                resolved => resolved,
            },
        }
    }
}

/// Handle to the session store. Cheap to copy; all clones observe the same
/// underlying signal.
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
}

impl SessionStore {
    /// Create a store in the `Loading` state.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::Loading),
        }
    }

    /// Create the store and register it in the reactive context tree.
    pub fn provide() -> Self {
        let store = Self::new();
        provide_context(store);
        store
    }

    /// Fetch the store from context. Panics if [`SessionStore::provide`] was
    /// not called by an ancestor, which is a wiring bug.
    pub fn expect() -> Self {
        expect_context::<SessionStore>()
    }

    /// Reactive read for views; re-runs the surrounding closure on change.
    pub fn session(&self) -> Session {
        self.session.get()
    }

    /// Synchronous snapshot of the current session. Never blocks, never
    /// touches the network, never fails.
    pub fn current(&self) -> Session {
        self.session.get_untracked()
    }

    /// Resolve the initial session. Invoked once at startup, browser only.
    ///
    /// A valid cached identity is published immediately so the UI renders
    /// without waiting on the network; the server lookup then runs in the
    /// background. With no usable cache the lookup itself resolves the
    /// session. Malformed cached data is discarded by the storage layer.
    pub fn hydrate(&self) {
        if let Some(user) = storage::read_cached_user() {
            self.session.set(Session::Authenticated(user));
        }
        self.spawn_identity_reconcile();
    }

    /// Publish `user` as the current session and persist it, overwriting any
    /// previously cached identity.
    pub fn login(&self, user: User) {
        storage::write_cached_user(&user);
        self.session.set(Session::Authenticated(user));
    }

    /// Sign out: request server-side termination (best effort, in the
    /// background), then clear the cached identity and publish `Anonymous`
    /// regardless of the network outcome. Safe to call repeatedly.
    pub fn logout(&self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(api::logout());
        storage::clear_cached_user();
        self.session.set(Session::Anonymous);
    }

    /// Background lookup against `/api/me`, folded into the session via
    /// [`Session::reconciled`]. An authoritative 401 also erases the cached
    /// identity; every other failure leaves local state alone.
    fn spawn_identity_reconcile(&self) {
        #[cfg(feature = "hydrate")]
        {
            let session = self.session;
            leptos::task::spawn_local(async move {
                let check = api::fetch_current_user().await;
                if check == IdentityCheck::Unauthenticated {
                    storage::clear_cached_user();
                }
                let next = session.get_untracked().reconciled(check);
                session.set(next);
            });
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
