//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior. While the session is still loading no route decision is made.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionStore};

/// Redirect to `/login` whenever the session has resolved to anonymous.
pub fn install_unauth_redirect<F>(store: SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if store.session() == Session::Anonymous {
            navigate("/login", NavigateOptions::default());
        }
    });
}
