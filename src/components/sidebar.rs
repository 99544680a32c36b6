//! Navigation sidebar for authenticated console pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Administrator entries are gated by a fresh identity lookup, not by the
//! cached session: the section only renders once the server has confirmed a
//! user that passes the administrator predicate. If that lookup fails the
//! entries stay hidden.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::IdentityCheck;
use crate::state::session::SessionStore;

/// Left-hand navigation rail with the admin-only section and sign-out.
#[component]
pub fn Sidebar() -> impl IntoView {
    let store = SessionStore::expect();
    let navigate = use_navigate();

    // Independent role check against the server; deliberately not the
    // cached session identity.
    let fresh_identity = LocalResource::new(|| async {
        match crate::net::api::fetch_current_user().await {
            IdentityCheck::Confirmed(user) => Some(user),
            _ => None,
        }
    });
    let show_admin = move || {
        fresh_identity
            .get()
            .flatten()
            .is_some_and(|user| user.is_administrator())
    };

    let username = move || {
        store
            .session()
            .user()
            .map(|user| user.display_name())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        store.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"AssetDeck"</div>

            <div class="sidebar__nav">
                <A href="/" attr:class="sidebar__link">"Dashboard"</A>
                <A href="/assets" attr:class="sidebar__link">"Assets"</A>

                <Show when=show_admin>
                    <div class="sidebar__section">
                        <div class="sidebar__section-title">"Administration"</div>
                        <A href="/users" attr:class="sidebar__link">"Users"</A>
                        <A href="/database" attr:class="sidebar__link">"Database"</A>
                        <A href="/setup" attr:class="sidebar__link">"Setup"</A>
                    </div>
                </Show>
            </div>

            <div class="sidebar__footer">
                <span class="sidebar__user">{username}</span>
                <button class="sidebar__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
