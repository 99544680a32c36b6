//! Dashboard page with inventory count tiles.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Counts come from `/api/stats`;
//! a failed fetch degrades to an unavailable notice, never an error page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shell::ConsoleShell;
use crate::net::types::DashboardStats;
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

/// Dashboard page — greeting plus count tiles.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = SessionStore::expect();
    let navigate = use_navigate();
    install_unauth_redirect(store, navigate);

    let stats = LocalResource::new(|| crate::net::api::fetch_stats());

    let greeting = move || {
        store
            .session()
            .user()
            .map(|user| format!("Signed in as {}", user.display_name()))
            .unwrap_or_default()
    };

    view! {
        <ConsoleShell>
            <header class="page-header">
                <h1>"Dashboard"</h1>
                <p class="page-header__meta">{greeting}</p>
            </header>

            <Suspense fallback=move || view! { <p>"Loading counts..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|fetched| match fetched {
                            Some(stats) => view! { <StatTiles stats=stats/> }.into_any(),
                            None => {
                                view! { <p class="page-notice">"Counts are unavailable."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </ConsoleShell>
    }
}

/// Count tile row for the four tracked inventories.
#[component]
fn StatTiles(stats: DashboardStats) -> impl IntoView {
    view! {
        <div class="stat-grid">
            <div class="stat-tile">
                <span class="stat-tile__value">{stats.assets}</span>
                <span class="stat-tile__label">"Assets"</span>
            </div>
            <div class="stat-tile">
                <span class="stat-tile__value">{stats.users}</span>
                <span class="stat-tile__label">"Users"</span>
            </div>
            <div class="stat-tile">
                <span class="stat-tile__value">{stats.licenses}</span>
                <span class="stat-tile__label">"Licenses"</span>
            </div>
            <div class="stat-tile">
                <span class="stat-tile__value">{stats.equipment}</span>
                <span class="stat-tile__label">"Equipment"</span>
            </div>
        </div>
    }
}
