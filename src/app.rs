//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    assets::AssetsPage, dashboard::DashboardPage, database::DatabasePage, login::LoginPage,
    setup::SetupPage, users::UsersPage,
};
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the session store once, starts hydration in the browser, and sets
/// up client-side routing. `/login` and `/setup` are the unauthenticated
/// routes; everything else installs the unauth redirect.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::provide();
    #[cfg(feature = "hydrate")]
    store.hydrate();
    #[cfg(not(feature = "hydrate"))]
    let _ = store;

    view! {
        <Stylesheet id="leptos" href="/pkg/assetdeck.css"/>
        <Title text="AssetDeck"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("setup") view=SetupPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("assets") view=AssetsPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("database") view=DatabasePage/>
            </Routes>
        </Router>
    }
}
