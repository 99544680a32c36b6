//! Layout wrapper for authenticated pages.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::state::session::SessionStore;

/// Sidebar + content layout.
///
/// While the session is still resolving this renders a neutral loading view
/// and nothing else; no route decision happens until hydration completes.
#[component]
pub fn ConsoleShell(children: ChildrenFn) -> impl IntoView {
    let store = SessionStore::expect();

    view! {
        <Show
            when=move || !store.session().is_loading()
            fallback=|| view! { <div class="console-loading">"Loading..."</div> }
        >
            <div class="console-layout">
                <Sidebar/>
                <main class="console-layout__content">{children()}</main>
            </div>
        </Show>
    }
}
