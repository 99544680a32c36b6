//! Database admin page (administrator entry).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shell::ConsoleShell;
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

/// Database overview — table row counts from `/api/admin/database`.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DatabasePage() -> impl IntoView {
    let store = SessionStore::expect();
    let navigate = use_navigate();
    install_unauth_redirect(store, navigate);

    let tables = LocalResource::new(|| crate::net::api::fetch_database_tables());

    view! {
        <ConsoleShell>
            <header class="page-header">
                <h1>"Database"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading tables..."</p> }>
                {move || {
                    tables
                        .get()
                        .map(|fetched| match fetched {
                            Some(list) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Table"</th>
                                                <th>"Rows"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|table| {
                                                    view! {
                                                        <tr>
                                                            <td>{table.name}</td>
                                                            <td>{table.rows}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="page-notice">"Database summary is unavailable."</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </ConsoleShell>
    }
}
