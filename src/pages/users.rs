//! User management page (administrator entry).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shell::ConsoleShell;
use crate::net::types::User;
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

/// User list page — read-only account table. The backend enforces the
/// administrator requirement; a rejected fetch degrades to a notice.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn UsersPage() -> impl IntoView {
    let store = SessionStore::expect();
    let navigate = use_navigate();
    install_unauth_redirect(store, navigate);

    let users = LocalResource::new(|| crate::net::api::fetch_users());

    view! {
        <ConsoleShell>
            <header class="page-header">
                <h1>"Users"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|fetched| match fetched {
                            Some(list) => view! { <UserTable list=list/> }.into_any(),
                            None => {
                                view! { <p class="page-notice">"Users are unavailable."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </ConsoleShell>
    }
}

#[component]
fn UserTable(list: Vec<User>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Username"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Department"</th>
                    <th>"Role"</th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|user| {
                        let name = user.display_name();
                        view! {
                            <tr>
                                <td>{user.username}</td>
                                <td>{name}</td>
                                <td>{user.email.unwrap_or_default()}</td>
                                <td>{user.department.unwrap_or_default()}</td>
                                <td>{user.role.unwrap_or_default()}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
