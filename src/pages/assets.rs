//! Asset list page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shell::ConsoleShell;
use crate::net::types::Asset;
use crate::state::session::SessionStore;
use crate::util::auth::install_unauth_redirect;

/// Asset list page — read-only inventory table.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn AssetsPage() -> impl IntoView {
    let store = SessionStore::expect();
    let navigate = use_navigate();
    install_unauth_redirect(store, navigate);

    let assets = LocalResource::new(|| crate::net::api::fetch_assets());

    view! {
        <ConsoleShell>
            <header class="page-header">
                <h1>"Assets"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading assets..."</p> }>
                {move || {
                    assets
                        .get()
                        .map(|fetched| match fetched {
                            Some(list) if list.is_empty() => {
                                view! { <p class="page-notice">"No assets yet."</p> }.into_any()
                            }
                            Some(list) => view! { <AssetTable list=list/> }.into_any(),
                            None => {
                                view! { <p class="page-notice">"Assets are unavailable."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </ConsoleShell>
    }
}

#[component]
fn AssetTable(list: Vec<Asset>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Tag"</th>
                    <th>"Name"</th>
                    <th>"Model"</th>
                    <th>"Status"</th>
                    <th>"Assigned To"</th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|asset| {
                        view! {
                            <tr>
                                <td>{asset.asset_tag}</td>
                                <td>{asset.name}</td>
                                <td>{asset.model.unwrap_or_default()}</td>
                                <td>{asset.status.unwrap_or_default()}</td>
                                <td>{asset.assigned_to.unwrap_or_default()}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
