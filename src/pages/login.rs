//! Login page with username/password credential form.
//!
//! The credential exchange happens here, outside the session store; on
//! success the resulting user is handed to [`SessionStore::login`] and the
//! authenticated-redirect effect takes over.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = SessionStore::expect();
    let navigate = use_navigate();

    // Already signed in (or signing in just succeeded): go to the console.
    Effect::new(move || {
        if store.session().is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Offer the first-run setup link only when the backend reports it open.
    let setup_required = LocalResource::new(|| crate::net::api::fetch_setup_required());
    let show_setup_link = move || setup_required.get().flatten().unwrap_or(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || password_value.is_empty() {
            info.set("Enter both username and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&username_value, &password_value).await {
                Ok(user) => {
                    store.login(user);
                }
                Err(e) => {
                    info.set(format!("Sign-in failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"AssetDeck"</h1>
                <p class="login-card__subtitle">"IT asset console"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=show_setup_link>
                    <A href="/setup" attr:class="login-setup-link">
                        "First-run setup"
                    </A>
                </Show>
            </div>
        </div>
    }
}
