//! # assetdeck
//!
//! Leptos + WASM browser console for the AssetDeck IT-asset-management
//! service. The backend REST API (identity, assets, users, admin data) is an
//! external service reached over same-origin HTTP.
//!
//! This crate contains pages, components, the session store, network types,
//! and the REST helpers. The session store in `state::session` is the single
//! source of truth for the signed-in user; everything else reads it through
//! context.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
