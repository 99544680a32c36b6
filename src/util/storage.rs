//! Browser localStorage persistence for the cached session identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! One durable key holds the signed-in user as JSON so a reload can render
//! signed-in before any network round-trip. These helpers centralize the
//! hydrate-only web-sys glue; storage failures are swallowed — persistence
//! is an optimization, never a correctness dependency.

#[cfg(feature = "hydrate")]
use crate::net::types::parse_user_json;
use crate::net::types::User;

#[cfg(feature = "hydrate")]
const SESSION_USER_KEY: &str = "assetdeck_session_user";

/// Load the cached identity from localStorage.
///
/// Corrupt or partial content is discarded (and removed, so later reads do
/// not reparse it) and reported as absent. Returns `None` on the server.
pub fn read_cached_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(SESSION_USER_KEY).ok().flatten()?;
        let user = parse_user_json(&raw);
        if user.is_none() {
            let _ = storage.remove_item(SESSION_USER_KEY);
        }
        user
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Save the identity to localStorage, overwriting any previous value.
pub fn write_cached_user(user: &User) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        let _ = storage.set_item(SESSION_USER_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Erase the cached identity.
pub fn clear_cached_user() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(SESSION_USER_KEY);
        }
    }
}
